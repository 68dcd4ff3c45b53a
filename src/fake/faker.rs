//! Random primitives for fake record generation.
//!
//! The generator only depends on the [`FakeSource`] trait. [`RngFaker`] is the
//! default implementation: names, filler text, email domains and phone numbers
//! come from the `fake` crate, driven by any [`rand::Rng`]. Seed it with
//! [`RngFaker::seeded`] for reproducible graphs.

use fake::{
    faker::{
        internet::en::FreeEmailProvider,
        lorem::en::{Paragraph, Word},
        name::en::{FirstName, LastName},
        number::raw::NumberWithFormat,
        phone_number::en::PhoneNumber,
    },
    locales::EN,
    Fake,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Departments courses are drawn from.
const SUBJECTS: &[&str] = &[
    "Mathematics", "Computer Science", "Physics", "Chemistry", "Biology", "Economics",
    "Statistics", "Psychology", "History", "Philosophy", "Linguistics", "Astronomy", "Geology",
    "Sociology", "Anthropology", "Engineering", "Music", "Literature", "Geography", "Ecology",
];

/// Sentences per generated paragraph.
const PARAGRAPH_SENTENCES: std::ops::Range<usize> = 3..7;

/// Source of random values for fixture builders.
///
/// Strings only need to be non-empty and plausible; numeric draws must respect
/// their inclusive bounds.
pub trait FakeSource {
    /// Uniform integer in `min..=max`. Returns `min` when the range is empty.
    fn number_between(&mut self, min: u32, max: u32) -> u32;

    /// Uniform index into a sequence of `len` items, `None` when `len` is zero.
    fn index(&mut self, len: usize) -> Option<usize>;

    /// Sample of a normal distribution.
    fn normal(&mut self, mean: f64, std_dev: f64) -> f64;

    fn first_name(&mut self) -> String;

    fn last_name(&mut self) -> String;

    /// Single lowercase word.
    fn word(&mut self) -> String;

    /// A few sentences of filler text.
    fn paragraph(&mut self) -> String;

    /// Academic subject, e.g. `"Computer Science"`.
    fn subject(&mut self) -> String;

    /// Course title made of a subject and a three-digit level.
    fn course_name(&mut self) -> String;

    /// Email address whose local part is derived from `name`.
    fn email(&mut self, name: &str) -> String;

    fn phone_number(&mut self) -> String;

    /// `count` decimal digits, the first one non-zero.
    fn digits(&mut self, count: usize) -> String;

    /// Random element of `items`, `None` when it is empty.
    fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T>
    where
        Self: Sized,
    {
        self.index(items.len()).map(|i| &items[i])
    }
}

/// [`FakeSource`] backed by the `fake` crate's English locale, drawing from
/// any [`rand::Rng`].
pub struct RngFaker<R = StdRng> {
    rng: R,
}

impl RngFaker<StdRng> {
    /// Deterministic faker: the same seed yields the same sequence of values.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Faker seeded from the operating system.
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> RngFaker<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> FakeSource for RngFaker<R> {
    fn number_between(&mut self, min: u32, max: u32) -> u32 {
        if max <= min {
            return min;
        }
        self.rng.random_range(min..=max)
    }

    fn index(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.rng.random_range(0..len))
    }

    fn normal(&mut self, mean: f64, std_dev: f64) -> f64 {
        // Box-Muller; 1 - u keeps the logarithm finite.
        let u1: f64 = 1.0 - self.rng.random::<f64>();
        let u2: f64 = self.rng.random::<f64>();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }

    fn first_name(&mut self) -> String {
        FirstName().fake_with_rng(&mut self.rng)
    }

    fn last_name(&mut self) -> String {
        LastName().fake_with_rng(&mut self.rng)
    }

    fn word(&mut self) -> String {
        let word: String = Word().fake_with_rng(&mut self.rng);
        word.to_lowercase()
    }

    fn paragraph(&mut self) -> String {
        Paragraph(PARAGRAPH_SENTENCES).fake_with_rng(&mut self.rng)
    }

    fn subject(&mut self) -> String {
        self.pick(SUBJECTS).copied().unwrap_or("General Studies").to_string()
    }

    fn course_name(&mut self) -> String {
        let subject = self.subject();
        format!("{} {}", subject, self.rng.random_range(100..=499))
    }

    fn email(&mut self, name: &str) -> String {
        let local: String = name
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        let domain: String = FreeEmailProvider().fake_with_rng(&mut self.rng);
        format!("{}@{}", local, domain)
    }

    fn phone_number(&mut self) -> String {
        PhoneNumber().fake_with_rng(&mut self.rng)
    }

    fn digits(&mut self, count: usize) -> String {
        if count == 0 {
            return String::new();
        }
        // `^` is a non-zero digit, `#` any digit
        let format = format!("^{}", "#".repeat(count - 1));
        NumberWithFormat(EN, &format).fake_with_rng(&mut self.rng)
    }
}
