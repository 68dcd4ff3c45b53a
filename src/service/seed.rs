use entity::prelude::{EntityKind, RecordStore};

use crate::{
    error::GenerateError,
    fake::{FakeSource, Generator, TemplateSource},
};

/// Number of records to generate per kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedPlan {
    counts: [usize; EntityKind::ALL.len()],
}

impl SeedPlan {
    /// Plan generating no records at all.
    pub fn empty() -> Self {
        Self {
            counts: [0; EntityKind::ALL.len()],
        }
    }

    pub fn count(&self, kind: EntityKind) -> usize {
        self.counts[position(kind)]
    }

    pub fn set(&mut self, kind: EntityKind, count: usize) {
        self.counts[position(kind)] = count;
    }

    /// Builder-style [`SeedPlan::set`].
    pub fn with(mut self, kind: EntityKind, count: usize) -> Self {
        self.set(kind, count);
        self
    }

    /// Kinds with their counts, producers before the kinds referencing them.
    pub fn ordered(&self) -> impl Iterator<Item = (EntityKind, usize)> + '_ {
        EntityKind::ALL
            .into_iter()
            .map(|kind| (kind, self.count(kind)))
    }

    /// Total number of records the plan generates.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

impl Default for SeedPlan {
    /// A small but complete staffing graph.
    fn default() -> Self {
        Self::empty()
            .with(EntityKind::Sessions, 4)
            .with(EntityKind::PositionTemplates, 8)
            .with(EntityKind::Instructors, 10)
            .with(EntityKind::Positions, 20)
            .with(EntityKind::Applicants, 30)
            .with(EntityKind::Applications, 40)
            .with(EntityKind::Preferences, 60)
            .with(EntityKind::Assignments, 25)
            .with(EntityKind::WageChunks, 20)
            .with(EntityKind::ReportingTags, 5)
    }
}

/// Slot of `kind` in the count table; variants are declared in generation order.
fn position(kind: EntityKind) -> usize {
    kind as usize
}

/// Seeds a fresh record store according to a [`SeedPlan`].
pub struct SeedService<F, T> {
    generator: Generator<F, T>,
}

impl<F: FakeSource, T: TemplateSource> SeedService<F, T> {
    pub fn new(generator: Generator<F, T>) -> Self {
        Self { generator }
    }

    /// Generates every kind of the plan into a new store.
    ///
    /// Kinds are generated in dependency order, each batch appended before the
    /// next is built. The finished store is checked for dangling references.
    ///
    /// # Arguments
    /// - `plan` - Number of records per kind
    ///
    /// # Returns
    /// - `Ok(RecordStore)` - Referentially valid store holding the planned records
    /// - `Err(GenerateError::DanglingReferences)` - The finished store is inconsistent
    /// - `Err(GenerateError)` - A batch could not be generated
    pub fn run(&mut self, plan: &SeedPlan) -> Result<RecordStore, GenerateError> {
        let mut store = RecordStore::new();

        for (kind, count) in plan.ordered() {
            if count == 0 {
                tracing::debug!("Skipping {}: nothing planned", kind);
                continue;
            }

            self.generator.populate(&mut store, kind, count)?;
            tracing::info!("Generated {} {}", count, kind);
        }

        let dangling = store.dangling_references();
        if !dangling.is_empty() {
            for reference in &dangling {
                tracing::error!("Dangling reference: {}", reference);
            }
            return Err(GenerateError::DanglingReferences(dangling));
        }

        tracing::info!("Seeded {} records", plan.total());

        Ok(store)
    }
}

#[cfg(test)]
mod tests {
    use crate::fake::{RngFaker, StaticTemplates};

    use super::*;

    fn service() -> SeedService<RngFaker, StaticTemplates> {
        SeedService::new(
            Generator::new(RngFaker::seeded(7), StaticTemplates::builtin()).start_year(2025),
        )
    }

    #[test]
    fn ordered_lists_producers_first() {
        let kinds: Vec<_> = SeedPlan::default().ordered().map(|(k, _)| k).collect();

        assert_eq!(kinds, EntityKind::ALL);
        for kind in EntityKind::ALL {
            let at = kinds.iter().position(|k| *k == kind).unwrap();
            for producer in kind.producers() {
                assert!(kinds[..at].contains(producer), "{} before {}", producer, kind);
            }
        }
    }

    #[test]
    fn default_plan_counts() {
        let plan = SeedPlan::default();

        assert_eq!(plan.count(EntityKind::Sessions), 4);
        assert_eq!(plan.count(EntityKind::Positions), 20);
        assert_eq!(plan.count(EntityKind::ReportingTags), 5);
        assert_eq!(plan.total(), 222);
    }

    #[test]
    fn run_default_plan() {
        let plan = SeedPlan::default();

        let store = service().run(&plan).unwrap();

        for (kind, count) in plan.ordered() {
            assert_eq!(store.len(kind), count, "{}", kind);
        }
        assert!(store.dangling_references().is_empty());
    }

    #[test]
    fn run_skips_zero_counts() {
        let plan = SeedPlan::empty()
            .with(EntityKind::Sessions, 2)
            .with(EntityKind::Applicants, 3);

        let store = service().run(&plan).unwrap();

        assert_eq!(store.len(EntityKind::Sessions), 2);
        assert_eq!(store.len(EntityKind::Applicants), 3);
        assert!(store.is_empty(EntityKind::Positions));
    }

    #[test]
    fn run_fails_on_missing_producer() {
        let plan = SeedPlan::empty().with(EntityKind::Applications, 1);

        let result = service().run(&plan);

        assert!(matches!(result, Err(GenerateError::EmptyProducer { .. })));
    }
}
