//! Seeds a TA staffing fixture graph and writes it as JSON.
//!
//! # Usage
//!
//! ```bash
//! # Default plan, printed to stdout
//! tapp
//!
//! # Reproducible run written to a file
//! TAPP_SEED=42 TAPP_OUTPUT=seed.json tapp
//!
//! # With debug logging
//! RUST_LOG=tapp=debug tapp
//! ```
//!
//! Settings are read from the environment and an optional `.env` file; see
//! [`tapp::config::Config`].

use std::{
    fs::File,
    io::{self, BufWriter, Write},
};

use tapp::{
    config::Config,
    error::AppError,
    fake::{DirectoryTemplates, Generator, RngFaker, StaticTemplates, TemplateSource},
    model::payload::SeedPayloadDto,
    service::seed::SeedService,
};
use tracing_subscriber::EnvFilter;

fn main() {
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout only carries the payload
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tapp=info")),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run() {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let config = Config::from_env()?;

    let faker = match config.seed {
        Some(seed) => {
            tracing::info!("Using seed {}", seed);
            RngFaker::seeded(seed)
        }
        None => RngFaker::from_os_rng(),
    };
    let templates: Box<dyn TemplateSource> = match &config.template_dir {
        Some(dir) => Box::new(DirectoryTemplates::new(dir)),
        None => Box::new(StaticTemplates::builtin()),
    };

    let mut generator = Generator::new(faker, templates).max_attempts(config.max_attempts);
    if let Some(year) = config.start_year {
        generator = generator.start_year(year);
    }

    let store = SeedService::new(generator).run(&config.plan)?;
    let payload = SeedPayloadDto::from_store(&store);

    match &config.output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            serde_json::to_writer_pretty(&mut writer, &payload)?;
            writer.flush()?;
            tracing::info!("Wrote payload to {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            serde_json::to_writer_pretty(&mut stdout, &payload)?;
            writeln!(stdout)?;
        }
    }

    Ok(())
}
