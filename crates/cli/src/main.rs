// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod commands;

#[cfg(test)]
mod tests;

use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::Result;
use color_eyre::eyre::Context;
use std::path::PathBuf;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;
use tracing_subscriber::EnvFilter;
use tutorias::{DataSource, Repositories};
use tutorias_persistence::{StorageConfig, StorageKind, create_data_source};

use crate::commands::Command;

/// Tutorias - administrative command line for the tutoring scheduler
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Storage backend: file (fichero) or volatile (memoria).
    /// Falls back to `TUTORIAS_STORAGE`, then to file.
    #[arg(short, long)]
    storage: Option<StorageKind>,

    /// Directory holding the store files.
    /// Falls back to `TUTORIAS_DATA_DIR`, then to `datos`.
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }

    fn storage_config(&self) -> Result<StorageConfig> {
        StorageConfig::resolve(self.storage, self.data_dir.clone())
            .wrap_err("Invalid storage configuration")
    }

    fn run(self) -> Result<()> {
        let config: StorageConfig = self.storage_config()?;
        let source: Box<dyn DataSource> = create_data_source(&config);
        let mut repos: Repositories = Repositories::from_source(source.as_ref());
        repos.comenzar();

        for line in self.command.execute(&mut repos)? {
            println!("{line}");
        }

        if self.command.is_mutating() {
            repos
                .terminar()
                .wrap_err("Changes could not be saved")?;
            info!(storage = %config.kind, "Changes saved");
        }
        Ok(())
    }
}

/// `RUST_LOG` wins over the verbosity flags when set.
fn init_tracing(level: LevelFilter) {
    let filter: EnvFilter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_string().to_lowercase()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();
    init_tracing(args.log_level());

    match args.run() {
        Ok(()) => (),
        Err(err) => {
            tracing::error!("{err:#}");
            std::process::exit(1);
        }
    }
    Ok(())
}
