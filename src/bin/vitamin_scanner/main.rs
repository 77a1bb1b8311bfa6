// ABOUTME: Vitamin Scanner CLI - record a profile and check supplements against daily targets
// ABOUTME: Handles profile management, target listing, and product checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Save the profile recommendations are keyed on
//! vitamin-scanner profile set --age 25 --sex female
//!
//! # Show daily targets for the saved profile (or any demographic)
//! vitamin-scanner targets
//! vitamin-scanner targets --age 33 --sex female --pregnant
//! vitamin-scanner targets --key male_51-70
//!
//! # Check a product by barcode, name, or extracted label data
//! vitamin-scanner check --barcode 123456789
//! vitamin-scanner check --search "one a day" --format json
//! vitamin-scanner check --label-json label.json
//! ```

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::debug;
use vitamin_scanner::config::ScannerConfig;
use vitamin_scanner::errors::AppError;
use vitamin_scanner::formatters::OutputFormat;
use vitamin_scanner::logging;
use vitamin_scanner::models::Sex;
use vitamin_scanner::profile_store::FileProfileStore;

#[derive(Parser)]
#[command(
    name = "vitamin-scanner",
    about = "Check supplement labels against your recommended daily intake",
    long_about = "Record an age/sex profile, then look up or scan a supplement to see which vitamins meet, fall short of, or exceed your daily targets."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output format override (text or json)
    #[arg(long, global = true)]
    format: Option<OutputFormat>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Manage the saved profile
    Profile {
        #[command(subcommand)]
        action: ProfileCommand,
    },

    /// Show daily targets for a demographic
    Targets {
        /// Age in years (uses the saved profile when omitted)
        #[arg(long, requires = "sex", conflicts_with = "key")]
        age: Option<f64>,

        /// Biological sex (male or female)
        #[arg(long, requires = "age", conflicts_with = "key")]
        sex: Option<Sex>,

        /// Pregnant
        #[arg(long, requires = "age", conflicts_with = "lactating")]
        pregnant: bool,

        /// Lactating
        #[arg(long, requires = "age")]
        lactating: bool,

        /// Demographic key such as `female_19-30` or `female_14-18_pregnant`
        #[arg(long)]
        key: Option<String>,
    },

    /// Check a product against the saved profile
    Check {
        /// Product barcode
        #[arg(long)]
        barcode: Option<String>,

        /// Photo to decode the barcode from
        #[arg(long, conflicts_with = "barcode")]
        barcode_image: Option<PathBuf>,

        /// Product name search (case-insensitive substring)
        #[arg(long)]
        search: Option<String>,

        /// Label reader output, `{"vitamins": {"Vitamin A": "700 mcg", ...}}`
        #[arg(long)]
        label_json: Option<PathBuf>,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ProfileCommand {
    /// Save a profile
    Set {
        /// Age in years (fractional for infants, e.g. 0.75)
        #[arg(long)]
        age: f64,

        /// Biological sex (male or female)
        #[arg(long)]
        sex: Sex,

        /// Pregnant
        #[arg(long, conflicts_with = "lactating")]
        pregnant: bool,

        /// Lactating
        #[arg(long)]
        lactating: bool,
    },

    /// Show the saved profile
    Show,

    /// Delete the saved profile
    Clear,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(error) = logging::init_from_env(cli.verbose) {
        eprintln!("warning: {error}");
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error:#}");
            let code = error
                .downcast_ref::<AppError>()
                .map_or(1, |app_error| app_error.code.exit_code());
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = ScannerConfig::from_env()?;
    let format = cli.format.unwrap_or(config.output_format);
    let store = Arc::new(FileProfileStore::new(config.profile_path));
    debug!(path = %store.path().display(), %format, "Using profile store");

    let output = match cli.command {
        Command::Profile { action } => match action {
            ProfileCommand::Set {
                age,
                sex,
                pregnant,
                lactating,
            } => commands::profile::set(store.as_ref(), age, sex, pregnant, lactating, format).await?,
            ProfileCommand::Show => commands::profile::show(store.as_ref(), format).await?,
            ProfileCommand::Clear => commands::profile::clear(store.as_ref()).await?,
        },
        Command::Targets {
            age,
            sex,
            pregnant,
            lactating,
            key,
        } => {
            let selection = match (age, sex, key) {
                (Some(age), Some(sex), _) => commands::targets::Selection::Profile {
                    age,
                    sex,
                    pregnant,
                    lactating,
                },
                (_, _, Some(key)) => commands::targets::Selection::Key(key),
                _ => commands::targets::Selection::Saved,
            };
            commands::targets::show(store.as_ref(), selection, format).await?
        }
        Command::Check {
            barcode,
            barcode_image,
            search,
            label_json,
        } => {
            let inputs = commands::check::CheckInputs {
                barcode,
                barcode_image,
                search,
                label_json,
            };
            commands::check::run(store, inputs, format).await?
        }
    };

    println!("{output}");
    Ok(())
}
