// SPDX-License-Identifier: PMPL-1.0-or-later

//! i18n-sync: translation key consistency checker for JSON locale catalogs
//!
//! Compares a base locale against one or more target locales, reports keys
//! missing on either side and values that look untranslated, and exits
//! non-zero when anything is wrong so CI can gate on it.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use colored::*;
use i18n_sync::check::{self, GenerateOutcome};
use i18n_sync::config::{CheckConfig, Locale};
use i18n_sync::keys::extract_keys;
use i18n_sync::report::{self, ReportOutputFormat};
use i18n_sync::{loader, logging};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "i18n-sync")]
#[command(version)]
#[command(about = "Translation key consistency checker for JSON locale catalogs")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare target locales against the base and report inconsistencies
    Check {
        #[command(flatten)]
        catalog: CatalogArgs,

        #[command(flatten)]
        locales: LocaleArgs,

        /// Report format
        #[arg(short, long, value_enum, default_value = "text")]
        format: ReportOutputFormat,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Add empty placeholders for keys missing from target locales
    Generate {
        #[command(flatten)]
        catalog: CatalogArgs,

        #[command(flatten)]
        locales: LocaleArgs,

        /// Show what would be added without writing any file
        #[arg(long)]
        dry_run: bool,
    },

    /// Print every dotted key path of one locale
    Keys {
        #[command(flatten)]
        catalog: CatalogArgs,

        /// Locale to list
        #[arg(value_name = "LOCALE")]
        locale: Locale,
    },
}

#[derive(Args)]
struct CatalogArgs {
    /// Directory containing <locale>.json files
    #[arg(long, env = "I18N_SYNC_MESSAGES_DIR", default_value = "messages")]
    messages_dir: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Disable coloured output
    #[arg(long)]
    no_color: bool,
}

#[derive(Args)]
struct LocaleArgs {
    /// Base locale, the source of truth for keys
    #[arg(long, env = "I18N_SYNC_BASE", default_value = "en")]
    base: Locale,

    /// Target locales to compare against the base
    #[arg(
        long = "target",
        env = "I18N_SYNC_TARGETS",
        value_delimiter = ',',
        default_value = "ro"
    )]
    targets: Vec<Locale>,
}

impl CatalogArgs {
    fn setup(&self) {
        if self.no_color {
            colored::control::set_override(false);
        }
        logging::init(self.verbose, !self.no_color);
        tracing::debug!(
            messages_dir = %self.messages_dir.display(),
            verbose = self.verbose,
            "configuration"
        );
    }

    fn config(&self, base: Locale, targets: Vec<Locale>) -> CheckConfig {
        let config = CheckConfig::new(self.messages_dir.clone(), base, targets);
        match std::env::current_dir() {
            Ok(cwd) => config.resolve_against(&cwd),
            Err(_) => config,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("{} {:#}", "error:".red().bold(), err);
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> Result<u8> {
    match cli.command {
        Commands::Check {
            catalog,
            locales,
            format,
            output,
        } => {
            catalog.setup();
            let config = catalog.config(locales.base, locales.targets);
            let report = check::run_check(&config)?;

            if let Some(output_path) = output {
                report::save_report(&report, format, output_path)?;
            } else if format == ReportOutputFormat::Text {
                report::print_report(&report);
            } else {
                print!("{}", format.serialize(&report)?);
            }
            Ok(report.exit_code())
        }

        Commands::Generate {
            catalog,
            locales,
            dry_run,
        } => {
            catalog.setup();
            let config = catalog.config(locales.base, locales.targets);
            let outcomes = check::run_generate(&config, dry_run)?;
            print_generate_summary(&outcomes, dry_run);
            Ok(0)
        }

        Commands::Keys { catalog, locale } => {
            catalog.setup();
            let config = catalog.config(locale, Vec::new());
            let tree = loader::load_tree(&config.locale_path(&config.base))?;
            for key in extract_keys(&tree) {
                println!("{}", key);
            }
            Ok(0)
        }
    }
}

fn print_generate_summary(outcomes: &[GenerateOutcome], dry_run: bool) {
    let verb = if dry_run { "Would add" } else { "Added" };
    for outcome in outcomes {
        println!(
            "{} {} placeholder(s) to {}{}",
            verb,
            outcome.added.len().to_string().yellow(),
            outcome.path.display(),
            if outcome.created { " (new file)" } else { "" }
        );
        for key in &outcome.added {
            println!("  + {}", key.green());
        }
        for key in &outcome.extra {
            println!("  ? {} {}", key.yellow(), "(only in target)".dimmed());
        }
    }
    println!("{}", "i18n synchronization completed.".green());
}
