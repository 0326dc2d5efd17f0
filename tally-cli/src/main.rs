use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::collections::BTreeSet;
use std::path::PathBuf;
use tally_core::{Period, Transaction};
use tally_finance::{
    extract_salary, filter_in, group_reports, list_categories, load_transactions, salary_total,
    summary_by_category, total, PeriodInfo,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod config;
mod render;
mod state;

use config::{load_config, Config};

#[derive(Parser, Debug)]
#[command(
    name = "tally",
    version,
    about = "Categorized summaries of a bank statement export"
)]
struct Cli {
    /// Config file (default: ~/.tally/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Statement export to read (default: statement.path from config, then ./operations.csv)
    #[arg(long, global = true)]
    csv: Option<PathBuf>,

    /// First day of the period, dd.mm.yyyy
    #[arg(long, global = true, requires = "to")]
    from: Option<String>,

    /// Last day of the period (inclusive), dd.mm.yyyy
    #[arg(long, global = true, requires = "from")]
    to: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List distinct categories
    Categories,

    /// Every transaction grouped by category, with per-category totals
    Breakdown,

    /// Sum of amounts per category
    Summary,

    /// Total spending, leaving out excluded categories
    Total {
        /// Category to exclude (repeatable; replaces the configured list)
        #[arg(long = "exclude")]
        exclude: Vec<String>,

        /// Count every category, ignoring the configured list
        #[arg(long, conflicts_with = "exclude")]
        no_exclusions: bool,
    },

    /// Payments in one category with an exact description
    Salary {
        /// Category to search (default: salary.category from config)
        #[arg(long)]
        category: Option<String>,

        /// Exact description to match (default: salary.description from config)
        #[arg(long)]
        description: Option<String>,
    },

    /// First and last day covered by the transactions
    Period,

    /// Write a default config file if none exists
    InitConfig,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let Cli {
        config: config_path,
        csv,
        from,
        to,
        command,
    } = Cli::parse();

    if let Command::InitConfig = command {
        return config::init_config(config_path.as_deref());
    }

    let cfg = load_config(config_path.as_deref())?;
    let source = Source { csv, from, to };
    let txns = load(&source, &cfg)?;

    match command {
        Command::Categories => {
            print!("{}", render::categories(&list_categories(&txns)));
        }

        Command::Breakdown => {
            print!("{}", render::breakdown(&group_reports(&txns)));
        }

        Command::Summary => {
            print!("{}", render::summary(&summary_by_category(&txns)));
        }

        Command::Total {
            exclude,
            no_exclusions,
        } => {
            let excluded = exclusions(exclude, no_exclusions, &cfg);
            print!("{}", render::total(total(&txns, &excluded), &excluded));
        }

        Command::Salary {
            category,
            description,
        } => {
            let configured = cfg.salary.as_ref();
            let category = category
                .or_else(|| configured.map(|s| s.category.clone()))
                .context("no salary category (pass --category or set [salary] in config)")?;
            let description = description
                .or_else(|| configured.map(|s| s.description.clone()))
                .context("no salary description (pass --description or set [salary] in config)")?;

            let payments = extract_salary(&txns, &category, &description);
            print!("{}", render::salaries(&payments, salary_total(&payments)));
        }

        Command::Period => {
            print!("{}", render::period(PeriodInfo::from_transactions(&txns)));
        }

        Command::InitConfig => {}
    }

    Ok(())
}

/// Where to read transactions from and which days to keep
struct Source {
    csv: Option<PathBuf>,
    from: Option<String>,
    to: Option<String>,
}

/// `--no-exclusions` wins, then `--exclude`, then the config list.
fn exclusions(exclude: Vec<String>, no_exclusions: bool, cfg: &Config) -> BTreeSet<String> {
    if no_exclusions {
        BTreeSet::new()
    } else if exclude.is_empty() {
        cfg.totals.exclusions()
    } else {
        exclude.into_iter().collect()
    }
}

fn load(source: &Source, cfg: &Config) -> Result<Vec<Transaction>> {
    let path = source
        .csv
        .clone()
        .or_else(|| cfg.statement.path.clone())
        .unwrap_or_else(state::default_statement_csv);
    let layout = cfg.statement.layout()?;

    let period = match (source.from.as_deref(), source.to.as_deref()) {
        (Some(from), Some(to)) => Some(Period::parse(from, to)?),
        (None, None) => None,
        _ => bail!("--from and --to must be given together"),
    };

    let txns = load_transactions(&path, &layout)
        .with_context(|| format!("loading {}", path.display()))?;
    let txns = match period {
        Some(period) => filter_in(&txns, &period),
        None => txns,
    };

    debug!(count = txns.len(), path = %path.display(), "transactions ready");
    Ok(txns)
}
