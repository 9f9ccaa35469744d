use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};

use campus_records::cli::{execute, run_session, Campus, Command};
use campus_records::config::{paths::CampusPaths, settings::Settings, settings::CONFIG_ENV_VAR};
use campus_records::logging::init_logger;
use campus_records::storage::{seed_fixtures, MemoryStorage};

#[derive(Parser)]
#[command(
    name = "ccrm",
    version,
    about = "Campus course and records manager",
    long_about = "CCRM keeps students, instructors and courses in an in-memory store, \
                  enforces enrollment rules (no duplicates, at most 18 credits) and \
                  computes credit-weighted GPAs. Records round-trip through CSV tables."
)]
struct Cli {
    /// Settings file (JSON)
    #[arg(short, long, global = true, env = CONFIG_ENV_VAR)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<TopLevel>,
}

#[derive(Subcommand)]
enum TopLevel {
    /// Show the settings in use
    Config {
        /// Write the settings to the config file
        #[arg(long)]
        write: bool,
    },

    #[command(flatten)]
    Records(Command),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let config_path = match cli.config {
        Some(path) => path,
        None => Settings::default_location()
            .ok_or_else(|| anyhow!("Could not determine a config directory; pass --config"))?,
    };
    let settings = Settings::load_or_default(&config_path)?;
    let paths = CampusPaths::from_settings(&settings);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let command = match cli.command {
        Some(TopLevel::Config { write }) => {
            if write {
                settings.save(&config_path)?;
                writeln!(out, "Settings written to {}", config_path.display())?;
            }
            writeln!(out, "CCRM Configuration")?;
            writeln!(out, "==================")?;
            writeln!(out, "Config file:       {}", config_path.display())?;
            writeln!(out, "Data directory:    {}", paths.data_dir().display())?;
            writeln!(out, "Exports directory: {}", paths.exports_dir().display())?;
            writeln!(out, "Backup directory:  {}", paths.backup_dir().display())?;
            writeln!(out, "Seed fixtures:     {}", settings.seed_fixtures)?;
            return Ok(());
        }
        Some(TopLevel::Records(command)) => command,
        None => {
            writeln!(out, "CCRM - Campus Course & Records Manager")?;
            writeln!(out)?;
            writeln!(out, "Run 'ccrm --help' for usage information.")?;
            writeln!(out, "Run 'ccrm session' to enter commands interactively.")?;
            return Ok(());
        }
    };

    let storage = MemoryStorage::new();
    let mut campus = if settings.seed_fixtures {
        seed_fixtures(&storage, &paths)?;
        let (campus, _) = Campus::open(&storage, paths)?;
        campus
    } else {
        tracing::info!("Fixture seeding disabled, starting with empty records");
        Campus::new(&storage, paths)
    };

    match command {
        Command::Session => {
            let stdin = io::stdin();
            let prompt = stdin.is_terminal();
            run_session(&mut campus, stdin.lock(), &mut out, prompt)?;
        }
        command => execute(&mut campus, command, &mut out)?,
    }

    Ok(())
}
