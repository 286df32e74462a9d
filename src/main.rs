use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process;

use doing::catalog::ActivityCatalog;
use doing::config::Config;
use doing::interactive;
use doing::logging;

#[derive(Parser)]
#[command(name = "doing")]
#[command(about = "Terminal activity picker", long_about = None)]
#[command(version, long_version = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_DATE"), ")"))]
struct Cli {
    /// Extra activities to seed for this session (repeatable)
    #[arg(short = 'a', long = "activity")]
    activities: Vec<String>,

    /// Filter debounce window in milliseconds (overrides config)
    #[arg(long)]
    debounce_ms: Option<u64>,

    /// Activity to pre-select at startup
    #[arg(long)]
    select: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the effective activity catalog and exit
    List {
        /// Filter expression, same matching as the interactive filter bar
        #[arg(short, long)]
        filter: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => (),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load_or_default()?;
    config.activities.extend(cli.activities.iter().cloned());
    if let Some(ms) = cli.debounce_ms {
        config.debounce_ms = ms;
    }

    match cli.command {
        Some(Commands::List { filter }) => {
            logging::init();
            list_catalog(&config, filter.as_deref());
        }
        None => {
            // The alternate screen owns stdout, so logs go to a file.
            logging::init_with_file("doing.log")
                .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;
            tracing::info!(
                version = env!("CARGO_PKG_VERSION"),
                "starting interactive session"
            );
            interactive::run_interactive(&config, cli.select.as_deref())?;
        }
    }

    Ok(())
}

fn list_catalog(config: &Config, filter: Option<&str>) {
    let mut catalog = ActivityCatalog::new();
    catalog.seed(config.activities.iter().cloned());
    if let Some(f) = filter {
        catalog.set_filter(f);
    }

    let display = catalog.display_list();

    println!("{:<24} {:>5}", "Activity", "Hue");
    println!("{}", "-".repeat(30));
    for option in &display {
        println!("{:<24} {:>5.2}", option.code(), option.hue());
    }
    println!(
        "\n{} of {} activities",
        display.len(),
        catalog.full_list().len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_defaults_to_interactive() {
        let cli = Cli::try_parse_from(["doing"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.activities.is_empty());
        assert!(cli.debounce_ms.is_none());
    }

    #[test]
    fn test_cli_parsing_list() {
        let cli = Cli::try_parse_from(["doing", "list", "-f", "wo"]).unwrap();
        match cli.command {
            Some(Commands::List { filter }) => {
                assert_eq!(filter, Some("wo".to_string()));
            }
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn test_cli_parsing_seed_activities() {
        let cli = Cli::try_parse_from(["doing", "-a", "Gym", "--activity", "Read"]).unwrap();
        assert_eq!(cli.activities, vec!["Gym", "Read"]);
    }

    #[test]
    fn test_cli_parsing_overrides() {
        let cli =
            Cli::try_parse_from(["doing", "--debounce-ms", "100", "--select", "Work"]).unwrap();
        assert_eq!(cli.debounce_ms, Some(100));
        assert_eq!(cli.select, Some("Work".to_string()));
    }
}
