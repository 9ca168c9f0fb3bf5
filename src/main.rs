use agolabel::clock::{Clock, FixedClock, SystemClock};
use agolabel::format::{ChronoDateFormatter, RelativeTimeFormatter, format_created_on};
use agolabel::timestamp::normalize_to_millis;
use agolabel::util::config::AppConfig;
use anyhow::Result;
use clap::{Parser, Subcommand};
use serde_json::json;
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "agolabel", version, about = "Relative time and profile date labels")]
struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging to file
    #[arg(short, long, global = true)]
    debug: bool,

    /// Print a JSON object instead of the bare label
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// "5 minutes ago" style label
    Ago {
        /// Timestamp in milliseconds (or seconds) since the epoch
        #[arg(allow_negative_numbers = true)]
        timestamp: i64,

        /// Reference time in milliseconds; defaults to the system clock
        #[arg(long)]
        now: Option<i64>,
    },
    /// "Created on 05 Mar 2024" style label
    Created {
        #[arg(allow_negative_numbers = true)]
        timestamp: i64,

        /// Locale name such as en_US; overrides the config
        #[arg(long)]
        locale: Option<String>,
    },
    /// "Last used 5 minutes ago" style label
    LastUsed {
        #[arg(allow_negative_numbers = true)]
        timestamp: i64,

        #[arg(long)]
        now: Option<i64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())?;

    let _guard = setup_logging(&config, cli.debug)?;

    info!("agolabel starting");

    let catalog = config.load_catalog()?;

    let output = match cli.command {
        Command::Ago { timestamp, now } => {
            let described = relative_formatter(now)
                .normalize_seconds(config.format.normalize_seconds)
                .describe(timestamp, &catalog);
            debug!(timestamp, bucket = ?described.bucket, "Formatted relative time");
            if cli.json {
                serde_json::to_string(&described)?
            } else {
                described.label
            }
        }
        Command::Created { timestamp, locale } => {
            let locale = locale.unwrap_or_else(|| config.format.locale.clone());
            let timestamp = if config.format.normalize_seconds {
                normalize_to_millis(timestamp)
            } else {
                timestamp
            };
            let dates = ChronoDateFormatter::new(config.format.date_pattern.clone());
            let label = format_created_on(timestamp, &locale, &dates, &catalog);
            if cli.json {
                json!({ "label": label, "locale": locale }).to_string()
            } else {
                label
            }
        }
        Command::LastUsed { timestamp, now } => {
            let label = relative_formatter(now)
                .normalize_seconds(config.format.normalize_seconds)
                .format_last_used(timestamp, &catalog);
            if cli.json {
                json!({ "label": label }).to_string()
            } else {
                label
            }
        }
    };

    println!("{output}");
    Ok(())
}

fn relative_formatter(now: Option<i64>) -> RelativeTimeFormatter<Box<dyn Clock>> {
    let clock: Box<dyn Clock> = match now {
        Some(now) => Box::new(FixedClock(now)),
        None => Box::new(SystemClock),
    };
    RelativeTimeFormatter::new(clock)
}

fn setup_logging(
    config: &AppConfig,
    debug: bool,
) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    if !debug {
        return Ok(None);
    }

    let log_dir = config.log_dir();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "agolabel.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter("agolabel=debug")
        .with_ansi(false)
        .init();

    Ok(Some(guard))
}
