//! Society gate console: entry point for the security gate operator.

mod camera;
mod config;
mod console;
mod directory;

use crate::camera::SimulatedCamera;
use crate::config::{ConfigError, GateConfig};
use crate::console::{parse_command, visitor_row, Console};
use clap::Parser;
use society_types::{DecisionPolicy, MatchScope, PurposeKind, Role, SocietyError, Timestamp, View};
use society_utils::LogFormat;
use society_verification::{GateSession, VisitorDirectory, VisitorQuery};
use std::path::PathBuf;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Parser)]
#[command(name = "society-gate", about = "Security gate console for visitor entry verification")]
struct Cli {
    /// Operator role: "admin", "resident" or "security".
    #[arg(long, env = "SOCIETY_ROLE")]
    role: Option<String>,

    /// TOML file of pre-authorized visitors (`[[visitors]]` tables).
    /// The demo visitor log is used when neither this nor the config file names one.
    #[arg(long, env = "SOCIETY_DIRECTORY")]
    directory: Option<PathBuf>,

    /// Seconds before a decision notification dismisses itself.
    #[arg(long, env = "SOCIETY_NOTIFICATION_TTL")]
    notification_ttl: Option<u64>,

    /// Mark approved visitors as inside.
    #[arg(long, env = "SOCIETY_RECORD_ENTRY")]
    record_entry: bool,

    /// Also match visitors who are already inside or have left.
    #[arg(long, env = "SOCIETY_ALL_RECORDS")]
    all_records: bool,

    /// Simulate a camera that cannot be started.
    #[arg(long, env = "SOCIETY_NO_CAMERA")]
    no_camera: bool,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "SOCIETY_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "SOCIETY_LOG_FORMAT")]
    log_format: Option<String>,

    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Subcommand.
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Open the interactive gate console.
    Run,
    /// Print the visitor log, optionally filtered.
    Visitors {
        /// Text matched against name, flat, vehicle number and purpose.
        query: Option<String>,
        /// Only visits of this kind: guest, delivery, service, family or other.
        #[arg(long)]
        purpose: Option<PurposeKind>,
    },
    /// List the portal views the operator role may open.
    Views,
    /// Print the effective configuration as TOML.
    ShowConfig,
}

/// Layer CLI flags over the file configuration.
fn merge(cli: &Cli, base: GateConfig) -> Result<GateConfig, ConfigError> {
    let mut config = base;
    if let Some(role) = &cli.role {
        config.operator_role = role
            .parse::<Role>()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
    }
    if let Some(path) = &cli.directory {
        config.directory_path = Some(path.clone());
    }
    if let Some(ttl) = cli.notification_ttl {
        config.notification_ttl_secs = ttl;
    }
    if cli.record_entry {
        config.decision_policy = DecisionPolicy::RecordEntry;
    }
    if cli.all_records {
        config.match_scope = MatchScope::AllRecords;
    }
    if cli.no_camera {
        config.camera_available = false;
    }
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    if let Some(format) = &cli.log_format {
        config.log_format = format.parse::<LogFormat>().map_err(ConfigError::Invalid)?;
    }
    config.validate()?;
    Ok(config)
}

fn require_view(role: Role, view: View) -> Result<(), SocietyError> {
    if role.can_access(view) {
        Ok(())
    } else {
        Err(SocietyError::ViewNotPermitted {
            role: role.to_string(),
            view: view.path().to_string(),
        })
    }
}

fn open_directory(config: &GateConfig) -> Result<VisitorDirectory, ConfigError> {
    match &config.directory_path {
        Some(path) => {
            let directory = directory::load_directory_file(path)?;
            tracing::info!("Loaded {} visitors from {}", directory.len(), path.display());
            Ok(directory)
        }
        None => {
            tracing::info!("No visitor directory configured, using the demo visitor log");
            directory::demo_directory()
        }
    }
}

async fn run_console(config: GateConfig, directory: VisitorDirectory) -> anyhow::Result<()> {
    let session = GateSession::new(directory, config.gate_params());
    let camera = SimulatedCamera::new(config.camera_available, config.demo_code.clone());
    let mut console = Console::new(session, camera);

    println!("Security Gate Entry. Type `help` for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut ticker = tokio::time::interval(Duration::from_secs(1));

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                match parse_command(&line) {
                    Ok(command) => match console.handle(command, Timestamp::now()) {
                        Some(output) => output.iter().for_each(|l| println!("{l}")),
                        None => break,
                    },
                    Err(e) => println!("{e}"),
                }
            }
            _ = ticker.tick() => {
                for line in console.tick(Timestamp::now()) {
                    println!("{line}");
                }
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Interrupt received, closing gate console");
                break;
            }
        }
    }

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let file_config = match &cli.config {
        Some(path) => GateConfig::from_toml_file(path).map(Some),
        None => Ok(None),
    };
    let (base, file_error) = match file_config {
        Ok(cfg) => (cfg.unwrap_or_default(), None),
        Err(e) => (GateConfig::default(), Some(e)),
    };
    let config = merge(&cli, base)?;

    society_utils::init_logging(config.log_format, &config.log_level);
    if let Some(e) = file_error {
        tracing::warn!("Failed to load config file: {e}, using CLI defaults");
    }

    match cli.command {
        Command::Run => {
            require_view(config.operator_role, View::SecurityGate)?;
            let directory = open_directory(&config)?;
            tracing::info!(
                "Opening gate console for {} (notifications {}s, policy {:?}, scope {:?})",
                config.operator_role,
                config.notification_ttl_secs,
                config.decision_policy,
                config.match_scope,
            );
            run_console(config, directory).await?;
            tracing::info!("Gate console closed");
        }
        Command::Visitors { query, purpose } => {
            require_view(config.operator_role, View::Visitors)?;
            let directory = open_directory(&config)?;
            let mut query = query.map(VisitorQuery::text).unwrap_or_default();
            if let Some(kind) = purpose {
                query = query.purpose(kind);
            }
            for record in directory.search(&query) {
                println!("{}", visitor_row(record));
            }
        }
        Command::ShowConfig => {
            print!("{}", config.to_toml_string()?);
        }
        Command::Views => {
            for view in config.operator_role.permitted_views() {
                println!("{:?} {}", view, view.path());
            }
        }
    }

    Ok(())
}
