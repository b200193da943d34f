use std::path::PathBuf;

use clap::{Parser, Subcommand};
use ros1_ign_bridge::config::BridgeConfig;
use ros1_ign_bridge::{Result, builtin_registry};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "ros1-ign-bridge")]
#[command(about = "ROS 1 <-> Ignition Transport message conversion")]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Output structured JSON logs
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the supported (ROS 1, Ignition) type pairs
    List,

    /// Resolve bridges and report the converter selected for each
    Check {
        /// Bridges as topic@ros1_type@ign_type (`]` for ROS 1 -> Ignition only,
        /// `[` for Ignition -> ROS 1 only, empty ROS 1 type for any)
        #[arg(value_name = "SPEC")]
        specs: Vec<String>,

        /// JSON file with additional bridges
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
}

fn init_logger(json_mode: bool, debug: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if debug {
            EnvFilter::new("ros1_ign_bridge=debug")
        } else {
            EnvFilter::new("ros1_ign_bridge=info")
        }
    });

    if json_mode {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .json()
                    .with_target(false)
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.json, cli.debug);

    let registry = builtin_registry();
    match cli.command {
        Command::List => {
            for entry in registry.entries() {
                println!("{:<28} {}", entry.ros1_type(), entry.ign_type());
            }
        }
        Command::Check { specs, config } => {
            let mut bridges = match config {
                Some(path) => BridgeConfig::from_path(path)?,
                None => BridgeConfig::default(),
            };
            bridges.bridges.extend(BridgeConfig::from_args(specs.as_slice())?.bridges);
            info!("Checking {} bridge(s)", bridges.bridges.len());

            for bridge in bridges.resolve_all(registry)? {
                let spec = bridge.spec();
                let conv = bridge.converter();
                println!(
                    "{} [{}] {} <-> {}",
                    spec.topic,
                    spec.direction,
                    conv.ros1_type_name(),
                    conv.ign_type_name()
                );
            }
        }
    }

    Ok(())
}
