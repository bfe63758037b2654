use std::path::PathBuf;

use {
    clap::{Parser, Subcommand},
    tracing::info,
    tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt},
};

#[derive(Parser)]
#[command(name = "flowwisper", about = "Flowwisper — voice dictation API gateway")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// Output logs as JSON instead of human-readable.
    #[arg(long, global = true, default_value_t = false)]
    json_logs: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the gateway server.
    Gateway {
        #[arg(long, default_value = "127.0.0.1")]
        bind: String,
        #[arg(long, default_value_t = 8000)]
        port: u16,
        /// Env file consulted for FLOWWISPER_* fallbacks (defaults to ./.env).
        #[arg(long)]
        env_file: Option<PathBuf>,
    },
    /// Configuration management.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the resolved settings as JSON.
    Show,
}

fn init_telemetry(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));

    if cli.json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_target(true).with_thread_ids(false))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_ansi(true),
            )
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_telemetry(&cli);

    match cli.command {
        Commands::Gateway {
            bind,
            port,
            env_file,
        } => {
            let settings = match env_file {
                Some(path) => flowwisper_config::load_from(Some(&path))?,
                None => flowwisper_config::load()?,
            };
            info!(version = env!("CARGO_PKG_VERSION"), "flowwisper starting");
            flowwisper_gateway::server::start_gateway(&bind, port, settings).await
        },
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let settings = flowwisper_config::load()?;
                println!("{}", serde_json::to_string_pretty(&settings)?);
                Ok(())
            },
        },
    }
}
