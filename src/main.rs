use clap::{Parser, Subcommand};
use emotion_engine_lib::config::{self, DEFAULT_CONFIG_FILE};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the JSON config file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Chat in the terminal and get a mood report on exit
    Chat,
    /// Serve the analysis endpoint over HTTP
    Serve {
        /// Override the configured bind host
        #[arg(long)]
        host: Option<String>,
        /// Override the configured port
        #[arg(short, long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // The subscriber is built from the config's filter; report the load afterwards.
    let (mut engine_config, source) = config::read_config(&cli.config);
    emotion_engine_lib::init_logging(engine_config.log_filter.as_deref());
    source.log(config::CONFIG_LABEL, &cli.config);

    match cli.command {
        Command::Chat => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            tokio::task::spawn_blocking(move || {
                emotion_engine_lib::console::run_chat(
                    stdin.lock(),
                    stdout.lock(),
                    engine_config.show_banner,
                )
            })
            .await??;
        }
        Command::Serve { host, port } => {
            if let Some(host) = host {
                engine_config.host = host;
            }
            if let Some(port) = port {
                engine_config.port = port;
            }
            emotion_engine_lib::server::serve(&engine_config).await?;
        }
    }

    Ok(())
}
