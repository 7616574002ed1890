use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use folio_contact::ContactForm;

/// folio - portfolio contact relay
#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Relays portfolio contact form submissions by email", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP relay server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Submit a contact form to a relay endpoint
    Send {
        /// Relay endpoint URL (defaults to the configured server)
        #[arg(long)]
        endpoint: Option<String>,

        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        message: String,

        /// Seconds to wait for the relay to answer
        #[arg(long, default_value_t = 30)]
        timeout: u64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = folio::Config::load(cli.config.clone())?;

    folio::observability::init_observability(
        "folio",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => {
            config.validate().map_err(|e| anyhow::anyhow!(e))?;
            folio::cli::serve(config, host, port).await
        }
        Commands::Send {
            endpoint,
            name,
            email,
            message,
            timeout,
        } => {
            let endpoint = endpoint.unwrap_or_else(|| config.send_email_url());
            let form = ContactForm {
                name,
                email,
                message,
            };

            folio::cli::send(endpoint, form, Duration::from_secs(timeout)).await
        }
    }
}
