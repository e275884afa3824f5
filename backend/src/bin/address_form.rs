//! Command-line address form.
//!
//! Submits one postcode, suburb, and state triple to a running validator
//! server and prints the resulting message. Exits non-zero when the message
//! is an error.
//!
//! ```text
//! address-form --postcode 2000 --suburb Sydney --state NSW
//! ```

use std::io::Write as _;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{Context, Result};
use tokio::runtime::Builder;
use tracing_subscriber::{EnvFilter, fmt};
use url::Url;

use address_validator::domain::{AddressFormService, FormMessage, UserInput};
use address_validator::outbound::lookup_client::LocalityLookupClient;

/// Validate an Australian postcode, suburb, and state against the locality service.
#[derive(Debug, Parser)]
#[command(name = "address-form", version)]
struct FormArgs {
    /// Postcode as entered, e.g. 2000.
    #[arg(long, default_value = "")]
    postcode: String,
    /// Suburb as entered, e.g. Sydney.
    #[arg(long, default_value = "")]
    suburb: String,
    /// State code as entered, e.g. NSW.
    #[arg(long, default_value = "")]
    state: String,
    /// Base URL of the validator server.
    #[arg(long, env = "ADDRESS_VALIDATOR_URL", default_value = "http://127.0.0.1:8080")]
    server_url: Url,
    /// Print the full message as JSON instead of plain text.
    #[arg(long)]
    json: bool,
}

impl FormArgs {
    fn user_input(&self) -> UserInput {
        UserInput::new(
            self.postcode.as_str(),
            self.suburb.as_str(),
            self.state.as_str(),
        )
    }
}

fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    // Diagnostics go to stderr so stdout carries only the form message.
    if let Err(error) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init()
    {
        tracing::warn!(%error, "tracing init failed");
    }

    let args = FormArgs::parse();
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .wrap_err("failed to start async runtime")?;
    let message = runtime.block_on(submit(&args))?;
    render(&message, args.json)?;

    Ok(if message.error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

async fn submit(args: &FormArgs) -> Result<FormMessage> {
    let client = LocalityLookupClient::new(&args.server_url)
        .wrap_err_with(|| format!("invalid server URL {}", args.server_url))?;
    let form = AddressFormService::new(Arc::new(client));
    Ok(form.submit(&args.user_input()).await)
}

fn render(message: &FormMessage, as_json: bool) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    if as_json {
        let body = serde_json::to_string(message).wrap_err("serialise form message")?;
        writeln!(stdout, "{body}")
    } else {
        writeln!(stdout, "{}", message.message)
    }
    .wrap_err("write form message")
}
