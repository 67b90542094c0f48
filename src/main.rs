// Entrypoint for the CLI application.
// - Resolves the client id, builds the API client and hands it to `ui::run`.
// - Prints usage when there is no client id or nothing to do.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use imgur_cli::{api::ImgurClient, cli::Cli, config, ui};
use tracing::{info, warn};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let id_path = config::client_id_path();
    let client_id = config::resolve_client_id(cli.client_id.as_deref(), &id_path)?;

    if cli.save_id {
        if let Some(id) = cli.client_id.as_deref() {
            config::persist_client_id(&id_path, id)?;
            info!("Client id saved to {}", id_path.display());
        }
    }

    let client_id = match client_id {
        Some(id) if cli.has_work() => id,
        _ => {
            if !cli.save_id {
                Cli::command().print_help()?;
            }
            return Ok(());
        }
    };

    let mut client = ImgurClient::new(&client_id)?;
    if let Some(key) = cli.rapidapi_key.as_deref().filter(|k| !k.is_empty()) {
        client = client.with_rapidapi_key(key)?;
    }
    if let Some(api_url) = cli.api_url.as_deref().filter(|u| !u.is_empty()) {
        client = client.with_base_url(api_url)?;
    }

    let failed = ui::run(&cli, &client, &mut std::io::stdout().lock())?;
    if failed > 0 {
        warn!("{} operation(s) failed", failed);
    }
    Ok(())
}

fn init_logging(verbose: bool) -> Result<()> {
    let mut filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    if verbose {
        filter = filter.add_directive("imgur_cli=debug".parse()?);
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}
