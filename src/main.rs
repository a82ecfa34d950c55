// Entrypoint for the CLI application.
// - Keeps `main` small: set up logging, build the client and hand it to
//   the menu loop.
// - Returns `anyhow::Result` so terminal failures end the process with a
//   readable message.

use placeholder_cli::{ui::main_menu, ApiClient, Config};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr and stay quiet unless RUST_LOG asks for more.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    // Base URL comes from `PLACEHOLDER_API_URL`, or the public
    // JSONPlaceholder service. See `Config::from_env`.
    let config = Config::from_env();
    tracing::info!(base_url = %config.base_url, "starting");
    let api = ApiClient::from_config(config)?;

    main_menu(&api)?;
    Ok(())
}
