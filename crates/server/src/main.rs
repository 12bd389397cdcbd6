//! placedoc server binary
//!
//! Usage: `placedoc-server [WOF_DIR]`. The optional argument overrides the
//! configured `wof_dir`.

use server::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = ServerConfig::load()?;

    if let Some(wof_dir) = std::env::args_os().nth(1) {
        config.wof_dir = Some(wof_dir.into());
    }

    server::start_server(config).await?;

    Ok(())
}
