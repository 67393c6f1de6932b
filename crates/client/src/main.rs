//! Room crawl terminal client.
//!
//! ```bash
//! CRAWL_SEED=7 RUST_LOG=crawl_runtime=debug cargo run -p crawl-client
//! ```

use anyhow::Result;
use crawl_client::{App, ClientConfig, load_content};
use crawl_runtime::{Runtime, RuntimeConfig};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ClientConfig::from_env();
    let content = load_content(&config)?;

    let runtime_config = RuntimeConfig {
        game_seed: config.seed,
        tick_interval: None,
        ..RuntimeConfig::default()
    };
    let settle = runtime_config
        .timing
        .reveal_delay
        .max(runtime_config.timing.round_delay);

    let runtime = Runtime::builder()
        .config(runtime_config)
        .content(content.clone())
        .build()?;
    tracing::info!(seed = runtime.game_seed(), "starting crawl");

    let reader = tokio::io::BufReader::new(tokio::io::stdin());
    let mut app = App::new(runtime.handle(), content, std::io::stdout(), settle);
    app.run(reader).await?;
    drop(app);

    runtime.shutdown().await?;
    Ok(())
}
