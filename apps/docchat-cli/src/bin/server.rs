use docchat_core::config::Config;
use docchat_server::{run_server, ServiceContext};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::load()?;
    let context = ServiceContext::initialize(&config).await?;
    run_server(context.pipeline, &config.bind_addr()).await
}
