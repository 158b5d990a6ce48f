use cardform::cli::Cli;
use cardform::config::Settings;
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration (file, then env/CLI overrides)
    let settings = Settings::new_with_cli(&cli)?;
    let host = settings.server.host.clone();
    let port = settings.server.port;

    info!("Starting business card form server on {}:{}", host, port);
    info!(
        "Form posts to {}, bundle served from {}",
        settings.renderer.url,
        settings.assets.dir.display()
    );

    let app = cardform::create_app(Arc::new(settings))?;

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
