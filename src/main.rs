use anyhow::Result;
use chomp_chat::ai::{ChatService, GeminiChatClient};
use chomp_chat::config::Config;
use chomp_chat::server::{self, AppState};
use clap::Parser;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "chomp-chat")]
#[command(about = "Server-side chat proxy for the Chomp Chomp assistant")]
struct CliArgs {
    /// Address to bind.
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to bind.
    #[arg(long, default_value_t = 8080)]
    port: u16,

    /// Gemini API key; takes precedence over GEMINI_API_KEY.
    #[arg(long)]
    api_key: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Local development loads .env; production supplies real env vars.
    if std::env::var("APP_ENV").as_deref() != Ok("production") {
        dotenvy::dotenv().ok();
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chomp_chat=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = CliArgs::parse();
    let config = Config::from_env(args.api_key);

    let chat: Option<Arc<dyn ChatService>> = match &config.api_key {
        Some(key) => Some(Arc::new(GeminiChatClient::new(
            key.clone(),
            config.model.clone(),
            config.base_url.clone(),
        ))),
        None => {
            warn!("No Gemini credential configured; /chat will report a configuration error");
            None
        }
    };

    let addr = format!("{}:{}", args.host, args.port);
    info!("Starting chomp-chat on {} (model {})", addr, config.model);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, server::router(AppState { chat })).await?;

    Ok(())
}
