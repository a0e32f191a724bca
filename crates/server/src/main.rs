use std::net::SocketAddr;
use std::str::FromStr;

use anyhow::Context;
use lesbar_core::ProfileKind;
use lesbar_server::{AppState, create_router};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lesbar_server=info,lesbar_core=info,tower_http=debug,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let port: u16 = std::env::var("LESBAR_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);

    let profile_kind = match std::env::var("LESBAR_PROFILE") {
        Ok(value) => ProfileKind::from_str(&value).context("Invalid LESBAR_PROFILE")?,
        Err(_) => ProfileKind::default(),
    };
    let profile = profile_kind.load().context("Failed to load scoring profile")?;

    tracing::info!(port, profile = profile_kind.as_str(), "starting lesbar server");

    let app = create_router(AppState::new(profile));

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
