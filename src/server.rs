mod error;
mod logging;
mod routes;
mod upload;

use anyhow::Context as _;

use crate::{
    assets::store::{AssetProblem, AssetStore},
    config::ServerConfig,
};

pub use error::{ApiError, InputSource, render_error_code};
pub use logging::{init_tracing, log_requests};
pub use routes::{AppState, router};
pub use upload::{UPLOAD_FIELD, UploadedFile, read_upload};

/// Bind `config.host` and serve the avatar routes until Ctrl+C or SIGTERM.
///
/// Asset problems are logged but do not stop the server; the affected requests fail
/// individually instead.
pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let assets = AssetStore::new(&config.images_dir);
    let problems = check_assets(&assets).await?;
    if problems.is_empty() {
        tracing::info!(images_dir = %assets.root().display(), "bundled assets ok");
    }
    for problem in &problems {
        tracing::warn!(images_dir = %assets.root().display(), "{problem}");
    }

    let app = router(&config);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("bind '{addr}'"))?;
    let local = listener.local_addr().context("read bound address")?;
    tracing::info!(
        name = env!("CARGO_PKG_NAME"),
        version = env!("CARGO_PKG_VERSION"),
        address = %local,
        "avatar server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serve http")?;

    tracing::info!("avatar server stopped");
    Ok(())
}

/// Runs [`AssetStore::check`] on the blocking pool; it reads and decodes both assets.
async fn check_assets(assets: &AssetStore) -> anyhow::Result<Vec<AssetProblem>> {
    let assets = assets.clone();
    on_blocking_pool(move || assets.check())
        .await
        .context("check bundled assets")
}

async fn on_blocking_pool<T: Send + 'static>(
    f: impl FnOnce() -> T + Send + 'static,
) -> anyhow::Result<T> {
    Ok(tokio::task::spawn_blocking(f).await?)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "ctrl-c handler unavailable");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "SIGTERM handler unavailable");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}

#[cfg(test)]
#[path = "../tests/unit/server/startup.rs"]
mod tests;
