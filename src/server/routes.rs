use std::{borrow::Cow, sync::Arc};

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, Multipart, State, multipart::MultipartRejection},
    http::header,
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
};

use crate::{
    assets::{format::normalize_to_png, store::AssetStore},
    config::ServerConfig,
    encode::response::{Base64Envelope, OutputMode},
    foundation::error::{AvatarError, AvatarResult},
    render::pipeline::generate_avatar,
    server::{
        error::{ApiError, InputSource},
        logging::log_requests,
        upload::read_upload,
    },
};

/// Immutable state shared by every request.
#[derive(Clone, Debug)]
pub struct AppState {
    assets: Arc<AssetStore>,
    binary_content_type: &'static str,
}

impl AppState {
    /// State for `config`.
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            assets: Arc::new(AssetStore::new(&config.images_dir)),
            binary_content_type: config.binary_content_type.as_str(),
        }
    }
}

/// The four avatar routes with request logging and the upload size limit applied.
pub fn router(config: &ServerConfig) -> Router {
    Router::new()
        .route("/render/demo/base64", get(demo_base64))
        .route("/render/demo/img", get(demo_img))
        .route("/render/base64", post(upload_base64))
        .route("/render/img", post(upload_img))
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(middleware::from_fn(log_requests))
        .with_state(AppState::new(config))
}

async fn demo_base64(State(state): State<AppState>) -> Result<Response, ApiError> {
    render_demo(state, OutputMode::Base64).await
}

async fn demo_img(State(state): State<AppState>) -> Result<Response, ApiError> {
    render_demo(state, OutputMode::Binary).await
}

async fn upload_base64(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response, ApiError> {
    render_upload(state, multipart, OutputMode::Base64).await
}

async fn upload_img(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response, ApiError> {
    render_upload(state, multipart, OutputMode::Binary).await
}

async fn render_demo(state: AppState, mode: OutputMode) -> Result<Response, ApiError> {
    let assets = Arc::clone(&state.assets);
    let background = run_blocking(move || assets.load_demo())
        .await
        .map_err(|e| ApiError::input(InputSource::Demo, mode, &e))?;
    render(state, background, mode).await
}

async fn render_upload(
    state: AppState,
    multipart: Result<Multipart, MultipartRejection>,
    mode: OutputMode,
) -> Result<Response, ApiError> {
    let to_api = |e: AvatarError| ApiError::input(InputSource::Upload, mode, &e);

    let upload = read_upload(multipart).await.map_err(to_api)?;
    let background = run_blocking(move || normalize_to_png(&upload.bytes).map(Cow::into_owned))
        .await
        .map_err(to_api)?;
    render(state, background, mode).await
}

async fn render(
    state: AppState,
    background: Vec<u8>,
    mode: OutputMode,
) -> Result<Response, ApiError> {
    let assets = Arc::clone(&state.assets);
    let png = run_blocking(move || generate_avatar(&background, &assets))
        .await
        .map_err(|e| ApiError::render(&e))?;

    Ok(match mode {
        OutputMode::Base64 => Json(Base64Envelope::from_png(&png)).into_response(),
        OutputMode::Binary => {
            ([(header::CONTENT_TYPE, state.binary_content_type)], png).into_response()
        }
    })
}

/// Run CPU-bound image work on the blocking pool.
async fn run_blocking<T, F>(f: F) -> AvatarResult<T>
where
    F: FnOnce() -> AvatarResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| AvatarError::Other(anyhow::anyhow!("image task failed: {e}")))?
}
