//! HTTP API（axum）
//!
//! - `GET /`：系统状态
//! - `POST /analyze/image`：完整分析流水线
//! - `GET /analyses`、`GET /analyses/:id`：内存历史
//! - `POST /guidance`：直接对标签列表运行规则引擎
//! - `GET /api/health`
//! - `/static/*`：标注图

pub mod error;

use std::sync::Arc;

use axum::{
    extract::{DefaultBodyLimit, Path, State},
    http::HeaderValue,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    services::ServeDir,
};

use crate::affordance::Guidance;
use crate::analysis::{AnalysisRequest, AnalysisResponse, AnalysisService, SystemStatus};

pub use error::ApiError;

/// base64 图像体积较大，放宽 axum 默认的 2MB 限制
const MAX_BODY_BYTES: usize = 32 * 1024 * 1024;

#[derive(Debug, Deserialize)]
pub struct GuidanceRequest {
    #[serde(default)]
    pub objects: Vec<String>,
}

/// 构建路由；`cors_origins` 含 `*` 时镜像请求来源
pub fn create_router(service: Arc<AnalysisService>, cors_origins: &[String]) -> Router {
    let static_dir = service.store().dir().to_path_buf();

    Router::new()
        .route("/", get(system_status))
        .route("/analyze/image", post(analyze_image))
        .route("/analyses", get(list_analyses))
        .route("/analyses/:id", get(get_analysis))
        .route("/guidance", post(guidance))
        .route("/api/health", get(|| async { "OK" }))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(cors_layer(cors_origins))
        .with_state(service)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.iter().any(|o| o == "*") {
        AllowOrigin::mirror_request()
    } else {
        let list: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|o| match o.parse::<HeaderValue>() {
                Ok(v) => Some(v),
                Err(_) => {
                    tracing::warn!("ignoring invalid CORS origin: {}", o);
                    None
                }
            })
            .collect();
        AllowOrigin::list(list)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}

async fn system_status(State(service): State<Arc<AnalysisService>>) -> Json<SystemStatus> {
    Json(service.status().await)
}

async fn analyze_image(
    State(service): State<Arc<AnalysisService>>,
    Json(req): Json<AnalysisRequest>,
) -> Result<Json<AnalysisResponse>, ApiError> {
    let response = service.analyze(&req).await?;
    Ok(Json(response))
}

async fn list_analyses(State(service): State<Arc<AnalysisService>>) -> Json<Vec<AnalysisResponse>> {
    Json(service.history().list().await)
}

async fn get_analysis(
    State(service): State<Arc<AnalysisService>>,
    Path(id): Path<String>,
) -> Result<Json<AnalysisResponse>, ApiError> {
    service
        .history()
        .get(&id)
        .await
        .map(Json)
        .ok_or(ApiError::NotFound(id))
}

async fn guidance(
    State(service): State<Arc<AnalysisService>>,
    Json(req): Json<GuidanceRequest>,
) -> Json<Guidance> {
    Json(service.guidance(&req.objects))
}
