//! API 错误：统一映射为 `{"detail": ...}` 响应体

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::core::AnalysisError;

#[derive(Debug)]
pub enum ApiError {
    /// 流水线失败：输入问题 400，其余 500
    Analysis(AnalysisError),
    NotFound(String),
}

impl From<AnalysisError> for ApiError {
    fn from(e: AnalysisError) -> Self {
        Self::Analysis(e)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Analysis(e) if e.is_client_error() => StatusCode::BAD_REQUEST,
            Self::Analysis(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    pub fn detail(&self) -> String {
        match self {
            Self::Analysis(e) if e.is_client_error() => e.to_string(),
            Self::Analysis(e) => format!("Analysis failed: {}", e),
            Self::NotFound(id) => format!("Analysis {} not found", id),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = self.detail();
        if status.is_server_error() {
            tracing::error!("{}", detail);
        } else {
            tracing::warn!("{}", detail);
        }
        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let bad = ApiError::from(AnalysisError::InvalidBase64("x".into()));
        assert_eq!(bad.status(), StatusCode::BAD_REQUEST);

        let failed = ApiError::from(AnalysisError::Storage("disk full".into()));
        assert_eq!(failed.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(failed.detail().starts_with("Analysis failed: "));

        assert_eq!(ApiError::NotFound("abc".into()).status(), StatusCode::NOT_FOUND);
    }
}
