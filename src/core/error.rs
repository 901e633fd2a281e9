//! 分析流水线错误类型
//!
//! 规则引擎本身不会失败；这里只覆盖图像解码、检测、存储与 LLM 等外部协作方。

use thiserror::Error;

/// 单次图像分析过程中可能出现的错误
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Invalid base64 payload: {0}")]
    InvalidBase64(String),

    #[error("Invalid image data: {0}")]
    InvalidImage(String),

    #[error("Detection failed: {0}")]
    Detection(String),

    #[error("Image storage failed: {0}")]
    Storage(String),

    #[error("LLM error: {0}")]
    Llm(String),

    /// 超过 [llm.timeouts] request 秒
    #[error("LLM request timed out after {0}s")]
    LlmTimeout(u64),
}

impl AnalysisError {
    /// 请求体本身有问题（调用方可修正），而不是服务端故障
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidBase64(_) | Self::InvalidImage(_))
    }
}

impl From<std::io::Error> for AnalysisError {
    fn from(e: std::io::Error) -> Self {
        Self::Storage(e.to_string())
    }
}

impl From<image::ImageError> for AnalysisError {
    fn from(e: image::ImageError) -> Self {
        Self::InvalidImage(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_classification() {
        assert!(AnalysisError::InvalidBase64("x".into()).is_client_error());
        assert!(AnalysisError::InvalidImage("x".into()).is_client_error());
        assert!(!AnalysisError::Detection("x".into()).is_client_error());
        assert!(!AnalysisError::LlmTimeout(60).is_client_error());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            AnalysisError::LlmTimeout(5).to_string(),
            "LLM request timed out after 5s"
        );
    }
}
