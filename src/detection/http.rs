//! HTTP 推理端点检测器
//!
//! 将图像与词表查询 POST 给外部零样本检测服务（如 OWL-ViT），协议：
//!
//! 请求 `{"image_base64": "...", "queries": ["a photo of a drill", ...], "threshold": 0.1}`
//!
//! 响应 `{"detections": [{"label": 5, "score": 0.42, "box": [x1, y1, x2, y2]}]}`，
//! 其中 `label` 为查询下标。服务端按 `threshold` 初筛，本地再按 `confidence_threshold` 过滤。

use std::time::Duration;

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};

use super::vocabulary::prompt_queries;
use super::{BoundingBox, DecodedImage, Detection, ObjectDetector};
use crate::config::DetectionSection;
use crate::core::AnalysisError;

#[derive(Debug, Serialize)]
struct DetectRequest<'a> {
    image_base64: String,
    queries: &'a [String],
    threshold: f64,
}

#[derive(Debug, Deserialize)]
struct DetectResponse {
    #[serde(default)]
    detections: Vec<RawDetection>,
}

#[derive(Debug, Deserialize)]
struct RawDetection {
    label: usize,
    score: f64,
    #[serde(rename = "box")]
    bbox: [f32; 4],
}

/// 基于 reqwest 的远程检测器
pub struct HttpDetector {
    client: reqwest::Client,
    endpoint: String,
    vocabulary: Vec<String>,
    queries: Vec<String>,
    query_threshold: f64,
    confidence_threshold: f64,
}

impl HttpDetector {
    pub fn new(endpoint: &str, vocabulary: Vec<String>) -> Self {
        let queries = prompt_queries(&vocabulary);
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.to_string(),
            vocabulary,
            queries,
            query_threshold: 0.1,
            confidence_threshold: 0.25,
        }
    }

    /// 按 [detection] 配置构建（端点、阈值、超时）
    pub fn from_config(cfg: &DetectionSection, vocabulary: Vec<String>) -> Self {
        let client = match reqwest::Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .build()
        {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!(
                    "detector client build failed, timeout {}s not applied: {}",
                    cfg.timeout_secs,
                    e
                );
                reqwest::Client::new()
            }
        };
        Self {
            client,
            ..Self::new(&cfg.endpoint, vocabulary)
        }
        .with_thresholds(cfg.query_threshold, cfg.confidence_threshold)
    }

    pub fn with_thresholds(mut self, query: f64, confidence: f64) -> Self {
        self.query_threshold = query;
        self.confidence_threshold = confidence;
        self
    }

    /// 下标映射回词表，丢弃越界下标与低于阈值的结果
    fn convert(&self, raw: Vec<RawDetection>) -> Vec<Detection> {
        raw.into_iter()
            .filter(|d| d.score > self.confidence_threshold)
            .filter_map(|d| {
                let label = self.vocabulary.get(d.label)?;
                let [x1, y1, x2, y2] = d.bbox;
                Some(Detection {
                    label: label.clone(),
                    confidence: d.score,
                    bbox: BoundingBox { x1, y1, x2, y2 },
                })
            })
            .collect()
    }
}

#[async_trait]
impl ObjectDetector for HttpDetector {
    fn name(&self) -> &str {
        "http"
    }

    async fn detect(&self, image: &DecodedImage) -> Result<Vec<Detection>, AnalysisError> {
        let body = DetectRequest {
            image_base64: STANDARD.encode(&image.raw),
            queries: &self.queries,
            threshold: self.query_threshold,
        };

        let resp = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| AnalysisError::Detection(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(AnalysisError::Detection(format!(
                "detector returned {}: {}",
                status, text
            )));
        }

        let parsed: DetectResponse = resp
            .json()
            .await
            .map_err(|e| AnalysisError::Detection(e.to_string()))?;

        let detections = self.convert(parsed.detections);
        tracing::debug!(count = detections.len(), "http detector results");
        Ok(detections)
    }
}
