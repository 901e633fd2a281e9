//! 图像分析流水线
//!
//! 解码 -> 检测 -> 标注 -> 去重 -> 可供性推理 -> 专家分析 -> PPE 评估 -> 存图 -> 记入历史。
//! 检测与 LLM 失败都不会中断请求：检测失败按零结果继续，LLM 失败回落到规则引擎摘要。

use std::sync::Arc;
use std::time::Duration;

use crate::affordance::{AffordanceCatalog, AffordanceEngine, Guidance};
use crate::config::AppConfig;
use crate::core::AnalysisError;
use crate::detection::{
    annotate, decode_image, deduplicate_detections, manufacturing_vocabulary, HttpDetector,
    ObjectDetector, StaticDetector,
};
use crate::llm::{create_llm_from_config, expert_analysis_messages, LlmClient};

use super::history::AnalysisHistory;
use super::safety::assess_safety;
use super::store::ImageStore;
use super::types::{AnalysisRequest, AnalysisResponse, SystemStatus};

pub struct AnalysisService {
    detector: Arc<dyn ObjectDetector>,
    engine: AffordanceEngine,
    llm: Option<Arc<dyn LlmClient>>,
    llm_timeout: Duration,
    store: ImageStore,
    history: AnalysisHistory,
}

impl AnalysisService {
    pub fn new(detector: Arc<dyn ObjectDetector>, engine: AffordanceEngine, store: ImageStore) -> Self {
        Self {
            detector,
            engine,
            llm: None,
            llm_timeout: Duration::from_secs(60),
            store,
            history: AnalysisHistory::new(500),
        }
    }

    pub fn with_llm(mut self, llm: Arc<dyn LlmClient>, timeout: Duration) -> Self {
        self.llm = Some(llm);
        self.llm_timeout = timeout;
        self
    }

    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history = AnalysisHistory::new(limit);
        self
    }

    /// 按配置组装检测器、规则引擎、LLM 与存储
    pub fn from_config(cfg: &AppConfig) -> Self {
        let detector: Arc<dyn ObjectDetector> = match cfg.detection.provider.as_str() {
            "static" => Arc::new(StaticDetector::from_labels(&cfg.detection.static_labels)),
            _ => Arc::new(HttpDetector::from_config(
                &cfg.detection,
                manufacturing_vocabulary(),
            )),
        };
        tracing::info!("Detector: {}", detector.name());

        let engine = AffordanceEngine::new(Arc::new(AffordanceCatalog::workshop()));
        let store = ImageStore::new(cfg.app.static_dir.clone());

        let mut service =
            Self::new(detector, engine, store).with_history_limit(cfg.app.history_limit);
        if let Some(llm) = create_llm_from_config(cfg) {
            service = service.with_llm(llm, Duration::from_secs(cfg.llm.timeouts.request));
        }
        service
    }

    pub fn store(&self) -> &ImageStore {
        &self.store
    }

    pub fn history(&self) -> &AnalysisHistory {
        &self.history
    }

    /// 仅运行规则引擎（标签来自其它检测来源时使用）
    pub fn guidance<S: AsRef<str>>(&self, objects: &[S]) -> Guidance {
        self.engine.generate_guidance(objects)
    }

    pub async fn status(&self) -> SystemStatus {
        SystemStatus {
            status: "operational".to_string(),
            owlvit_loaded: self.detector.is_ready(),
            affordance_engine: true,
            openai_connected: self.llm.is_some(),
            total_analyses: self.history.len().await,
        }
    }

    pub async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResponse, AnalysisError> {
        tracing::info!(analysis_type = %request.analysis_type, "starting analysis");

        let image = decode_image(&request.image_base64)?;
        tracing::debug!(width = image.width(), height = image.height(), "image decoded");

        let detections = match self.detector.detect(&image).await {
            Ok(d) => d,
            Err(e) => {
                tracing::warn!("detection failed, continuing without objects: {}", e);
                Vec::new()
            }
        };
        let annotated = annotate(&image.pixels, &detections);

        let detections = deduplicate_detections(detections);
        let detected_objects: Vec<String> = detections.iter().map(|d| d.label.clone()).collect();
        let confidence_scores: Vec<f64> = detections.iter().map(|d| d.confidence).collect();
        tracing::info!("detected {} objects: {:?}", detected_objects.len(), detected_objects);

        let guidance = self.engine.generate_guidance(&detected_objects);
        let expert_analysis = self.expert_analysis(&detected_objects, &guidance).await;
        let safety_assessment = assess_safety(&detected_objects);

        let id = uuid::Uuid::new_v4().to_string();
        let timestamp = chrono::Local::now().to_rfc3339();
        let image_url = self.store.save(&id, &annotated).await?;

        let Guidance {
            summary,
            task_phase,
            affordances,
            object_combinations,
            anomalies,
            next_steps,
        } = guidance;

        let response = AnalysisResponse {
            id,
            timestamp,
            detected_objects,
            confidence_scores,
            task_phase,
            expert_analysis,
            safety_assessment,
            next_steps,
            image_url,
            summary,
            affordances,
            object_combinations,
            anomalies,
        };

        self.history.record(response.clone()).await;
        tracing::info!(id = %response.id, phase = %response.task_phase, "analysis complete");
        Ok(response)
    }

    /// 有 LLM 且检测到物体时请求专家分析，否则（或失败、超时时）使用摘要
    pub async fn expert_analysis(&self, objects: &[String], guidance: &Guidance) -> String {
        let Some(llm) = &self.llm else {
            return guidance.summary.clone();
        };
        if objects.is_empty() {
            return guidance.summary.clone();
        }

        let messages = expert_analysis_messages(objects, &guidance.task_phase);
        let result = match tokio::time::timeout(self.llm_timeout, llm.complete(&messages)).await {
            Ok(Ok(text)) if !text.trim().is_empty() => Ok(text),
            Ok(Ok(_)) => Err(AnalysisError::Llm("empty completion".to_string())),
            Ok(Err(e)) => Err(AnalysisError::Llm(e)),
            Err(_) => Err(AnalysisError::LlmTimeout(self.llm_timeout.as_secs())),
        };

        match result {
            Ok(text) => {
                tracing::info!("expert analysis generated by {}", llm.name());
                text
            }
            Err(e) => {
                tracing::warn!("expert analysis unavailable: {}", e);
                guidance.summary.clone()
            }
        }
    }
}
