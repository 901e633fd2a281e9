//! API 请求/响应类型（字段名与前端约定一致）

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::affordance::ObjectCombination;

#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisRequest {
    /// 裸 base64 或 data URL
    pub image_base64: String,
    #[serde(default = "default_analysis_type")]
    pub analysis_type: String,
}

fn default_analysis_type() -> String {
    "comprehensive".to_string()
}

impl AnalysisRequest {
    pub fn new(image_base64: impl Into<String>) -> Self {
        Self {
            image_base64: image_base64.into(),
            analysis_type: default_analysis_type(),
        }
    }
}

/// 单次分析结果，同时写入内存历史
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub id: String,
    pub timestamp: String,
    pub detected_objects: Vec<String>,
    pub confidence_scores: Vec<f64>,
    pub task_phase: String,
    pub expert_analysis: String,
    pub safety_assessment: String,
    pub next_steps: String,
    pub image_url: String,
    pub summary: String,
    pub affordances: BTreeMap<String, Vec<String>>,
    pub object_combinations: Vec<ObjectCombination>,
    pub anomalies: Vec<String>,
}

/// GET / 返回的系统状态
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemStatus {
    pub status: String,
    /// 检测后端是否就绪（字段名沿用前端约定）
    pub owlvit_loaded: bool,
    pub affordance_engine: bool,
    pub openai_connected: bool,
    pub total_analyses: usize,
}
