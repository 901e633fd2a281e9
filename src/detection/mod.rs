//! 目标检测协作方
//!
//! 零样本检测本身交给外部推理服务（如 OWL-ViT）；这里负责：
//! - 图像解码（base64 / data URL）
//! - 制造业词表与查询文本
//! - 检测结果的阈值过滤、近义去重与标注绘制
//! - `ObjectDetector` 抽象：HTTP 推理端点 / 固定标签（离线演示、测试）

pub mod annotate;
pub mod dedup;
pub mod http;
pub mod decode;
pub mod static_detector;
pub mod vocabulary;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::core::AnalysisError;

pub use decode::{decode_image, DecodedImage};
pub use annotate::{annotate, ObjectCategory};
pub use dedup::{deduplicate_detections, group_key};
pub use http::HttpDetector;
pub use static_detector::StaticDetector;
pub use vocabulary::{manufacturing_vocabulary, prompt_queries};

/// 像素坐标系下的检测框（左上 x1,y1，右下 x2,y2）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

/// 单个检测结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub label: String,
    pub confidence: f64,
    pub bbox: BoundingBox,
}

/// 检测器 trait：输入已解码图像，返回过滤后的检测结果
#[async_trait]
pub trait ObjectDetector: Send + Sync {
    /// 用于日志与状态展示
    fn name(&self) -> &str;

    /// 检测器是否可用；默认认为已就绪
    fn is_ready(&self) -> bool {
        true
    }

    async fn detect(&self, image: &DecodedImage) -> Result<Vec<Detection>, AnalysisError>;
}
