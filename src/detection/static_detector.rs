//! 固定标签检测器：不依赖推理服务，用于离线演示与测试

use async_trait::async_trait;

use super::{BoundingBox, DecodedImage, Detection, ObjectDetector};
use crate::core::AnalysisError;

/// 每次都返回同一组标签，检测框覆盖整幅图像
#[derive(Debug, Clone, Default)]
pub struct StaticDetector {
    labels: Vec<(String, f64)>,
}

impl StaticDetector {
    pub fn new(labels: Vec<(String, f64)>) -> Self {
        Self { labels }
    }

    /// 所有标签使用同一置信度 0.9
    pub fn from_labels<S: AsRef<str>>(labels: &[S]) -> Self {
        Self::new(
            labels
                .iter()
                .map(|l| (l.as_ref().to_string(), 0.9))
                .collect(),
        )
    }
}

#[async_trait]
impl ObjectDetector for StaticDetector {
    fn name(&self) -> &str {
        "static"
    }

    async fn detect(&self, image: &DecodedImage) -> Result<Vec<Detection>, AnalysisError> {
        let bbox = BoundingBox {
            x1: 0.0,
            y1: 0.0,
            x2: image.width().saturating_sub(1) as f32,
            y2: image.height().saturating_sub(1) as f32,
        };
        Ok(self
            .labels
            .iter()
            .map(|(label, confidence)| Detection {
                label: label.clone(),
                confidence: *confidence,
                bbox,
            })
            .collect())
    }
}
