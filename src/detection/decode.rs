//! 请求图像解码：支持裸 base64 与 `data:image/...;base64,` 前缀

use base64::{engine::general_purpose::STANDARD, Engine};
use image::RgbImage;

use crate::core::AnalysisError;

/// 解码后的图像：保留原始字节（转发给推理服务）与 RGB 像素（用于标注）
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub raw: Vec<u8>,
    pub pixels: RgbImage,
}

impl DecodedImage {
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }
}

/// 去掉 data URL 前缀（取第一个逗号之后的部分）并忽略空白字符
fn strip_payload(payload: &str) -> String {
    let data = match payload.split_once(',') {
        Some((_, rest)) => rest,
        None => payload,
    };
    data.chars().filter(|c| !c.is_whitespace()).collect()
}

/// base64 -> 字节 -> RGB 图像
pub fn decode_image(payload: &str) -> Result<DecodedImage, AnalysisError> {
    let data = strip_payload(payload);
    if data.is_empty() {
        return Err(AnalysisError::InvalidBase64("empty image payload".to_string()));
    }

    let raw = STANDARD
        .decode(data.as_bytes())
        .map_err(|e| AnalysisError::InvalidBase64(e.to_string()))?;
    let pixels = image::load_from_memory(&raw)?.to_rgb8();

    Ok(DecodedImage { raw, pixels })
}
