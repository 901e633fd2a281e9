//! 标注图存储：写入静态目录，经 /static 对外提供

use std::path::{Path, PathBuf};

use image::codecs::jpeg::JpegEncoder;
use image::RgbImage;

use crate::core::AnalysisError;

const JPEG_QUALITY: u8 = 90;

#[derive(Debug, Clone)]
pub struct ImageStore {
    dir: PathBuf,
}

impl ImageStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn file_name(id: &str) -> String {
        format!("analysis_{}.jpg", id)
    }

    /// 编码为 JPEG 并写盘，返回对外 URL（/static/analysis_{id}.jpg）
    pub async fn save(&self, id: &str, image: &RgbImage) -> Result<String, AnalysisError> {
        let mut buf = Vec::new();
        JpegEncoder::new_with_quality(&mut buf, JPEG_QUALITY)
            .encode_image(image)
            .map_err(|e| AnalysisError::Storage(e.to_string()))?;

        tokio::fs::create_dir_all(&self.dir).await?;
        let name = Self::file_name(id);
        tokio::fs::write(self.dir.join(&name), buf).await?;

        Ok(format!("/static/{}", name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_writes_jpeg() {
        let dir = tempfile::tempdir().unwrap();
        let store = ImageStore::new(dir.path().join("static"));
        let url = store.save("abc", &RgbImage::new(8, 8)).await.unwrap();
        assert_eq!(url, "/static/analysis_abc.jpg");

        let bytes = std::fs::read(dir.path().join("static/analysis_abc.jpg")).unwrap();
        // JPEG SOI
        assert_eq!(&bytes[..2], &[0xFF, 0xD8]);
    }
}
