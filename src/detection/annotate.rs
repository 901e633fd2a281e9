//! 检测框标注：按类别着色的边框
//!
//! 只画框不写字；标签与置信度随响应 JSON 返回，由前端叠加显示。

use image::{Rgb, RgbImage};

use super::Detection;

const BOX_THICKNESS: u32 = 2;

/// 标注颜色分类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectCategory {
    Tool,
    Safety,
    Person,
    Other,
}

impl ObjectCategory {
    pub fn of(label: &str) -> Self {
        if ["screwdriver", "hammer", "wrench", "drill"]
            .iter()
            .any(|t| label.contains(t))
        {
            Self::Tool
        } else if ["safety", "gloves", "mask", "hat"]
            .iter()
            .any(|t| label.contains(t))
        {
            Self::Safety
        } else if label.contains("person") {
            Self::Person
        } else {
            Self::Other
        }
    }

    pub fn color(self) -> Rgb<u8> {
        match self {
            Self::Tool => Rgb([255, 165, 0]),
            Self::Safety => Rgb([0, 255, 0]),
            Self::Person => Rgb([0, 0, 255]),
            Self::Other => Rgb([0, 255, 255]),
        }
    }
}

/// 在图像副本上绘制全部检测框
pub fn annotate(image: &RgbImage, detections: &[Detection]) -> RgbImage {
    let mut canvas = image.clone();
    if canvas.width() == 0 || canvas.height() == 0 {
        return canvas;
    }

    for det in detections {
        let color = ObjectCategory::of(&det.label).color();
        let (x1, y1) = clamp_point(&canvas, det.bbox.x1, det.bbox.y1);
        let (x2, y2) = clamp_point(&canvas, det.bbox.x2, det.bbox.y2);
        if x2 < x1 || y2 < y1 {
            continue;
        }

        draw_box(&mut canvas, x1, y1, x2, y2, color);
    }

    canvas
}

fn clamp_point(img: &RgbImage, x: f32, y: f32) -> (u32, u32) {
    let max_x = (img.width() - 1) as f32;
    let max_y = (img.height() - 1) as f32;
    (x.clamp(0.0, max_x) as u32, y.clamp(0.0, max_y) as u32)
}

fn draw_box(img: &mut RgbImage, x1: u32, y1: u32, x2: u32, y2: u32, color: Rgb<u8>) {
    for t in 0..BOX_THICKNESS {
        let top = (y1 + t).min(y2);
        let bottom = y2.saturating_sub(t).max(y1);
        let left = (x1 + t).min(x2);
        let right = x2.saturating_sub(t).max(x1);
        for x in x1..=x2 {
            img.put_pixel(x, top, color);
            img.put_pixel(x, bottom, color);
        }
        for y in y1..=y2 {
            img.put_pixel(left, y, color);
            img.put_pixel(right, y, color);
        }
    }
}
