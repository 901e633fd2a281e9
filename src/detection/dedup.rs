//! 检测结果近义去重
//!
//! 词表里有大量近义项（"CNC mill" / "milling machine"、"hard hat" / "safety helmet"），
//! 同一实物常被多个查询命中。按归一化分组键合并，每组只保留置信度最高的一项。

use super::Detection;

/// 归一化分组键
pub fn group_key(label: &str) -> String {
    let base = label.to_lowercase();

    if ["mill", "milling"].iter().any(|t| base.contains(t)) {
        "milling_machine".to_string()
    } else if ["lathe", "turning"].iter().any(|t| base.contains(t)) {
        "lathe".to_string()
    } else if ["hat", "helmet"].iter().any(|t| base.contains(t)) {
        "head_protection".to_string()
    } else if ["glasses", "goggles"].iter().any(|t| base.contains(t)) {
        "eye_protection".to_string()
    } else {
        base.replace(' ', "_")
    }
}

/// 每组保留最高置信度（并列取先出现者），组按首次出现顺序输出
pub fn deduplicate_detections(detections: Vec<Detection>) -> Vec<Detection> {
    let mut groups: Vec<(String, Detection)> = Vec::new();

    for det in detections {
        let key = group_key(&det.label);
        match groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, best)) => {
                if det.confidence > best.confidence {
                    *best = det;
                }
            }
            None => groups.push((key, det)),
        }
    }

    groups.into_iter().map(|(_, det)| det).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::BoundingBox;

    fn det(label: &str, confidence: f64) -> Detection {
        Detection {
            label: label.to_string(),
            confidence,
            bbox: BoundingBox { x1: 0.0, y1: 0.0, x2: 1.0, y2: 1.0 },
        }
    }

    #[test]
    fn test_group_keys() {
        assert_eq!(group_key("CNC mill"), "milling_machine");
        assert_eq!(group_key("milling machine"), "milling_machine");
        assert_eq!(group_key("metal lathe"), "lathe");
        assert_eq!(group_key("turning machine"), "lathe");
        assert_eq!(group_key("safety helmet"), "head_protection");
        assert_eq!(group_key("hard hat"), "head_protection");
        assert_eq!(group_key("safety goggles"), "eye_protection");
        assert_eq!(group_key("work gloves"), "work_gloves");
    }

    #[test]
    fn test_keeps_highest_confidence_per_group() {
        let result = deduplicate_detections(vec![
            det("hard hat", 0.4),
            det("person", 0.8),
            det("safety helmet", 0.6),
            det("person", 0.5),
        ]);
        let labels: Vec<&str> = result.iter().map(|d| d.label.as_str()).collect();
        assert_eq!(labels, vec!["safety helmet", "person"]);
        assert_eq!(result[1].confidence, 0.8);
    }

    #[test]
    fn test_tie_keeps_first() {
        let result = deduplicate_detections(vec![det("CNC mill", 0.5), det("vertical mill", 0.5)]);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].label, "CNC mill");
    }
}
