//! PPE（个人防护用品）评估文本

/// 标签包含以下任一关键词（不区分大小写）即视为防护用品
const SAFETY_KEYWORDS: &[&str] = &["safety", "gloves", "mask", "hat", "protection"];

/// 检测结果中的防护用品，保持原顺序
pub fn safety_items<S: AsRef<str>>(objects: &[S]) -> Vec<String> {
    objects
        .iter()
        .map(|o| o.as_ref())
        .filter(|o| {
            let lower = o.to_lowercase();
            SAFETY_KEYWORDS.iter().any(|k| lower.contains(k))
        })
        .map(String::from)
        .collect()
}

pub fn assess_safety<S: AsRef<str>>(objects: &[S]) -> String {
    let items = safety_items(objects);
    if items.is_empty() {
        "⚠️ No safety equipment detected. Ensure appropriate PPE for industrial tasks.".to_string()
    } else {
        format!(
            "✅ Safety equipment detected: {}. Good safety practices observed.",
            items.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_ppe() {
        let objects = ["person", "Safety Glasses", "work gloves", "drill"];
        assert_eq!(safety_items(&objects), vec!["Safety Glasses", "work gloves"]);
        assert_eq!(
            assess_safety(&objects),
            "✅ Safety equipment detected: Safety Glasses, work gloves. Good safety practices observed."
        );
    }

    #[test]
    fn test_no_ppe() {
        assert!(assess_safety(&["drill"]).starts_with("⚠️ No safety equipment detected"));
        let empty: [&str; 0] = [];
        assert!(assess_safety(&empty).starts_with("⚠️"));
    }
}
