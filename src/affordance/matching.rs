//! 关键词匹配策略
//!
//! 引擎中所有「标签是否出现」的判断都经过这里，便于单独测试：
//! - `contains_label`：精确成员判断
//! - `any_label_contains`：关键词是否为某个标签的子串
//! - `joined_contains`：关键词是否出现在以空格拼接的全部标签文本中（可跨标签命中）
//!
//! 纯字符串比较，不做大小写归一、不做语义匹配。

/// 精确匹配：objects 中是否存在与 label 完全相同的项
pub fn contains_label<S: AsRef<str>>(objects: &[S], label: &str) -> bool {
    objects.iter().any(|o| o.as_ref() == label)
}

/// 子串匹配：keyword 是否完整出现在任一标签中
pub fn any_label_contains<S: AsRef<str>>(objects: &[S], keyword: &str) -> bool {
    objects.iter().any(|o| o.as_ref().contains(keyword))
}

/// 阶段模板匹配：精确存在，或为某个输入标签的子串
pub fn template_label_present<S: AsRef<str>>(objects: &[S], required: &str) -> bool {
    contains_label(objects, required) || any_label_contains(objects, required)
}

/// 拼接文本匹配：`objects.join(" ")` 中是否包含 keyword
pub fn joined_contains<S: AsRef<str>>(objects: &[S], keyword: &str) -> bool {
    let joined = objects
        .iter()
        .map(|o| o.as_ref())
        .collect::<Vec<_>>()
        .join(" ");
    joined.contains(keyword)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_label_is_exact() {
        let objects = ["band saw", "person"];
        assert!(contains_label(&objects, "person"));
        assert!(!contains_label(&objects, "saw"));
    }

    #[test]
    fn test_any_label_contains_substring() {
        let objects = ["band saw", "person"];
        assert!(any_label_contains(&objects, "saw"));
        assert!(!any_label_contains(&objects, "drill"));
    }

    #[test]
    fn test_template_label_present() {
        let objects = ["torque wrench"];
        assert!(template_label_present(&objects, "wrench"));
        assert!(!template_label_present(&objects, "hammer"));
    }

    #[test]
    fn test_joined_contains_spans_labels() {
        // 跨标签拼接后命中
        let objects = ["hard", "hat"];
        assert!(joined_contains(&objects, "hard hat"));
        assert!(!any_label_contains(&objects, "hard hat"));
    }

    #[test]
    fn test_empty_inputs() {
        let empty: [&str; 0] = [];
        assert!(!contains_label(&empty, "person"));
        assert!(!any_label_contains(&empty, "person"));
        assert!(!joined_contains(&empty, "gloves"));
        // 空标签不会误命中
        assert!(!any_label_contains(&[""], "gloves"));
    }
}
