//! 制造业零样本检测词表

/// 人员、设备、防护用品、工具、材料、工件与常见物品
const MANUFACTURING_VOCABULARY: &[&str] = &[
    // 人员
    "industrial worker", "machinist", "operator", "technician", "engineer",
    "supervisor", "inspector", "apprentice", "person", "worker",
    // 设备
    "CNC mill", "vertical mill", "horizontal mill", "milling machine",
    "precision lathe", "metal lathe", "turning machine", "lathe",
    "drill press", "band saw", "welding machine", "cnc machine",
    // 防护用品
    "safety helmet", "hard hat", "protective helmet", "safety glasses",
    "protective glasses", "safety goggles", "work gloves", "safety gloves",
    "protective gloves", "face mask", "safety mask", "respirator",
    // 工具
    "screwdriver", "hammer", "wrench", "pliers", "saw", "drill", "clamp",
    "measuring tape", "level", "soldering iron", "multimeter", "caliper",
    "micrometer", "torque wrench", "allen key", "file", "chisel",
    // 材料与零件
    "wood", "metal", "plastic", "wire", "pipe", "sheet metal",
    "circuit board", "resistor", "capacitor", "bolt", "screw",
    "nail", "washer", "nut", "bearing", "spring",
    // 工件与装配
    "workpiece", "assembly", "component", "product", "prototype",
    "jig", "fixture", "template", "blueprint", "schematic",
    // 常见物品
    "laptop", "computer", "phone", "tablet", "camera", "bottle", "cup",
    "pen", "pencil", "paper", "book", "chair", "table", "box",
    "scissors", "knife", "spoon", "fork",
];

pub fn manufacturing_vocabulary() -> Vec<String> {
    MANUFACTURING_VOCABULARY.iter().map(|s| s.to_string()).collect()
}

/// 检测模型的文本查询："a photo of a {term}"
pub fn prompt_queries(vocabulary: &[String]) -> Vec<String> {
    vocabulary
        .iter()
        .map(|term| format!("a photo of a {}", term))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_contents() {
        let vocab = manufacturing_vocabulary();
        assert_eq!(vocab.len(), 95);
        assert!(vocab.iter().any(|v| v == "person"));
        assert!(vocab.iter().any(|v| v == "safety glasses"));
    }

    #[test]
    fn test_prompt_queries() {
        let queries = prompt_queries(&["drill".to_string()]);
        assert_eq!(queries, vec!["a photo of a drill"]);
    }
}
