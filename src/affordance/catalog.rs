//! 可供性规则表
//!
//! 启动时构造一次，经 `Arc` 注入引擎后只读共享；同一进程可持有多套目录（如测试用的精简表）。

use std::collections::HashMap;

use super::types::{
    ASSEMBLY_PHASE, CUTTING_PHASE, GENERAL_WORK_PHASE, MAINTENANCE_PHASE, MEASUREMENT_PHASE,
    QUALITY_CONTROL, SETUP_PHASE, UNKNOWN_PHASE,
};

/// 任务阶段模板：阶段名 + 期望出现的标签
#[derive(Debug, Clone)]
pub struct PhaseTemplate {
    pub name: String,
    pub expected: Vec<String>,
}

/// 工具共现规则：全部标签同时出现即认定为某项活动
#[derive(Debug, Clone)]
pub struct CombinationRule {
    pub objects: Vec<String>,
    pub activity: String,
}

/// 引擎使用的全部固定数据
#[derive(Debug, Clone)]
pub struct AffordanceCatalog {
    pub affordances: HashMap<String, Vec<String>>,
    /// 未知标签统一使用的动作
    pub generic_affordances: Vec<String>,
    /// 有序；打分并列时靠前者胜出
    pub phases: Vec<PhaseTemplate>,
    pub fallback_phase: String,
    pub empty_phase: String,
    pub tool_pairs: Vec<CombinationRule>,
    pub person_label: String,
    pub person_confidence: f64,
    pub pair_confidence: f64,
    pub dangerous_tools: Vec<String>,
    pub safety_equipment: Vec<String>,
    /// 电子设备与电动工具同时出现时告警
    pub interference_pair: (String, String),
    pub next_steps: HashMap<String, String>,
    pub default_next_steps: String,
    pub empty_summary: String,
    pub empty_next_steps: String,
}

pub const SAFETY_WARNING: &str = "Dangerous tools detected without safety equipment";
pub const INTERFERENCE_WARNING: &str =
    "Electronic device near power tools - potential interference";

const WORKSHOP_AFFORDANCES: &[(&str, &[&str])] = &[
    ("screwdriver", &["turning", "poking", "prying", "tightening", "loosening"]),
    ("hammer", &["hitting", "striking", "pulling", "driving", "breaking"]),
    ("wrench", &["turning", "gripping", "twisting", "tightening", "holding"]),
    ("pliers", &["gripping", "cutting", "bending", "holding", "twisting"]),
    ("drill", &["drilling", "boring", "rotating", "piercing", "making holes"]),
    ("person", &["working", "operating", "manipulating", "controlling", "observing"]),
    ("laptop", &["computing", "monitoring", "controlling", "programming", "analyzing"]),
    ("phone", &["communicating", "documenting", "measuring", "recording"]),
    ("bottle", &["containing", "pouring", "storing", "measuring"]),
    ("cup", &["containing", "drinking", "measuring", "holding"]),
    ("scissors", &["cutting", "trimming", "shearing", "snipping"]),
    ("knife", &["cutting", "slicing", "scraping", "trimming"]),
];

/// 顺序即并列时的优先级
const WORKSHOP_PHASES: &[(&str, &[&str])] = &[
    (ASSEMBLY_PHASE, &["screwdriver", "wrench", "person", "drill"]),
    (MAINTENANCE_PHASE, &["wrench", "screwdriver", "hammer", "person"]),
    (MEASUREMENT_PHASE, &["laptop", "phone", "person"]),
    (CUTTING_PHASE, &["scissors", "knife", "saw", "person"]),
    (QUALITY_CONTROL, &["laptop", "person", "phone"]),
    (SETUP_PHASE, &["person", "laptop", "tools"]),
];

const WORKSHOP_TOOL_PAIRS: &[(&[&str], &str)] = &[
    (&["screwdriver", "wrench"], "Assembly work"),
    (&["hammer", "drill"], "Construction work"),
    (&["scissors", "knife"], "Cutting operations"),
    (&["laptop", "phone"], "Digital documentation"),
];

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl AffordanceCatalog {
    /// 车间场景的默认规则表
    pub fn workshop() -> Self {
        let affordances = WORKSHOP_AFFORDANCES
            .iter()
            .map(|(label, actions)| (label.to_string(), strings(actions)))
            .collect();

        let phases = WORKSHOP_PHASES
            .iter()
            .map(|(name, expected)| PhaseTemplate {
                name: name.to_string(),
                expected: strings(expected),
            })
            .collect();

        let tool_pairs = WORKSHOP_TOOL_PAIRS
            .iter()
            .map(|(objects, activity)| CombinationRule {
                objects: strings(objects),
                activity: activity.to_string(),
            })
            .collect();

        let next_steps = [
            (
                ASSEMBLY_PHASE,
                "1. Verify component alignment 2. Check torque specifications 3. Follow assembly sequence",
            ),
            (
                MAINTENANCE_PHASE,
                "1. Power down equipment 2. Follow lockout procedures 3. Inspect components",
            ),
            (
                QUALITY_CONTROL,
                "1. Document measurements 2. Compare to specifications 3. Record findings",
            ),
        ]
        .into_iter()
        .map(|(phase, text)| (phase.to_string(), text.to_string()))
        .collect();

        Self {
            affordances,
            generic_affordances: strings(&["handling", "moving", "using"]),
            phases,
            fallback_phase: GENERAL_WORK_PHASE.to_string(),
            empty_phase: UNKNOWN_PHASE.to_string(),
            tool_pairs,
            person_label: "person".to_string(),
            person_confidence: 0.9,
            pair_confidence: 0.8,
            dangerous_tools: strings(&["drill", "hammer", "knife", "saw"]),
            safety_equipment: strings(&["gloves", "safety glasses", "mask", "hard hat"]),
            interference_pair: ("laptop".to_string(), "drill".to_string()),
            next_steps,
            default_next_steps: "Continue with standard operating procedures for current task"
                .to_string(),
            empty_summary:
                "No objects detected. Please ensure good lighting and clear view of workspace."
                    .to_string(),
            empty_next_steps: "Position objects clearly in view for analysis.".to_string(),
        }
    }

    /// 追加或覆盖某个标签的动作列表
    pub fn with_affordance(mut self, label: &str, actions: &[&str]) -> Self {
        self.affordances.insert(label.to_string(), strings(actions));
        self
    }

    /// 在目录末尾追加阶段模板（并列时排在已有阶段之后）
    pub fn with_phase(mut self, name: &str, expected: &[&str]) -> Self {
        self.phases.push(PhaseTemplate {
            name: name.to_string(),
            expected: strings(expected),
        });
        self
    }

    /// 清空阶段模板
    pub fn without_phases(mut self) -> Self {
        self.phases.clear();
        self
    }

    /// 查询阶段对应的下一步建议，未登记的阶段使用默认文本
    pub fn next_steps_for(&self, phase: &str) -> &str {
        self.next_steps
            .get(phase)
            .map(String::as_str)
            .unwrap_or(&self.default_next_steps)
    }
}

impl Default for AffordanceCatalog {
    fn default() -> Self {
        Self::workshop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workshop_catalog_shape() {
        let catalog = AffordanceCatalog::workshop();
        assert_eq!(catalog.affordances.len(), 12);
        assert_eq!(catalog.phases.len(), 6);
        assert_eq!(catalog.tool_pairs.len(), 4);
        assert_eq!(catalog.phases[0].name, ASSEMBLY_PHASE);
        assert_eq!(catalog.phases[5].name, SETUP_PHASE);
    }

    #[test]
    fn test_next_steps_lookup() {
        let catalog = AffordanceCatalog::workshop();
        assert!(catalog.next_steps_for(ASSEMBLY_PHASE).contains("torque"));
        assert!(catalog.next_steps_for(MAINTENANCE_PHASE).contains("lockout"));
        assert!(catalog.next_steps_for(QUALITY_CONTROL).contains("Record findings"));
        // 其余阶段共用默认文本
        assert_eq!(
            catalog.next_steps_for(CUTTING_PHASE),
            catalog.next_steps_for(GENERAL_WORK_PHASE)
        );
        assert_eq!(
            catalog.next_steps_for(SETUP_PHASE),
            "Continue with standard operating procedures for current task"
        );
    }

    #[test]
    fn test_builder_extensions() {
        let catalog = AffordanceCatalog::workshop()
            .with_affordance("clamp", &["clamping", "holding"])
            .with_phase("WELDING_PHASE", &["welding machine", "mask"]);
        assert_eq!(catalog.affordances["clamp"], vec!["clamping", "holding"]);
        assert_eq!(catalog.phases.last().map(|p| p.name.as_str()), Some("WELDING_PHASE"));
        assert!(AffordanceCatalog::workshop().without_phases().phases.is_empty());
    }
}
