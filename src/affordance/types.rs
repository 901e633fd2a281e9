//! 引擎输出类型：组合记录与 Guidance

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// 无信号时的兜底阶段
pub const GENERAL_WORK_PHASE: &str = "GENERAL_WORK_PHASE";
/// 空输入专用阶段
pub const UNKNOWN_PHASE: &str = "UNKNOWN_PHASE";

pub const ASSEMBLY_PHASE: &str = "ASSEMBLY_PHASE";
pub const MAINTENANCE_PHASE: &str = "MAINTENANCE_PHASE";
pub const MEASUREMENT_PHASE: &str = "MEASUREMENT_PHASE";
pub const CUTTING_PHASE: &str = "CUTTING_PHASE";
pub const QUALITY_CONTROL: &str = "QUALITY_CONTROL";
pub const SETUP_PHASE: &str = "SETUP_PHASE";

/// 一组共同出现、可推断出协作活动的物体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectCombination {
    pub objects: Vec<String>,
    pub interaction: String,
    pub confidence: f64,
}

/// 单次请求的推理结果，构造后不再修改
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guidance {
    pub summary: String,
    pub task_phase: String,
    /// 标签 -> 可执行动作；BTreeMap 保证序列化顺序稳定
    pub affordances: BTreeMap<String, Vec<String>>,
    pub object_combinations: Vec<ObjectCombination>,
    pub anomalies: Vec<String>,
    pub next_steps: String,
}
