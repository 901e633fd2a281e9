//! 可供性理论引擎（Gibson affordance）
//!
//! 根据检测到的物体标签推断可执行动作、物体组合、任务阶段与安全异常，并生成引导文本。

pub mod catalog;
pub mod engine;
pub mod matching;
pub mod types;

pub use catalog::{AffordanceCatalog, CombinationRule, PhaseTemplate};
pub use engine::AffordanceEngine;
pub use types::{Guidance, ObjectCombination, GENERAL_WORK_PHASE, UNKNOWN_PHASE};
