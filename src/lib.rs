//! Shopfloor - 制造车间场景理解服务
//!
//! 模块划分：
//! - **affordance**: 可供性规则引擎（物体用途、组合、任务阶段、异常与下一步）
//! - **analysis**: 图像分析流水线、PPE 评估、标注图存储与内存历史
//! - **api**: axum HTTP 接口
//! - **config**: 应用配置加载（TOML + 环境变量）
//! - **core**: 错误类型
//! - **detection**: 图像解码、制造业词表、检测器抽象、去重与标注
//! - **llm**: 专家分析所用的 LLM 客户端（OpenAI 兼容 / DeepSeek / Mock）
//! - **observability**: tracing 初始化

pub mod affordance;
pub mod analysis;
pub mod api;
pub mod config;
pub mod core;
pub mod detection;
pub mod llm;
pub mod observability;

pub use affordance::{AffordanceEngine, Guidance};
pub use analysis::AnalysisService;
