//! 分析流水线：组合检测、可供性引擎、LLM、存储与内存历史

pub mod history;
pub mod safety;
pub mod service;
pub mod store;
pub mod types;

pub use history::AnalysisHistory;
pub use safety::{assess_safety, safety_items};
pub use service::AnalysisService;
pub use store::ImageStore;
pub use types::{AnalysisRequest, AnalysisResponse, SystemStatus};
