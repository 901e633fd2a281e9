//! LLM 客户端抽象
//!
//! 所有后端（OpenAI 兼容 / DeepSeek / Mock）实现 LlmClient；专家分析只需要非流式完成。

use async_trait::async_trait;

use super::Message;

/// LLM 客户端 trait
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// 非流式完成
    async fn complete(&self, messages: &[Message]) -> Result<String, String>;

    /// 后端名称，用于日志
    fn name(&self) -> &str {
        "llm"
    }
}
