//! LLM 层：专家分析所用的客户端抽象与实现（OpenAI 兼容 / DeepSeek / Mock）

pub mod deepseek;
pub mod message;
pub mod mock;
pub mod openai;
pub mod prompt;
pub mod traits;

use std::sync::Arc;

pub use deepseek::{create_deepseek_client, DEEPSEEK_BASE_URL, DEEPSEEK_CHAT};
pub use message::{Message, Role};
pub use mock::MockLlmClient;
pub use openai::OpenAiClient;
pub use prompt::{expert_analysis_messages, expert_analysis_prompt, EXPERT_PERSONA};
pub use traits::LlmClient;

use crate::config::AppConfig;

/// 根据配置与环境变量选择 LLM 后端
///
/// - `mock`：总是可用
/// - `deepseek`：需要 `DEEPSEEK_API_KEY`（或回落到 `OPENAI_API_KEY`）
/// - `openai`：需要 `OPENAI_API_KEY`
/// - 其它或缺少 Key：返回 None，专家分析回落到规则引擎摘要
pub fn create_llm_from_config(cfg: &AppConfig) -> Option<Arc<dyn LlmClient>> {
    let provider = cfg.llm.provider.to_lowercase();
    let openai_key = std::env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty());

    match provider.as_str() {
        "mock" => {
            tracing::info!("Using Mock LLM for expert analysis");
            Some(Arc::new(MockLlmClient))
        }
        "deepseek" => {
            let key = std::env::var("DEEPSEEK_API_KEY").ok().or(openai_key)?;
            tracing::info!("Using DeepSeek LLM for expert analysis");
            Some(Arc::new(create_deepseek_client(&cfg.llm, &key)))
        }
        "openai" => {
            let Some(key) = openai_key else {
                tracing::warn!("OPENAI_API_KEY not set, expert analysis falls back to summary");
                return None;
            };
            let client = OpenAiClient::new(cfg.llm.base_url.as_deref(), &cfg.llm.model, Some(&key))
                .with_generation(cfg.llm.max_tokens, cfg.llm.temperature);
            tracing::info!("Using OpenAI LLM ({})", client.model());
            Some(Arc::new(client))
        }
        other => {
            tracing::info!("LLM provider '{}' disabled, expert analysis falls back to summary", other);
            None
        }
    }
}
