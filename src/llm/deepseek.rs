//! DeepSeek API 客户端（OpenAI 兼容格式）
//!
//! - Base URL: https://api.deepseek.com
//! - 模型: deepseek-chat

use crate::config::LlmSection;
use crate::llm::OpenAiClient;

pub const DEEPSEEK_BASE_URL: &str = "https://api.deepseek.com";
pub const DEEPSEEK_CHAT: &str = "deepseek-chat";

/// 创建 DeepSeek 客户端；未配置 [llm] base_url 时使用官方端点
///
/// 模型名沿用 [llm] model，若仍是 OpenAI 默认值则换成 `deepseek-chat`
pub fn create_deepseek_client(cfg: &LlmSection, api_key: &str) -> OpenAiClient {
    let model = if cfg.model.starts_with("gpt-") {
        DEEPSEEK_CHAT
    } else {
        cfg.model.as_str()
    };
    let base = cfg.base_url.as_deref().unwrap_or(DEEPSEEK_BASE_URL);

    OpenAiClient::new(Some(base), model, Some(api_key))
        .with_generation(cfg.max_tokens, cfg.temperature)
}
