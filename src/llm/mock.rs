//! Mock LLM 客户端（用于测试与离线演示，无需 API）
//!
//! 从提示词中取出 "DETECTED OBJECTS:" 一行，生成固定格式的分析文本。

use async_trait::async_trait;

use super::{LlmClient, Message, Role};

/// Mock 客户端：回显检测到的物体
#[derive(Debug, Default)]
pub struct MockLlmClient;

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(&self, messages: &[Message]) -> Result<String, String> {
        let last_user = messages
            .iter()
            .rev()
            .find(|m| m.role == Role::User)
            .map(|m| m.content.as_str())
            .unwrap_or("");

        let objects = last_user
            .lines()
            .map(str::trim)
            .find_map(|l| l.strip_prefix("DETECTED OBJECTS:"))
            .map(str::trim)
            .unwrap_or("(none)");

        Ok(format!("Mock expert analysis for: {}", objects))
    }

    fn name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_echoes_objects() {
        let prompt = "intro\n    DETECTED OBJECTS: person, drill\n    TASK PHASE: X";
        let reply = MockLlmClient.complete(&[Message::user(prompt)]).await.unwrap();
        assert_eq!(reply, "Mock expert analysis for: person, drill");
    }

    #[tokio::test]
    async fn test_mock_skips_system_turn() {
        let messages = crate::llm::expert_analysis_messages(&["lathe"], "GENERAL_WORK_PHASE");
        let reply = MockLlmClient.complete(&messages).await.unwrap();
        assert_eq!(reply, "Mock expert analysis for: lathe");
    }
}
