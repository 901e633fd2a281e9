//! 内存中的分析历史（不落盘）

use std::collections::VecDeque;

use tokio::sync::RwLock;

use super::types::AnalysisResponse;

/// 有界历史：新记录追加在尾部，超过上限时淘汰最旧的
#[derive(Debug)]
pub struct AnalysisHistory {
    entries: RwLock<VecDeque<AnalysisResponse>>,
    limit: usize,
}

impl AnalysisHistory {
    pub fn new(limit: usize) -> Self {
        Self {
            entries: RwLock::new(VecDeque::new()),
            limit: limit.max(1),
        }
    }

    pub async fn record(&self, response: AnalysisResponse) {
        let mut entries = self.entries.write().await;
        entries.push_back(response);
        while entries.len() > self.limit {
            entries.pop_front();
        }
    }

    /// 按时间顺序（旧 -> 新）的快照
    pub async fn list(&self) -> Vec<AnalysisResponse> {
        self.entries.read().await.iter().cloned().collect()
    }

    pub async fn get(&self, id: &str) -> Option<AnalysisResponse> {
        self.entries.read().await.iter().find(|r| r.id == id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(id: &str) -> AnalysisResponse {
        AnalysisResponse {
            id: id.to_string(),
            timestamp: "2026-01-01T00:00:00Z".to_string(),
            detected_objects: vec![],
            confidence_scores: vec![],
            task_phase: "UNKNOWN_PHASE".to_string(),
            expert_analysis: String::new(),
            safety_assessment: String::new(),
            next_steps: String::new(),
            image_url: format!("/static/analysis_{}.jpg", id),
            summary: String::new(),
            affordances: Default::default(),
            object_combinations: vec![],
            anomalies: vec![],
        }
    }

    #[tokio::test]
    async fn test_record_and_get() {
        let history = AnalysisHistory::new(10);
        history.record(response("a")).await;
        history.record(response("b")).await;
        assert_eq!(history.len().await, 2);
        assert_eq!(history.get("b").await.map(|r| r.id), Some("b".to_string()));
        assert!(history.get("zzz").await.is_none());
    }

    #[tokio::test]
    async fn test_evicts_oldest() {
        let history = AnalysisHistory::new(2);
        for id in ["a", "b", "c"] {
            history.record(response(id)).await;
        }
        let ids: Vec<String> = history.list().await.into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["b", "c"]);
    }
}
