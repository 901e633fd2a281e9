//! 可供性与任务阶段推理引擎
//!
//! 输入：上游检测去重后的标签序列；输出：`Guidance`。
//! 全部操作为纯函数：同一输入多次调用结果一致，任意输入（含空序列、空字符串、未知标签）都不会失败。

use std::collections::BTreeMap;
use std::sync::Arc;

use super::catalog::{AffordanceCatalog, INTERFERENCE_WARNING, SAFETY_WARNING};
use super::matching::{contains_label, joined_contains, template_label_present};
use super::types::{Guidance, ObjectCombination};

/// 规则引擎：持有只读目录的共享引用，可在任意多个并发调用者之间克隆
#[derive(Debug, Clone)]
pub struct AffordanceEngine {
    catalog: Arc<AffordanceCatalog>,
}

impl AffordanceEngine {
    pub fn new(catalog: Arc<AffordanceCatalog>) -> Self {
        Self { catalog }
    }

    /// 每个不同标签 -> 动作列表；未知标签使用通用动作
    pub fn identify_affordances<S: AsRef<str>>(
        &self,
        objects: &[S],
    ) -> BTreeMap<String, Vec<String>> {
        objects
            .iter()
            .map(|o| {
                let label = o.as_ref();
                let actions = self
                    .catalog
                    .affordances
                    .get(label)
                    .unwrap_or(&self.catalog.generic_affordances)
                    .clone();
                (label.to_string(), actions)
            })
            .collect()
    }

    /// 两轮独立规则：人员与其它物体配对，然后是固定工具对。
    ///
    /// 两轮之间不去重，同一工具可能同时出现在人员配对与工具对中。
    pub fn find_object_combinations<S: AsRef<str>>(&self, objects: &[S]) -> Vec<ObjectCombination> {
        let catalog = &self.catalog;
        let mut combinations = Vec::new();

        if contains_label(objects, &catalog.person_label) {
            let mut seen: Vec<&str> = Vec::new();
            for o in objects {
                let label = o.as_ref();
                if label == catalog.person_label || seen.contains(&label) {
                    continue;
                }
                seen.push(label);
                combinations.push(ObjectCombination {
                    objects: vec![catalog.person_label.clone(), label.to_string()],
                    interaction: format!("Person using {}", label),
                    confidence: catalog.person_confidence,
                });
            }
        }

        for rule in &catalog.tool_pairs {
            if rule.objects.iter().all(|t| contains_label(objects, t)) {
                combinations.push(ObjectCombination {
                    objects: rule.objects.clone(),
                    interaction: rule.activity.clone(),
                    confidence: catalog.pair_confidence,
                });
            }
        }

        combinations
    }

    /// 模板命中率打分，取严格最大者；并列时目录中靠前的阶段胜出，全零回落到兜底阶段
    pub fn infer_task_phase<S: AsRef<str>>(&self, objects: &[S]) -> String {
        let mut best: Option<(&str, f64)> = None;

        for phase in &self.catalog.phases {
            let score = phase_score(&phase.expected, objects);
            if best.map_or(true, |(_, top)| score > top) {
                best = Some((phase.name.as_str(), score));
            }
        }

        match best {
            Some((name, score)) if score > 0.0 => name.to_string(),
            _ => self.catalog.fallback_phase.clone(),
        }
    }

    /// 安全与流程异常，按检查顺序输出
    pub fn detect_anomalies<S: AsRef<str>>(&self, objects: &[S]) -> Vec<String> {
        let catalog = &self.catalog;
        let mut anomalies = Vec::new();

        let has_dangerous = catalog
            .dangerous_tools
            .iter()
            .any(|t| contains_label(objects, t));
        let has_safety = catalog
            .safety_equipment
            .iter()
            .any(|s| joined_contains(objects, s));
        if has_dangerous && !has_safety {
            anomalies.push(SAFETY_WARNING.to_string());
        }

        let (device, tool) = &catalog.interference_pair;
        if contains_label(objects, device) && contains_label(objects, tool) {
            anomalies.push(INTERFERENCE_WARNING.to_string());
        }

        anomalies
    }

    /// 顶层入口：空输入返回固定的「未检测到物体」结果
    pub fn generate_guidance<S: AsRef<str>>(&self, objects: &[S]) -> Guidance {
        let catalog = &self.catalog;

        if objects.is_empty() {
            return Guidance {
                summary: catalog.empty_summary.clone(),
                task_phase: catalog.empty_phase.clone(),
                affordances: BTreeMap::new(),
                object_combinations: Vec::new(),
                anomalies: Vec::new(),
                next_steps: catalog.empty_next_steps.clone(),
            };
        }

        let affordances = self.identify_affordances(objects);
        let object_combinations = self.find_object_combinations(objects);
        let task_phase = self.infer_task_phase(objects);
        let anomalies = self.detect_anomalies(objects);

        let summary = if contains_label(objects, &catalog.person_label) {
            format!(
                "Worker detected with {} objects. Current phase: {}.",
                objects.len() - 1,
                task_phase
            )
        } else {
            format!(
                "{} objects detected in workspace. Phase: {}.",
                objects.len(),
                task_phase
            )
        };
        let next_steps = catalog.next_steps_for(&task_phase).to_string();

        tracing::debug!(
            phase = %task_phase,
            combinations = object_combinations.len(),
            anomalies = anomalies.len(),
            "guidance generated"
        );

        Guidance {
            summary,
            task_phase,
            affordances,
            object_combinations,
            anomalies,
            next_steps,
        }
    }
}

impl Default for AffordanceEngine {
    fn default() -> Self {
        Self::new(Arc::new(AffordanceCatalog::workshop()))
    }
}

/// 模板命中数 / 模板长度；空模板计 0
fn phase_score<S: AsRef<str>>(expected: &[String], objects: &[S]) -> f64 {
    if expected.is_empty() {
        return 0.0;
    }
    let hits = expected
        .iter()
        .filter(|req| template_label_present(objects, req))
        .count();
    hits as f64 / expected.len() as f64
}
