//! 专家分析提示词

use crate::llm::Message;

/// system 轮：专家身份
pub const EXPERT_PERSONA: &str = "You are a PhD-level manufacturing engineer specialising in \
industrial workshops, process engineering and workplace safety.";

/// 以制造工程专家身份，结合检测物体与任务阶段生成结构化分析
pub fn expert_analysis_prompt<S: AsRef<str>>(objects: &[S], task_phase: &str) -> String {
    let listed = objects
        .iter()
        .map(|o| o.as_ref())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "As a PhD-level manufacturing engineer, analyze this industrial workshop image showing {listed}.

Focus on:
1. Specific manufacturing processes (machining, assembly, welding)
2. Workplace safety compliance and PPE usage
3. Equipment utilization and workflow efficiency
4. Quality control implications

Consider the affordance relationships between tools, workers, and tasks.

DETECTED OBJECTS: {listed}
TASK PHASE: {task_phase}

Provide expert-level analysis covering:
1. Manufacturing Process Identification:
   - What specific processes are being performed?
   - What equipment capabilities are being utilized?

2. Safety Protocol Assessment:
   - PPE compliance status
   - Potential safety hazards or improvements

3. Efficiency Optimization Recommendations:
   - Workflow improvements
   - Equipment utilization suggestions

4. Quality Assurance Considerations:
   - Process control measures
   - Inspection and verification needs

Keep response detailed but structured."
    )
}

/// system 身份 + user 分析请求
pub fn expert_analysis_messages<S: AsRef<str>>(objects: &[S], task_phase: &str) -> Vec<Message> {
    vec![
        Message::system(EXPERT_PERSONA),
        Message::user(expert_analysis_prompt(objects, task_phase)),
    ]
}
