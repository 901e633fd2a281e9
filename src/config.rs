//! 应用配置：从 config/default.toml 与环境变量加载
//!
//! 加载顺序：先读 TOML 文件，再用环境变量 `SHOPFLOOR__*` 覆盖（双下划线表示嵌套，如 `SHOPFLOOR__SERVER__PORT=9000`）。

use std::path::PathBuf;

use serde::Deserialize;

/// 应用配置根（对应 config/default.toml 的顶层）
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub app: AppSection,
    pub server: ServerSection,
    pub detection: DetectionSection,
    pub llm: LlmSection,
}

/// [app] 段：标注图目录与历史条数上限
#[derive(Debug, Clone, Deserialize)]
pub struct AppSection {
    pub name: Option<String>,
    /// 标注图写入目录，同时挂载为 /static
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
    /// 内存中保留的分析记录数，超出时淘汰最旧的
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

impl Default for AppSection {
    fn default() -> Self {
        Self {
            name: None,
            static_dir: default_static_dir(),
            history_limit: default_history_limit(),
        }
    }
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

fn default_history_limit() -> usize {
    500
}

/// [server] 段：监听地址与 CORS 白名单
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSection {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: default_cors_origins(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_cors_origins() -> Vec<String> {
    vec!["http://localhost:3000".into()]
}

/// [detection] 段：检测后端、阈值
#[derive(Debug, Clone, Deserialize)]
pub struct DetectionSection {
    /// http / static
    #[serde(default = "default_detection_provider")]
    pub provider: String,
    #[serde(default = "default_detection_endpoint")]
    pub endpoint: String,
    /// 推理服务端初筛阈值
    #[serde(default = "default_query_threshold")]
    pub query_threshold: f64,
    /// 本地保留阈值（严格大于）
    #[serde(default = "default_confidence_threshold")]
    pub confidence_threshold: f64,
    #[serde(default = "default_detection_timeout")]
    pub timeout_secs: u64,
    /// provider = static 时返回的固定标签
    #[serde(default)]
    pub static_labels: Vec<String>,
}

impl Default for DetectionSection {
    fn default() -> Self {
        Self {
            provider: default_detection_provider(),
            endpoint: default_detection_endpoint(),
            query_threshold: default_query_threshold(),
            confidence_threshold: default_confidence_threshold(),
            timeout_secs: default_detection_timeout(),
            static_labels: Vec::new(),
        }
    }
}

fn default_detection_provider() -> String {
    "http".to_string()
}

fn default_detection_endpoint() -> String {
    "http://127.0.0.1:8001/detect".to_string()
}

fn default_query_threshold() -> f64 {
    0.1
}

fn default_confidence_threshold() -> f64 {
    0.25
}

fn default_detection_timeout() -> u64 {
    30
}

/// [llm] 段：后端选择、生成参数与超时
#[derive(Debug, Clone, Deserialize)]
pub struct LlmSection {
    /// openai / deepseek / mock / none
    #[serde(default = "default_provider")]
    pub provider: String,
    #[serde(default = "default_model")]
    pub model: String,
    pub base_url: Option<String>,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default)]
    pub timeouts: LlmTimeoutsSection,
}

impl Default for LlmSection {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            model: default_model(),
            base_url: None,
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            timeouts: LlmTimeoutsSection::default(),
        }
    }
}

fn default_provider() -> String {
    "openai".to_string()
}

fn default_model() -> String {
    "gpt-4".to_string()
}

fn default_max_tokens() -> u32 {
    500
}

fn default_temperature() -> f32 {
    0.7
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmTimeoutsSection {
    #[serde(default = "default_request_timeout")]
    pub request: u64,
}

impl Default for LlmTimeoutsSection {
    fn default() -> Self {
        Self {
            request: default_request_timeout(),
        }
    }
}

fn default_request_timeout() -> u64 {
    60
}

/// 从 config 目录加载配置，环境变量 SHOPFLOOR__* 可覆盖
///
/// 1. 按顺序查找 config/default.toml、../config/default.toml、default.toml，找到则作为第一源
/// 2. 若传入 config_path 且文件存在，则追加该文件（可覆盖前面的键）
/// 3. 最后叠加环境变量 SHOPFLOOR__*（双下划线表示嵌套键）
pub fn load_config(config_path: Option<PathBuf>) -> Result<AppConfig, config::ConfigError> {
    let mut builder = config::Config::builder();

    let default_names = ["config/default", "../config/default", "default"];
    for name in default_names {
        let path = format!("{}.toml", name);
        if std::path::Path::new(&path).exists() {
            builder = builder.add_source(config::File::with_name(name).required(false));
            break;
        }
    }

    if let Some(ref path) = config_path {
        if path.exists() {
            builder = builder.add_source(config::File::from(path.clone()).required(false));
        }
    }

    builder = builder.add_source(
        config::Environment::with_prefix("SHOPFLOOR")
            .separator("__")
            .try_parsing(true),
    );

    let c = builder.build()?;
    c.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.server.port, 8000);
        assert_eq!(cfg.server.cors_origins, vec!["http://localhost:3000"]);
        assert_eq!(cfg.detection.confidence_threshold, 0.25);
        assert_eq!(cfg.detection.query_threshold, 0.1);
        assert_eq!(cfg.llm.model, "gpt-4");
        assert_eq!(cfg.llm.max_tokens, 500);
        assert_eq!(cfg.llm.timeouts.request, 60);
        assert_eq!(cfg.app.history_limit, 500);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(
            &path,
            "[server]\nport = 9100\n\n[detection]\nprovider = \"static\"\nstatic_labels = [\"person\", \"drill\"]\n\n[llm]\nprovider = \"mock\"\n",
        )
        .unwrap();

        let cfg = load_config(Some(path)).unwrap();
        assert_eq!(cfg.server.port, 9100);
        assert_eq!(cfg.detection.provider, "static");
        assert_eq!(cfg.detection.static_labels, vec!["person", "drill"]);
        assert_eq!(cfg.llm.provider, "mock");
        // 未出现的段使用默认值
        assert_eq!(cfg.app.history_limit, 500);
    }
}
