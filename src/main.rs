//! Shopfloor API 服务
//!
//! 入口：初始化日志、加载配置、组装分析流水线并启动 HTTP 服务。

use std::sync::Arc;

use anyhow::Context;
use shopfloor::{analysis::AnalysisService, api::create_router, config::load_config, observability};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 日志：默认 info，可通过 RUST_LOG 覆盖
    observability::init();

    let cfg = load_config(None).unwrap_or_else(|e| {
        tracing::warn!("config load failed, using defaults: {}", e);
        Default::default()
    });

    std::fs::create_dir_all(&cfg.app.static_dir).context("Failed to create static dir")?;

    let service = Arc::new(AnalysisService::from_config(&cfg));
    let app = create_router(service, &cfg.server.cors_origins);

    let addr = format!("{}:{}", cfg.server.host, cfg.server.port);
    tracing::info!(
        "{} listening on http://{}",
        cfg.app.name.as_deref().unwrap_or("shopfloor-api"),
        addr
    );

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
