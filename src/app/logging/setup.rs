//! 日志系统设置

use std::fs::OpenOptions;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::app::config::types::LoggingSettings;
use crate::utils::helpers::ensure_directory;

/// 根据配置初始化日志系统
///
/// RUST_LOG优先于配置文件中的log_level；
/// log_file非空时追加写入日志文件
pub fn init_logging(
    settings: &LoggingSettings,
) -> Result<()> {
    let level =
        settings.log_level.to_ascii_lowercase();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "tooldb_config={level},warn"
            ))
        });

    let registry = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .with(filter);

    if settings.log_file.trim().is_empty() {
        registry.init();
        return Ok(());
    }

    let log_path =
        std::path::Path::new(&settings.log_file);
    if let Some(parent) = log_path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .with_context(|| {
            format!(
                "无法打开日志文件: {}",
                log_path.display()
            )
        })?;

    registry
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(Arc::new(log_file)),
        )
        .init();

    Ok(())
}
