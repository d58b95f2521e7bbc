//! 刀具库配置管理库
//!
//! CNC刀具库应用程序config.yaml的类型化模型与维护工具
//!
//! ## 功能特性
//!
//! - config.yaml的类型化加载与保存
//! - 配置文档模式与一致性验证
//! - 按精度设置格式化刀具字段值
//! - 相对路径解析
//! - 统一错误处理
//!
//! ## 使用示例
//!
//! ```no_run
//! use tooldb_config::app::config::manager::SettingsManager;
//! use tooldb_config::app::config::validator::SettingsValidator;
//!
//! // 创建配置管理器并加载config.yaml
//! let mut manager = SettingsManager::new()?;
//! manager.load()?;
//!
//! // 验证配置文档
//! let report = SettingsValidator::validate(manager.settings());
//! println!("{} errors, {} warnings", report.errors.len(), report.warnings.len());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod app;
pub mod cli;
pub mod core;
pub mod utils;

// 重新导出主要功能
pub use app::config::manager::SettingsManager;
pub use app::config::types::{
    AppSettings, FieldFormat, WindowSize,
};
pub use app::config::validator::{
    SettingsValidator, ValidationReport,
};
pub use app::error::types::{Result, ToolConfigError};
pub use crate::core::format::FieldFormatter;
