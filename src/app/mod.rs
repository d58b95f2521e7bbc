//! 应用程序基础模块：配置、错误处理与日志

pub mod config;
pub mod error;
pub mod logging;
