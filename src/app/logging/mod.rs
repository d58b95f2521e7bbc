//! 日志模块

pub mod setup;

pub use setup::init_logging;
