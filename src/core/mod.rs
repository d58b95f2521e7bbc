//! 核心功能模块

pub mod format;
