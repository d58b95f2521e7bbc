//! 配置管理模块
//!
//! 提供配置文档的加载、保存、路径解析与验证功能

pub mod manager;
pub mod paths;
/// 配置类型定义
pub mod types;
pub mod validator;
