//! 配置路径管理模块
//! 负责定位config.yaml并解析其中的相对路径

use std::path::{Path, PathBuf};

use path_absolutize::Absolutize;

use crate::app::error::types::{
    Result, ToolConfigError,
};

/// 配置文件名，约定位于程序根目录
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// 配置路径管理器
pub struct SettingsPaths {
    config_file: PathBuf,
}

impl SettingsPaths {
    /// 创建新的配置路径管理器
    ///
    /// 按工作目录、可执行文件目录的顺序查找config.yaml
    pub fn new() -> Result<Self> {
        let config_file = Self::locate_config_file()?;

        Ok(Self { config_file })
    }

    /// 使用显式指定的配置文件路径
    pub fn with_file(config_file: impl Into<PathBuf>) -> Self {
        Self {
            config_file: config_file.into(),
        }
    }

    /// 获取配置文件路径
    pub fn config_file(&self) -> &Path {
        &self.config_file
    }

    /// 配置文件所在目录，file_paths中的相对路径以此为基准
    pub fn base_dir(&self) -> &Path {
        self.config_file
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
    }

    /// 将配置中的相对路径解析为绝对路径
    pub fn resolve(&self, relative: &str) -> Result<PathBuf> {
        let path = Path::new(relative);
        let resolved = path
            .absolutize_from(self.base_dir())
            .map_err(|e| {
                ToolConfigError::config(format!(
                    "Failed to resolve path '{relative}': {e}"
                ))
            })?;
        Ok(resolved.into_owned())
    }

    /// 获取程序根目录的配置文件路径
    fn locate_config_file() -> Result<PathBuf> {
        // 首先尝试从当前工作目录查找
        let current_dir = std::env::current_dir()
            .map_err(|e| {
                ToolConfigError::config(format!(
                    "Failed to get current directory: {e}"
                ))
            })?;

        let config_file =
            current_dir.join(CONFIG_FILE_NAME);

        // 如果工作目录没有，尝试从可执行文件目录查找
        if !config_file.exists() {
            if let Ok(exe_path) = std::env::current_exe() {
                if let Some(exe_dir) = exe_path.parent() {
                    let exe_config_file =
                        exe_dir.join(CONFIG_FILE_NAME);
                    if exe_config_file.exists() {
                        tracing::info!(
                            "在可执行文件目录找到配置文件: {:?}",
                            exe_config_file
                        );
                        return Ok(exe_config_file);
                    }
                }
            }
        }

        tracing::info!(
            "使用配置文件路径: {:?}",
            config_file
        );
        Ok(config_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_relative_path_against_base_dir() {
        let paths = SettingsPaths::with_file(
            "/opt/tooldb/config.yaml",
        );
        let resolved =
            paths.resolve("Tools/Bit").unwrap();
        assert_eq!(
            resolved,
            PathBuf::from("/opt/tooldb/Tools/Bit")
        );
    }

    #[test]
    fn base_dir_falls_back_to_current_dir() {
        let paths =
            SettingsPaths::with_file("config.yaml");
        assert_eq!(paths.base_dir(), Path::new("."));
    }
}
