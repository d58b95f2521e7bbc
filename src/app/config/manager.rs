//! 配置管理模块
//! 负责加载、保存和管理应用程序配置

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use super::paths::SettingsPaths;
use super::types::AppSettings;

/// 配置管理器
pub struct SettingsManager {
    paths: SettingsPaths,
    settings: AppSettings,
}

impl SettingsManager {
    /// 创建新的配置管理器
    ///
    /// 按默认顺序查找config.yaml
    pub fn new() -> Result<Self> {
        let paths = SettingsPaths::new()?;

        Ok(Self {
            paths,
            settings: AppSettings::default(),
        })
    }

    /// 使用显式指定的配置文件路径创建配置管理器
    pub fn with_path(
        config_file: impl Into<PathBuf>,
    ) -> Self {
        Self {
            paths: SettingsPaths::with_file(config_file),
            settings: AppSettings::default(),
        }
    }

    /// 加载配置文件
    ///
    /// 配置文件不存在时写入默认配置并继续
    pub fn load(&mut self) -> Result<()> {
        let config_file = self.paths.config_file();

        if config_file.exists() {
            let content = fs::read_to_string(config_file)
                .with_context(|| {
                    format!(
                        "无法读取配置文件: {:?}",
                        config_file
                    )
                })?;

            self.settings =
                serde_yaml::from_str(&content)
                    .with_context(|| {
                        format!(
                            "无法解析配置文件: {:?}",
                            config_file
                        )
                    })?;

            tracing::info!(
                "配置文件加载成功: {:?}",
                config_file
            );
        } else {
            tracing::info!(
                "配置文件不存在，使用默认配置: {:?}",
                config_file
            );
            self.save()?; // 创建默认配置文件
        }
        Ok(())
    }

    /// 保存配置文件
    pub fn save(&self) -> Result<()> {
        let content =
            serde_yaml::to_string(&self.settings)
                .context("无法序列化配置")?;

        let config_file = self.paths.config_file();
        if let Some(parent) = config_file.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(
                    || {
                        format!(
                            "无法创建配置目录: {:?}",
                            parent
                        )
                    },
                )?;
            }
        }

        fs::write(config_file, content).with_context(
            || {
                format!(
                    "无法写入配置文件: {:?}",
                    config_file
                )
            },
        )?;

        tracing::info!(
            "配置文件保存成功: {:?}",
            config_file
        );
        Ok(())
    }

    /// 获取配置
    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    /// 获取路径管理器
    pub fn paths(&self) -> &SettingsPaths {
        &self.paths
    }

    /// 更新默认窗口尺寸
    pub fn update_window_size(
        &mut self,
        width: u32,
        height: u32,
    ) {
        self.settings.gui_settings.default_window_size =
            format!("{width}x{height}");
    }

    /// 更新wiki发布开关
    pub fn set_publish_enabled(&mut self, enabled: bool) {
        self.settings.wiki_settings.publish = enabled;
    }

    /// 更新日志级别
    pub fn set_log_level(
        &mut self,
        level: impl Into<String>,
    ) {
        self.settings.logging.log_level = level.into();
    }

    /// 序列化当前生效的配置（缺失分组已合并默认值）
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.settings)
            .context("无法序列化配置")
    }
}
