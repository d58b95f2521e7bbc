//! 配置管理器测试
//!
//! 测试配置文件的加载、保存、默认值合并与往返序列化

use std::fs;

use tempfile::TempDir;
use tooldb_config::app::config::manager::SettingsManager;
use tooldb_config::app::config::types::{
    AppSettings, FieldFormat,
};

const SAMPLE_CONFIG: &str = r#"
wiki_credentials:
  username: toolsmith
  password: hunter2
wiki_settings:
  api_url: http://wiki.shop.local/api.php
  index_page: Tool Library
  page_prefix: Tool
  publish: false
gui_settings:
  default_window_size: 1280x720
  theme: Fusion
file_paths:
  bits_file_location: Tools/Bit
  library_file_location: Tools/Library/Default.fctl
  qr_images_location: qr_images
  bit_images: bit_images
  database_path: tools.db
tool_settings:
  default_shape: drill.fcstd
  imperial_precision: 3
  shape_fields:
    drill.fcstd: [TipAngle, Chipload, Stickout]
  fields_to_format:
    TipAngle: angle
    Chipload: dimension
    Stickout: dimension
qr_code_settings:
  base_url: http://wiki.shop.local/wiki/Tool_Library
  box_size: 10
  border: 2
logging:
  log_file: logs/tooldb.log
  log_level: DEBUG
manifest_settings:
  manifest_dir: manifest
  manifest_file: manifest.json
"#;

#[test]
fn test_config_serialization() {
    // 测试配置序列化
    let settings = AppSettings::default();
    let yaml = serde_yaml::to_string(&settings);
    assert!(
        yaml.is_ok(),
        "Config serialization should work"
    );

    // 测试反序列化
    if let Ok(serialized) = yaml {
        let deserialized: Result<AppSettings, _> =
            serde_yaml::from_str(&serialized);
        assert!(
            deserialized.is_ok(),
            "Config deserialization should work"
        );
    }
}

#[test]
fn test_round_trip_is_lossless() {
    // 往返序列化必须语义等价
    let settings = AppSettings::default();
    let yaml =
        serde_yaml::to_string(&settings).unwrap();
    let reparsed: AppSettings =
        serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(
        settings, reparsed,
        "Round-trip should preserve every group"
    );
}

#[test]
fn test_invalid_config_handling() {
    // 测试无效YAML配置的处理
    let invalid_yaml = r#"
gui_settings:
  default_window_size: [not, a, string
"#;

    let result: Result<AppSettings, _> =
        serde_yaml::from_str(invalid_yaml);
    assert!(
        result.is_err(),
        "Invalid YAML should fail to parse"
    );
}

#[test]
fn test_config_persistence() {
    let temp_dir = TempDir::new().unwrap();
    let config_path =
        temp_dir.path().join("config.yaml");
    fs::write(&config_path, SAMPLE_CONFIG).unwrap();

    let mut manager =
        SettingsManager::with_path(&config_path);
    manager.load().unwrap();

    let settings = manager.settings();
    assert_eq!(
        settings.wiki_credentials.username,
        "toolsmith"
    );
    assert!(!settings.wiki_settings.publish);
    assert_eq!(
        settings.gui_settings.default_window_size,
        "1280x720"
    );
    assert_eq!(
        settings.tool_settings.default_shape,
        "drill.fcstd"
    );
    assert_eq!(
        settings.tool_settings.imperial_precision,
        3
    );
    assert_eq!(
        settings
            .tool_settings
            .fields_to_format
            .get("TipAngle"),
        Some(&FieldFormat::Angle)
    );
    assert_eq!(settings.logging.log_level, "DEBUG");
}

#[test]
fn test_missing_file_writes_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config_path =
        temp_dir.path().join("config.yaml");

    let mut manager =
        SettingsManager::with_path(&config_path);
    manager.load().unwrap();

    assert!(
        config_path.exists(),
        "Loading a missing file should create the default document"
    );
    assert_eq!(
        manager.settings(),
        &AppSettings::default()
    );
}

#[test]
fn test_partial_document_merges_defaults() {
    // 缺失分组回退到默认值
    let temp_dir = TempDir::new().unwrap();
    let config_path =
        temp_dir.path().join("config.yaml");
    fs::write(
        &config_path,
        "gui_settings:\n  default_window_size: 800x600\n",
    )
    .unwrap();

    let mut manager =
        SettingsManager::with_path(&config_path);
    manager.load().unwrap();

    let settings = manager.settings();
    assert_eq!(
        settings.gui_settings.default_window_size,
        "800x600"
    );
    // 未出现的分组保持默认
    assert_eq!(
        settings.tool_settings.default_shape,
        "endmill.fcstd"
    );
    assert_eq!(settings.qr_code_settings.box_size, 10);
}

#[test]
fn test_unknown_top_level_group_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let config_path =
        temp_dir.path().join("config.yaml");
    fs::write(
        &config_path,
        "api:\n  SECRET_KEY: default-key\n",
    )
    .unwrap();

    let mut manager =
        SettingsManager::with_path(&config_path);
    assert!(
        manager.load().is_err(),
        "Unknown top-level keys are configuration errors"
    );
}

#[test]
fn test_save_then_load_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let config_path =
        temp_dir.path().join("config.yaml");

    let mut manager =
        SettingsManager::with_path(&config_path);
    manager.update_window_size(1920, 1080);
    manager.set_publish_enabled(false);
    manager.set_log_level("WARN");
    manager.save().unwrap();

    let mut reloaded =
        SettingsManager::with_path(&config_path);
    reloaded.load().unwrap();

    assert_eq!(
        reloaded
            .settings()
            .gui_settings
            .default_window_size,
        "1920x1080"
    );
    assert!(!reloaded.settings().wiki_settings.publish);
    assert_eq!(
        reloaded.settings().logging.log_level,
        "WARN"
    );
}
