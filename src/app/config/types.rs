//! 配置类型定义
//!
//! 刀具库应用程序config.yaml的类型化结构

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::app::error::types::Result;
use crate::utils::helpers::parse_window_size;

/// 字段格式化类别
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum FieldFormat {
    /// 尺寸（英制/公制）
    Dimension,
    /// 角度
    Angle,
    /// 主轴转速
    Rpm,
    /// 整数计数
    Number,
}

impl FieldFormat {
    /// 返回配置文件中使用的小写名称
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldFormat::Dimension => "dimension",
            FieldFormat::Angle => "angle",
            FieldFormat::Rpm => "rpm",
            FieldFormat::Number => "number",
        }
    }
}

impl std::fmt::Display for FieldFormat {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// wiki登录凭据
///
/// 明文存储是源数据格式的遗留问题，验证器会对非空密码发出警告
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Default,
)]
#[serde(default, deny_unknown_fields)]
pub struct WikiCredentials {
    pub username: String,
    pub password: String,
}

/// wiki发布设置
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize,
)]
#[serde(default, deny_unknown_fields)]
pub struct WikiSettings {
    pub api_url: String,
    pub index_page: String,
    pub page_prefix: String,
    pub publish: bool,
}

impl Default for WikiSettings {
    fn default() -> Self {
        Self {
            api_url: "http://127.0.0.1/api.php"
                .to_string(),
            index_page: "Tool Library".to_string(),
            page_prefix: "Tool".to_string(),
            publish: true,
        }
    }
}

/// 窗口尺寸，由"宽x高"字符串解析而来
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSize {
    pub width: u32,
    pub height: u32,
}

/// 界面设置
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize,
)]
#[serde(default, deny_unknown_fields)]
pub struct GuiSettings {
    pub default_window_size: String,
    pub theme: String,
}

impl GuiSettings {
    /// 解析`default_window_size`字符串
    pub fn window_size(&self) -> Result<WindowSize> {
        parse_window_size(&self.default_window_size)
    }
}

impl Default for GuiSettings {
    fn default() -> Self {
        Self {
            default_window_size: "1559x780".to_string(),
            theme: "Fusion".to_string(),
        }
    }
}

/// 文件路径设置，均为相对于配置文件所在目录的路径
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize,
)]
#[serde(default, deny_unknown_fields)]
pub struct FilePaths {
    pub bits_file_location: String,
    pub library_file_location: String,
    pub qr_images_location: String,
    pub bit_images: String,
    pub database_path: String,
}

impl Default for FilePaths {
    fn default() -> Self {
        Self {
            bits_file_location: "Tools/Bit".to_string(),
            library_file_location:
                "Tools/Library/Default.fctl".to_string(),
            qr_images_location: "qr_images".to_string(),
            bit_images: "bit_images".to_string(),
            database_path: "tools.db".to_string(),
        }
    }
}

impl FilePaths {
    /// 按配置文件中的键名枚举所有路径值
    pub fn entries(&self) -> [(&'static str, &str); 5] {
        [
            (
                "bits_file_location",
                self.bits_file_location.as_str(),
            ),
            (
                "library_file_location",
                self.library_file_location.as_str(),
            ),
            (
                "qr_images_location",
                self.qr_images_location.as_str(),
            ),
            ("bit_images", self.bit_images.as_str()),
            ("database_path", self.database_path.as_str()),
        ]
    }
}

/// 刀具设置：默认形状、精度与字段表
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize,
)]
#[serde(default, deny_unknown_fields)]
pub struct ToolSettings {
    pub default_shape: String,
    pub fraction_precision: u8,
    pub imperial_precision: u8,
    pub metric_precision: u8,
    pub angle_precision: u8,
    /// 形状 -> 该形状要求的字段名列表（有序）
    pub shape_fields: BTreeMap<String, Vec<String>>,
    /// 字段名 -> 格式化类别
    pub fields_to_format: BTreeMap<String, FieldFormat>,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            default_shape: "endmill.fcstd".to_string(),
            fraction_precision: 3,
            imperial_precision: 4,
            metric_precision: 3,
            angle_precision: 4,
            shape_fields: default_shape_fields(),
            fields_to_format: default_fields_to_format(),
        }
    }
}

/// 二维码链接设置
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize,
)]
#[serde(default, deny_unknown_fields)]
pub struct QrCodeSettings {
    pub base_url: String,
    pub box_size: u32,
    pub border: u32,
}

impl Default for QrCodeSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1/wiki/Tool_Library"
                .to_string(),
            box_size: 10,
            border: 2,
        }
    }
}

/// 日志设置
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize,
)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingSettings {
    pub log_file: String,
    pub log_level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            log_file: "logs/tooldb.log".to_string(),
            log_level: "INFO".to_string(),
        }
    }
}

/// 清单文件设置
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize,
)]
#[serde(default, deny_unknown_fields)]
pub struct ManifestSettings {
    pub manifest_dir: String,
    pub manifest_file: String,
}

impl Default for ManifestSettings {
    fn default() -> Self {
        Self {
            manifest_dir: "manifest".to_string(),
            manifest_file: "manifest.json".to_string(),
        }
    }
}

/// 应用程序配置结构，对应config.yaml的顶层分组
///
/// 顶层未知键视为配置错误，缺失分组回退到默认值
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Default,
)]
#[serde(default, deny_unknown_fields)]
pub struct AppSettings {
    pub wiki_credentials: WikiCredentials,
    pub wiki_settings: WikiSettings,
    pub gui_settings: GuiSettings,
    pub file_paths: FilePaths,
    pub tool_settings: ToolSettings,
    pub qr_code_settings: QrCodeSettings,
    pub logging: LoggingSettings,
    pub manifest_settings: ManifestSettings,
}

/// 形状模板文件的默认字段表
fn default_shape_fields(
) -> BTreeMap<String, Vec<String>> {
    let entries: [(&str, &[&str]); 8] = [
        (
            "endmill.fcstd",
            &[
                "Chipload",
                "CuttingEdgeHeight",
                "SpindleDirection",
                "Stickout",
            ],
        ),
        (
            "ballend.fcstd",
            &["Chipload", "CuttingEdgeHeight", "Stickout"],
        ),
        (
            "v-bit.fcstd",
            &[
                "CuttingEdgeAngle",
                "TipDiameter",
                "CuttingEdgeHeight",
                "Stickout",
            ],
        ),
        (
            "torus.fcstd",
            &[
                "TorusRadius",
                "CuttingEdgeHeight",
                "Chipload",
                "SpindleDirection",
                "Stickout",
            ],
        ),
        (
            "drill.fcstd",
            &["TipAngle", "Chipload", "Stickout"],
        ),
        (
            "slittingsaw.fcstd",
            &["BladeThickness", "CapDiameter", "CapHeight"],
        ),
        (
            "probe.fcstd",
            &["ShaftDiameter", "SpindlePower"],
        ),
        (
            "roundover.fcstd",
            &[
                "CuttingRadius",
                "CuttingEdgeHeight",
                "TipDiameter",
                "Chipload",
                "Stickout",
            ],
        ),
    ];

    entries
        .into_iter()
        .map(|(shape, fields)| {
            (
                shape.to_string(),
                fields
                    .iter()
                    .map(|f| f.to_string())
                    .collect(),
            )
        })
        .collect()
}

/// 数值字段的默认格式化表
fn default_fields_to_format(
) -> BTreeMap<String, FieldFormat> {
    use FieldFormat::{Angle, Dimension, Number, Rpm};

    let entries: [(&str, FieldFormat); 19] = [
        ("SuggestedMaxDOC", Dimension),
        ("ToolShankSize", Dimension),
        ("OAL", Dimension),
        ("LOC", Dimension),
        ("ToolDiameter", Dimension),
        ("Chipload", Dimension),
        ("TipDiameter", Dimension),
        ("TorusRadius", Dimension),
        ("ShaftDiameter", Dimension),
        ("BladeThickness", Dimension),
        ("CapDiameter", Dimension),
        ("CapHeight", Dimension),
        ("Stickout", Dimension),
        ("CuttingRadius", Dimension),
        ("CuttingEdgeAngle", Angle),
        ("TipAngle", Angle),
        ("ToolMaxRPM", Rpm),
        ("ToolNumber", Number),
        ("Flutes", Number),
    ];

    entries
        .into_iter()
        .map(|(field, format)| {
            (field.to_string(), format)
        })
        .collect()
}
