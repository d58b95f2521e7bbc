//! 配置验证模块
//!
//! 负责检查配置文档的模式约束与各分组之间的一致性

use super::types::AppSettings;

/// 单个验证问题
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub field: String,
    pub message: String,
}

impl ValidationIssue {
    fn new(
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// 验证报告
///
/// 错误表示配置不可用，警告表示数据不一致但不阻止启动
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// 无错误时为真（可以有警告）
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    fn error(
        &mut self,
        field: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.errors
            .push(ValidationIssue::new(field, message));
    }

    fn warning(
        &mut self,
        field: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.warnings
            .push(ValidationIssue::new(field, message));
    }
}

/// 配置验证器
pub struct SettingsValidator;

impl SettingsValidator {
    /// 验证整个配置文档
    pub fn validate(
        settings: &AppSettings,
    ) -> ValidationReport {
        let mut report = ValidationReport::default();

        Self::check_tool_settings(settings, &mut report);
        Self::check_gui_settings(settings, &mut report);
        Self::check_file_paths(settings, &mut report);
        Self::check_qr_code_settings(
            settings,
            &mut report,
        );
        Self::check_logging(settings, &mut report);
        Self::check_manifest_settings(
            settings,
            &mut report,
        );
        Self::check_credentials(settings, &mut report);

        report
    }

    /// 检查刀具设置：默认形状、精度与字段表一致性
    fn check_tool_settings(
        settings: &AppSettings,
        report: &mut ValidationReport,
    ) {
        let tool = &settings.tool_settings;

        if tool.default_shape.is_empty() {
            report.error(
                "tool_settings.default_shape",
                "Default shape cannot be empty",
            );
        } else if !tool
            .shape_fields
            .contains_key(&tool.default_shape)
        {
            report.error(
                "tool_settings.default_shape",
                format!(
                    "Shape '{}' is not listed in shape_fields",
                    tool.default_shape
                ),
            );
        }

        let precisions = [
            (
                "tool_settings.fraction_precision",
                tool.fraction_precision,
            ),
            (
                "tool_settings.imperial_precision",
                tool.imperial_precision,
            ),
            (
                "tool_settings.metric_precision",
                tool.metric_precision,
            ),
            (
                "tool_settings.angle_precision",
                tool.angle_precision,
            ),
        ];
        for (field, value) in precisions {
            if value > 10 {
                report.error(
                    field,
                    format!(
                        "Precision {value} exceeds the supported maximum of 10"
                    ),
                );
            }
        }

        // shape_fields引用的字段缺少格式化条目时发出警告
        // 默认数据本身即存在此类不一致（如CuttingEdgeHeight）
        for (shape, fields) in &tool.shape_fields {
            for field in fields {
                if !tool
                    .fields_to_format
                    .contains_key(field)
                {
                    report.warning(
                        format!(
                            "tool_settings.shape_fields.{shape}"
                        ),
                        format!(
                            "Field '{field}' has no fields_to_format entry"
                        ),
                    );
                }
            }
        }
    }

    /// 检查界面设置：窗口尺寸字符串必须可解析
    fn check_gui_settings(
        settings: &AppSettings,
        report: &mut ValidationReport,
    ) {
        if let Err(e) =
            settings.gui_settings.window_size()
        {
            report.error(
                "gui_settings.default_window_size",
                e.to_string(),
            );
        }

        if settings.gui_settings.theme.is_empty() {
            report.warning(
                "gui_settings.theme",
                "Theme is empty, the host application will fall back to its platform default",
            );
        }
    }

    /// 检查文件路径：所有路径值必须为非空字符串
    fn check_file_paths(
        settings: &AppSettings,
        report: &mut ValidationReport,
    ) {
        for (key, value) in
            settings.file_paths.entries()
        {
            if value.trim().is_empty() {
                report.error(
                    format!("file_paths.{key}"),
                    "Path cannot be empty",
                );
            }
        }
    }

    /// 检查二维码设置
    fn check_qr_code_settings(
        settings: &AppSettings,
        report: &mut ValidationReport,
    ) {
        let qr = &settings.qr_code_settings;

        if qr.box_size == 0 {
            report.error(
                "qr_code_settings.box_size",
                "Box size must be a positive integer",
            );
        }
        if qr.border == 0 {
            report.error(
                "qr_code_settings.border",
                "Border must be a positive integer",
            );
        }
        if qr.base_url.trim().is_empty() {
            report.warning(
                "qr_code_settings.base_url",
                "Base URL is empty, generated QR links will be relative",
            );
        }
    }

    /// 检查日志设置：级别名必须有效，日志文件路径非空
    fn check_logging(
        settings: &AppSettings,
        report: &mut ValidationReport,
    ) {
        let logging = &settings.logging;

        if logging
            .log_level
            .parse::<tracing::Level>()
            .is_err()
        {
            report.error(
                "logging.log_level",
                format!(
                    "Unknown log level '{}', expected one of TRACE, DEBUG, INFO, WARN, ERROR",
                    logging.log_level
                ),
            );
        }

        if logging.log_file.trim().is_empty() {
            report.error(
                "logging.log_file",
                "Path cannot be empty",
            );
        }
    }

    /// 检查清单设置
    fn check_manifest_settings(
        settings: &AppSettings,
        report: &mut ValidationReport,
    ) {
        let manifest = &settings.manifest_settings;

        if manifest.manifest_dir.trim().is_empty() {
            report.error(
                "manifest_settings.manifest_dir",
                "Path cannot be empty",
            );
        }
        if manifest.manifest_file.trim().is_empty() {
            report.error(
                "manifest_settings.manifest_file",
                "Path cannot be empty",
            );
        }
    }

    /// 明文密码提示警告，建议改用外部注入
    fn check_credentials(
        settings: &AppSettings,
        report: &mut ValidationReport,
    ) {
        if !settings
            .wiki_credentials
            .password
            .is_empty()
        {
            report.warning(
                "wiki_credentials.password",
                "Plaintext password stored in the config file, prefer injecting credentials from the environment",
            );
        }
    }
}
