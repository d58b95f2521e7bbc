//! 字段值格式化引擎
//!
//! 按`tool_settings`中的格式化表与精度设置渲染刀具字段，
//! 类别包括尺寸、角度、转速与整数计数

pub mod parser;
pub mod types;

use crate::app::config::types::{
    FieldFormat, ToolSettings,
};
use crate::app::error::types::{AppError, Result};
use crate::utils::helpers::group_thousands;

use parser::parse_dimension;
use types::DimensionUnit;

/// 字段格式化器，借用刀具设置中的精度配置
pub struct FieldFormatter<'a> {
    tool_settings: &'a ToolSettings,
}

impl<'a> FieldFormatter<'a> {
    /// 创建新的字段格式化器
    pub fn new(tool_settings: &'a ToolSettings) -> Self {
        Self { tool_settings }
    }

    /// 按字段名查表格式化
    ///
    /// 无格式化条目的字段原样透传
    pub fn format_named(
        &self,
        field_name: &str,
        raw: &str,
    ) -> Result<String> {
        match self
            .tool_settings
            .fields_to_format
            .get(field_name)
        {
            Some(format) => {
                self.format_value(*format, raw)
            }
            None => Ok(raw.to_string()),
        }
    }

    /// 按给定类别格式化原始值
    pub fn format_value(
        &self,
        format: FieldFormat,
        raw: &str,
    ) -> Result<String> {
        match format {
            FieldFormat::Dimension => {
                self.format_dimension(raw)
            }
            FieldFormat::Angle => self.format_angle(raw),
            FieldFormat::Rpm => self.format_rpm(raw),
            FieldFormat::Number => {
                Ok(strip_non_digits(raw))
            }
        }
    }

    /// 格式化尺寸值
    ///
    /// 空值和N/A渲染为"N/A"，无数字开头的值原样透传
    fn format_dimension(
        &self,
        raw: &str,
    ) -> Result<String> {
        let trimmed = raw.trim();
        if trimmed.is_empty()
            || trimmed.eq_ignore_ascii_case("n/a")
        {
            return Ok("N/A".to_string());
        }

        let Some(dimension) = parse_dimension(trimmed)?
        else {
            return Ok(raw.to_string());
        };

        let formatted = match dimension.unit {
            DimensionUnit::Imperial => format!(
                "{:.prec$} {}",
                dimension.value,
                dimension.unit.symbol(),
                prec = self.tool_settings.imperial_precision
                    as usize,
            ),
            DimensionUnit::Metric => format!(
                "{:.prec$} {}",
                dimension.value,
                dimension.unit.symbol(),
                prec = self.tool_settings.metric_precision
                    as usize,
            ),
        };
        Ok(formatted)
    }

    /// 格式化角度值，剔除非数字字符后按角度精度渲染
    fn format_angle(&self, raw: &str) -> Result<String> {
        let digits: String = raw
            .chars()
            .filter(|c| {
                c.is_ascii_digit() || *c == '.'
            })
            .collect();

        let number = if digits.is_empty() {
            0.0
        } else {
            digits.parse::<f64>().map_err(|_| {
                AppError::format(
                    "angle",
                    format!(
                        "Invalid angle value '{raw}'"
                    ),
                )
            })?
        };

        Ok(format!(
            "{:.prec$} °",
            number,
            prec = self.tool_settings.angle_precision
                as usize,
        ))
    }

    /// 格式化转速值
    ///
    /// -1作为"无限制"哨兵值透传，其余剔除非数字后千位分组
    fn format_rpm(&self, raw: &str) -> Result<String> {
        if raw.trim() == "-1" {
            return Ok("-1".to_string());
        }

        let digits = strip_non_digits(raw);
        if digits.is_empty() {
            return Ok(String::new());
        }

        let number =
            digits.parse::<u64>().map_err(|_| {
                AppError::format(
                    "rpm",
                    format!("Invalid RPM value '{raw}'"),
                )
            })?;

        Ok(group_thousands(number))
    }
}

/// 剔除所有非数字字符
fn strip_non_digits(value: &str) -> String {
    value
        .chars()
        .filter(char::is_ascii_digit)
        .collect()
}
