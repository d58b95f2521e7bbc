use std::path::Path;

use anyhow::{Context, Result as AnyResult};

use crate::app::config::types::WindowSize;
use crate::app::error::types::{AppError, Result};

/// 解析"宽x高"格式的窗口尺寸字符串
pub fn parse_window_size(
    value: &str,
) -> Result<WindowSize> {
    let mut parts = value.trim().split('x');

    let (Some(width_str), Some(height_str), None) = (
        parts.next(),
        parts.next(),
        parts.next(),
    ) else {
        return Err(AppError::validation(
            "default_window_size",
            format!(
                "Expected <width>x<height>, got '{value}'"
            ),
        ));
    };

    let width: u32 =
        width_str.trim().parse().map_err(|_| {
            AppError::validation(
                "default_window_size",
                format!("Invalid width '{width_str}'"),
            )
        })?;
    let height: u32 =
        height_str.trim().parse().map_err(|_| {
            AppError::validation(
                "default_window_size",
                format!("Invalid height '{height_str}'"),
            )
        })?;

    if width == 0 || height == 0 {
        return Err(AppError::validation(
            "default_window_size",
            "Width and height must be positive",
        ));
    }

    Ok(WindowSize { width, height })
}

/// 确保目录存在，不存在则创建
pub fn ensure_directory(path: &Path) -> AnyResult<()> {
    if !path.exists() {
        std::fs::create_dir_all(path).with_context(
            || {
                format!(
                    "无法创建目录: {}",
                    path.display()
                )
            },
        )?;
    }
    Ok(())
}

/// 千位分组格式化整数
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::new();

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}
