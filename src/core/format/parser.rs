//! 尺寸值解析
//!
//! 接受整数、小数、普通分数（3/8）以及带连字符或空格的
//! 混合分数（1-1/2、1 1/2），可带单位后缀

use crate::app::error::types::{AppError, Result};

use super::types::{DimensionUnit, DimensionValue};

/// 解析带可选单位后缀的尺寸字符串
///
/// 开头不含数字时返回None，由调用方原样透传
pub fn parse_dimension(
    raw: &str,
) -> Result<Option<DimensionValue>> {
    let trimmed = raw.trim();

    let (number_part, unit_part) =
        split_number_and_unit(trimmed);
    let number_part = number_part.trim();
    if number_part.is_empty() {
        return Ok(None);
    }

    let value = parse_numeric(number_part)?;

    Ok(Some(DimensionValue {
        value,
        unit: DimensionUnit::from_suffix(
            unit_part.trim(),
        ),
    }))
}

/// 解析数字部分，支持分数与混合分数
pub fn parse_numeric(number: &str) -> Result<f64> {
    if number.contains('/') {
        // 带连字符的混合分数：1-1/2
        if let Some((whole, fraction)) =
            number.split_once('-')
        {
            let whole = parse_decimal(whole.trim())?;
            let fraction =
                parse_fraction(fraction.trim())?;
            return Ok(whole + fraction);
        }

        // 带空格的混合分数：1 1/2
        if number.contains(' ') {
            let mut parts = number.split_whitespace();
            let (Some(whole), Some(fraction), None) = (
                parts.next(),
                parts.next(),
                parts.next(),
            ) else {
                return Err(invalid_number(number));
            };
            let whole = parse_decimal(whole)?;
            let fraction = parse_fraction(fraction)?;
            return Ok(whole + fraction);
        }

        return parse_fraction(number);
    }

    parse_decimal(number)
}

/// 从字符串开头分离数字部分与单位后缀
///
/// 数字部分的字符集与尺寸语法一致：数字、空格、点、斜杠、连字符
fn split_number_and_unit(
    value: &str,
) -> (&str, &str) {
    let split_at = value
        .char_indices()
        .find(|(_, c)| {
            !(c.is_ascii_digit()
                || matches!(c, ' ' | '.' | '/' | '-'))
        })
        .map(|(i, _)| i)
        .unwrap_or(value.len());

    value.split_at(split_at)
}

/// 解析分数"a/b"
fn parse_fraction(fraction: &str) -> Result<f64> {
    let (numerator, denominator) = fraction
        .split_once('/')
        .ok_or_else(|| invalid_number(fraction))?;

    let numerator = parse_decimal(numerator.trim())?;
    let denominator =
        parse_decimal(denominator.trim())?;
    if denominator == 0.0 {
        return Err(AppError::format(
            "dimension",
            format!("Zero denominator in '{fraction}'"),
        ));
    }

    Ok(numerator / denominator)
}

fn parse_decimal(value: &str) -> Result<f64> {
    value
        .parse::<f64>()
        .map_err(|_| invalid_number(value))
}

fn invalid_number(value: &str) -> AppError {
    AppError::format(
        "dimension",
        format!("Invalid numeric value '{value}'"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(raw: &str) -> DimensionValue {
        parse_dimension(raw).unwrap().unwrap()
    }

    #[test]
    fn parses_decimal_inches() {
        let dim = parsed("0.25");
        assert!((dim.value - 0.25).abs() < 1e-9);
        assert_eq!(dim.unit, DimensionUnit::Imperial);
    }

    #[test]
    fn parses_plain_fraction() {
        let dim = parsed("3/8");
        assert!((dim.value - 0.375).abs() < 1e-9);
    }

    #[test]
    fn parses_hyphenated_mixed_fraction() {
        let dim = parsed("1-1/2");
        assert!((dim.value - 1.5).abs() < 1e-9);
    }

    #[test]
    fn parses_spaced_mixed_fraction() {
        let dim = parsed("1 1/2 in");
        assert!((dim.value - 1.5).abs() < 1e-9);
        assert_eq!(dim.unit, DimensionUnit::Imperial);
    }

    #[test]
    fn parses_metric_suffix() {
        let dim = parsed("6.35mm");
        assert!((dim.value - 6.35).abs() < 1e-9);
        assert_eq!(dim.unit, DimensionUnit::Metric);
    }

    #[test]
    fn quote_suffix_is_imperial() {
        let dim = parsed("1/4\"");
        assert!((dim.value - 0.25).abs() < 1e-9);
        assert_eq!(dim.unit, DimensionUnit::Imperial);
    }

    #[test]
    fn non_numeric_input_yields_none() {
        assert!(parse_dimension("carbide")
            .unwrap()
            .is_none());
    }

    #[test]
    fn zero_denominator_is_an_error() {
        assert!(parse_dimension("1/0").is_err());
    }
}
