//! 字段格式化测试
//!
//! 覆盖尺寸、角度、转速与计数四种格式化类别

use tooldb_config::app::config::types::{
    FieldFormat, ToolSettings,
};
use tooldb_config::core::format::FieldFormatter;

fn format(kind: FieldFormat, raw: &str) -> String {
    let settings = ToolSettings::default();
    let formatter = FieldFormatter::new(&settings);
    formatter.format_value(kind, raw).unwrap()
}

#[test]
fn dimension_decimal_defaults_to_imperial() {
    assert_eq!(
        format(FieldFormat::Dimension, "0.25"),
        "0.2500 in"
    );
}

#[test]
fn dimension_plain_fraction() {
    assert_eq!(
        format(FieldFormat::Dimension, "3/8"),
        "0.3750 in"
    );
}

#[test]
fn dimension_mixed_fractions() {
    assert_eq!(
        format(FieldFormat::Dimension, "1-1/2"),
        "1.5000 in"
    );
    assert_eq!(
        format(FieldFormat::Dimension, "1 1/2"),
        "1.5000 in"
    );
}

#[test]
fn dimension_unit_suffixes() {
    assert_eq!(
        format(FieldFormat::Dimension, "6.35mm"),
        "6.350 mm"
    );
    assert_eq!(
        format(FieldFormat::Dimension, "1/4\""),
        "0.2500 in"
    );
    assert_eq!(
        format(FieldFormat::Dimension, "2 in"),
        "2.0000 in"
    );
}

#[test]
fn dimension_not_available_passthrough() {
    assert_eq!(
        format(FieldFormat::Dimension, ""),
        "N/A"
    );
    assert_eq!(
        format(FieldFormat::Dimension, "n/a"),
        "N/A"
    );
    assert_eq!(
        format(FieldFormat::Dimension, "N/A"),
        "N/A"
    );
}

#[test]
fn dimension_non_numeric_is_untouched() {
    assert_eq!(
        format(FieldFormat::Dimension, "carbide"),
        "carbide"
    );
}

#[test]
fn dimension_rejects_malformed_numbers() {
    let settings = ToolSettings::default();
    let formatter = FieldFormatter::new(&settings);
    assert!(formatter
        .format_value(FieldFormat::Dimension, "1/0")
        .is_err());
}

#[test]
fn angle_strips_symbols_and_applies_precision() {
    assert_eq!(
        format(FieldFormat::Angle, "45°"),
        "45.0000 °"
    );
    assert_eq!(
        format(FieldFormat::Angle, "118 deg"),
        "118.0000 °"
    );
}

#[test]
fn angle_empty_input_renders_zero() {
    assert_eq!(
        format(FieldFormat::Angle, ""),
        "0.0000 °"
    );
}

#[test]
fn rpm_groups_thousands() {
    assert_eq!(
        format(FieldFormat::Rpm, "24000"),
        "24,000"
    );
    assert_eq!(
        format(FieldFormat::Rpm, "24000 rpm"),
        "24,000"
    );
}

#[test]
fn rpm_unlimited_sentinel_passthrough() {
    assert_eq!(format(FieldFormat::Rpm, "-1"), "-1");
}

#[test]
fn rpm_without_digits_clears_the_value() {
    assert_eq!(format(FieldFormat::Rpm, "rpm"), "");
}

#[test]
fn number_strips_non_digits() {
    assert_eq!(
        format(FieldFormat::Number, "5 flutes"),
        "5"
    );
    assert_eq!(format(FieldFormat::Number, "T12"), "12");
}

#[test]
fn named_lookup_uses_the_format_table() {
    let settings = ToolSettings::default();
    let formatter = FieldFormatter::new(&settings);

    assert_eq!(
        formatter
            .format_named("ToolMaxRPM", "12000")
            .unwrap(),
        "12,000"
    );
    assert_eq!(
        formatter
            .format_named("ToolDiameter", "1/4")
            .unwrap(),
        "0.2500 in"
    );
    // 无格式化条目的字段原样透传
    assert_eq!(
        formatter
            .format_named("ToolName", "1/4 Endmill")
            .unwrap(),
        "1/4 Endmill"
    );
}

#[test]
fn precision_settings_drive_rendering() {
    let mut settings = ToolSettings::default();
    settings.imperial_precision = 2;
    settings.metric_precision = 1;
    settings.angle_precision = 0;
    let formatter = FieldFormatter::new(&settings);

    assert_eq!(
        formatter
            .format_value(FieldFormat::Dimension, "1/4")
            .unwrap(),
        "0.25 in"
    );
    assert_eq!(
        formatter
            .format_value(
                FieldFormat::Dimension,
                "6.35 mm"
            )
            .unwrap(),
        "6.3 mm"
    );
    assert_eq!(
        formatter
            .format_value(FieldFormat::Angle, "45")
            .unwrap(),
        "45 °"
    );
}
