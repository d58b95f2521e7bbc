//! 字段格式化的数值类型

/// 尺寸单位制
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionUnit {
    /// 英制（英寸）
    Imperial,
    /// 公制（毫米）
    Metric,
}

impl DimensionUnit {
    /// 从尺寸值的单位后缀判断单位制
    ///
    /// 空后缀、引号和"in"按英制处理，未知后缀同样回退到英制
    pub fn from_suffix(suffix: &str) -> Self {
        let lowered = suffix.to_ascii_lowercase();
        if lowered == "mm" || lowered == "millimeter" {
            DimensionUnit::Metric
        } else {
            DimensionUnit::Imperial
        }
    }

    /// 显示用单位符号
    pub fn symbol(&self) -> &'static str {
        match self {
            DimensionUnit::Imperial => "in",
            DimensionUnit::Metric => "mm",
        }
    }
}

/// 解析后的尺寸值
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DimensionValue {
    pub value: f64,
    pub unit: DimensionUnit,
}
