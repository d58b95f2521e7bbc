use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// 刀具库配置管理工具
#[derive(Parser, Debug)]
#[command(name = "tooldb-config")]
#[command(about = "CNC刀具库应用程序config.yaml的检查与维护工具")]
#[command(version = "0.1.0")]
pub struct Args {
    /// 配置文件路径（默认按工作目录、可执行文件目录查找config.yaml）
    #[arg(short, long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// 子命令
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 校验配置文档并输出验证报告
    Validate,

    /// 输出合并默认值后的生效配置
    Show,

    /// 输出file_paths各项解析后的绝对路径
    Paths,

    /// 写入默认配置文件
    Init {
        /// 覆盖已存在的配置文件
        #[arg(short, long)]
        force: bool,
    },

    /// 按配置的格式化规则渲染一个字段值
    Format {
        /// 字段名（查fields_to_format表）或显式类别
        #[arg(short, long, value_name = "NAME")]
        field: Option<String>,

        /// 显式格式化类别（与--field二选一）
        #[arg(short = 'k', long, value_enum, value_name = "KIND")]
        kind: Option<FormatKind>,

        /// 要格式化的原始值
        #[arg(value_name = "VALUE")]
        value: String,
    },
}

/// 格式化类别
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
pub enum FormatKind {
    /// 尺寸
    Dimension,
    /// 角度
    Angle,
    /// 转速
    Rpm,
    /// 整数计数
    Number,
}

impl From<FormatKind>
    for crate::app::config::types::FieldFormat
{
    fn from(kind: FormatKind) -> Self {
        use crate::app::config::types::FieldFormat;
        match kind {
            FormatKind::Dimension => {
                FieldFormat::Dimension
            }
            FormatKind::Angle => FieldFormat::Angle,
            FormatKind::Rpm => FieldFormat::Rpm,
            FormatKind::Number => FieldFormat::Number,
        }
    }
}
