use std::io;
use thiserror::Error;

/// 应用程序错误类型
#[derive(Error, Debug)]
pub enum ToolConfigError {
    /// 文件系统相关错误
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// YAML解析错误
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// 配置错误
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// 验证错误
    #[error("Validation failed: {field} - {message}")]
    Validation { field: String, message: String },

    /// 字段格式化错误
    #[error("Format error: {field} - {message}")]
    Format { field: String, message: String },
}

impl From<anyhow::Error> for ToolConfigError {
    fn from(err: anyhow::Error) -> Self {
        if let Some(io_error) =
            err.downcast_ref::<std::io::Error>()
        {
            return ToolConfigError::Io(
                std::io::Error::new(
                    io_error.kind(),
                    err.to_string(),
                ),
            );
        }
        ToolConfigError::config(err.to_string())
    }
}

impl ToolConfigError {
    /// 创建配置错误
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// 创建验证错误
    pub fn validation(
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// 创建格式化错误
    pub fn format(
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Format {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// 结果类型别名
pub type Result<T> =
    std::result::Result<T, ToolConfigError>;
pub type AppError = ToolConfigError;
