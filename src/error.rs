//! 错误类型
//!
//! 本地校验错误、后端协作者错误，以及启动阶段的致命错误

use std::fmt;
use std::io;

/// 尚未接入的后端服务
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    Payments,
    Messaging,
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Service::Payments => f.write_str("payment provider"),
            Service::Messaging => f.write_str("messaging service"),
        }
    }
}

/// 用户输入校验错误（在弹窗内直接显示）
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("enter a tip amount or pick a preset")]
    EmptyTipAmount,
    #[error("'{0}' is not a valid amount")]
    InvalidTipAmount(String),
    #[error("tip amount must be greater than zero")]
    NonPositiveTipAmount,
    #[error("message is empty")]
    EmptyMessage,
}

/// 后端协作者错误
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("no {0} is connected in this demo")]
    NotConnected(Service),
}

/// 启动与终端相关的错误
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("invalid config file: {0}")]
    Config(#[from] toml::de::Error),
    #[error("cannot initialise logging: {0}")]
    Logging(String),
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;
