//! 日志初始化
//!
//! 全屏界面下不能写 stderr，日志写入文件

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::{AppError, Result};

/// 初始化 tracing，`RUST_LOG` 优先于配置中的级别
pub fn init(path: &Path, default_level: &str) -> Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}
