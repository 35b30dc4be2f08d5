use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::AccountSettings;
use crate::ui::pages::Page;

/// 配置文件结构 (~/.config/fanz/config.toml)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub log: LogConfig,
    pub account: AccountSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub start_page: Page,
    /// 终端宽度达到该值时侧栏常驻显示
    pub wide_breakpoint: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            start_page: Page::Feed,
            wide_breakpoint: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

/// 获取目录路径 (如 ~/.config/fanz/)，不存在时创建
fn app_dir(base: Option<PathBuf>) -> io::Result<PathBuf> {
    let dir = base
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "cannot locate user directory"))?
        .join("fanz");

    fs::create_dir_all(&dir)?;

    Ok(dir)
}

/// 默认配置文件路径
pub fn default_config_path() -> io::Result<PathBuf> {
    Ok(app_dir(dirs::config_dir())?.join("config.toml"))
}

/// 默认日志文件路径
pub fn default_log_path() -> io::Result<PathBuf> {
    Ok(app_dir(dirs::data_dir())?.join("fanz.log"))
}

/// 从TOML文件加载配置，文件不存在时使用默认值
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

pub fn parse_config(content: &str) -> Result<Config> {
    Ok(toml::from_str(content)?)
}
