mod backend;
mod config;
mod error;
mod logging;
mod models;
mod sample;
mod ui;

use std::io;
use std::path::PathBuf;

use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tracing::info;

use crate::config::{default_config_path, default_log_path, load_config};
use crate::error::Result;
use crate::ui::{App, render};

/// Fanz: terminal mockup of a subscription-content platform
#[derive(Parser, Debug)]
#[command(name = "fanz", version)]
struct Cli {
    /// Config file (default: <config dir>/fanz/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log file (default: <data dir>/fanz/fanz.log)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 加载配置
    let config_path = match cli.config {
        Some(path) => path,
        None => default_config_path()?,
    };
    let config = load_config(&config_path)?;

    // 日志写入文件，避免破坏全屏界面
    let log_path = match cli.log_file.or_else(|| config.log.file.clone()) {
        Some(path) => path,
        None => default_log_path()?,
    };
    logging::init(&log_path, &config.log.level)?;
    info!(config = %config_path.display(), "starting");

    // 创建应用状态
    let mut app = App::new(&config);

    // 设置终端
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // 主循环
    let result = run_app(&mut terminal, &mut app);

    // 恢复终端
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    info!("exiting");
    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        let quit = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                ui::handle_key_event(app, key.code)
            }
            Event::Mouse(mouse) => ui::handle_mouse_event(app, mouse),
            _ => false,
        };
        if quit {
            break;
        }
    }
    Ok(())
}
