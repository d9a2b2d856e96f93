// apps/pm_cli/src/main.rs

//! PhysModel 命令行界面
//!
//! 查看、校验物理模型配置，并输出旧数值核心使用的位置布局。
//!
//! # 架构层级
//!
//! 本模块属于 **Layer 3: Application**，只通过 `PhysicalModelConfig`
//! 和 `ModelRegistry` 访问下层。

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// PhysModel 物理模型配置工具
#[derive(Parser)]
#[command(name = "pm_cli")]
#[command(author = "PhysModel Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Physical model activation registry tool", long_about = None)]
struct Cli {
    /// 日志级别 (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 显示激活表
    Show(commands::show::ShowArgs),
    /// 验证配置
    Validate(commands::validate::ValidateArgs),
    /// 显示位置布局
    Layout(commands::layout::LayoutArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 初始化日志
    let level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Show(args) => commands::show::execute(args),
        Commands::Validate(args) => commands::validate::execute(args),
        Commands::Layout(args) => commands::layout::execute(args),
    }
}
