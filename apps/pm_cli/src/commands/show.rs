// apps/pm_cli/src/commands/show.rs

//! 激活表显示命令

use anyhow::Result;
use clap::Args;
use pm_registry::{is_active_code, ModelRegistry};
use std::path::PathBuf;
use tracing::info;

use super::load_registry;

/// 显示参数
#[derive(Args)]
pub struct ShowArgs {
    /// 配置文件路径
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 以 JSON 位置数组输出
    #[arg(long)]
    pub json: bool,

    /// 只显示已激活的模型
    #[arg(long)]
    pub active_only: bool,
}

/// 执行显示命令
pub fn execute(args: ShowArgs) -> Result<()> {
    let registry = load_registry(args.config.as_deref())?;
    info!(
        active = registry.active_models().count(),
        "=== 物理模型激活表 ==="
    );

    if args.json {
        println!("{}", serde_json::to_string(&registry)?);
        return Ok(());
    }

    print_table(&registry, args.active_only);
    Ok(())
}

fn print_table(registry: &ModelRegistry, active_only: bool) {
    println!("{:>4}  {:<22} {:>5}  {}", "序号", "模型", "代码", "状态");
    for (model, code) in registry.iter() {
        if active_only && !is_active_code(code) {
            continue;
        }
        let status = if is_active_code(code) { "激活" } else { "-" };
        println!("{:>4}  {:<22} {:>5}  {}", model.index(), model.name(), code, status);
    }

    if let Some(variant) = registry.joule_effect() {
        println!("\n焦耳效应变体: {}", variant);
    }
    if let Some(variant) = registry.electric_arcs() {
        println!("电弧变体: {}", variant);
    }
    if let Some(variant) = registry.atmospheric() {
        println!("大气模型选项: {}", variant);
    }
    if registry.active_combustion_models().count() > 1 {
        println!("\n注意: 同时激活了多个燃烧模型");
    }
}
