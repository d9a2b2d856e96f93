// apps/pm_cli/src/commands/layout.rs

//! 位置布局显示命令
//!
//! 输出旧数值核心按偏移访问标志表时使用的顺序。

use anyhow::Result;
use clap::Args;
use pm_registry::{ActivationCode, ModelType, N_MODEL_TYPES};

/// 布局参数
#[derive(Args)]
pub struct LayoutArgs {
    /// 输出 1 起始的偏移（Fortran 风格）
    #[arg(long)]
    pub one_based: bool,
}

/// 执行布局命令
pub fn execute(args: LayoutArgs) -> Result<()> {
    let base = usize::from(args.one_based);
    println!(
        "标志表: {} 个条目, 每项 {} 字节",
        N_MODEL_TYPES,
        std::mem::size_of::<ActivationCode>()
    );
    for model in ModelType::ALL {
        println!(
            "{:>4}  {:<22} {}",
            model.index() + base,
            model.name(),
            model.description()
        );
    }
    Ok(())
}
