// apps/pm_cli/src/commands/validate.rs

//! 配置验证命令

use anyhow::{bail, Context, Result};
use clap::Args;
use pm_config::PhysicalModelConfig;
use std::path::PathBuf;
use tracing::{error, info};

/// 验证参数
#[derive(Args)]
pub struct ValidateArgs {
    /// 配置文件路径
    #[arg(short, long)]
    pub config: PathBuf,

    /// 严格模式（按文档范围校验激活代码）
    #[arg(long)]
    pub strict: bool,
}

/// 执行验证命令
pub fn execute(args: ValidateArgs) -> Result<()> {
    info!("=== 物理模型配置验证 ===");
    println!("检查配置文件: {}", args.config.display());

    let content = std::fs::read_to_string(&args.config)
        .with_context(|| format!("无法读取配置文件: {}", args.config.display()))?;

    let mut config: PhysicalModelConfig = match serde_json::from_str(&content) {
        Ok(c) => c,
        Err(e) => {
            error!("JSON 解析错误: {}", e);
            bail!("配置文件格式无效");
        }
    };
    if args.strict {
        config.strict = true;
    }

    if let Err(e) = config.validate() {
        error!("{}", e);
        bail!("配置验证失败");
    }

    let registry = config.build_registry()?;
    println!("  ✓ 配置有效，{} 个物理子模型激活", registry.active_models().count());
    for model in registry.active_models() {
        println!("    - {} = {}", model, registry.get(model));
    }
    Ok(())
}
