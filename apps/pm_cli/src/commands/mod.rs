// apps/pm_cli/src/commands/mod.rs

//! 子命令实现

pub mod layout;
pub mod show;
pub mod validate;

use anyhow::{Context, Result};
use pm_config::PhysicalModelConfig;
use pm_registry::ModelRegistry;
use std::path::Path;

/// 加载配置并构建注册表；未给出配置时返回全部未激活的注册表
pub(crate) fn load_registry(config: Option<&Path>) -> Result<ModelRegistry> {
    match config {
        Some(path) => {
            let config = PhysicalModelConfig::from_file(path)
                .with_context(|| format!("无法加载配置文件: {}", path.display()))?;
            Ok(config.build_registry()?)
        }
        None => Ok(ModelRegistry::initialize()),
    }
}
