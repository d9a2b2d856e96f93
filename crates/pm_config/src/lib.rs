// crates/pm_config/src/lib.rs

//! PhysModel Config Layer (Layer 2)
//!
//! 配置层：读取 JSON 配置文件，在计算开始前把各物理模型的激活代码
//! 写入 [`ModelRegistry`](pm_registry::ModelRegistry)。
//!
//! # 模块概览
//!
//! - [`model_config`]: `PhysicalModelConfig` 配置结构与应用逻辑
//! - [`error`]: 配置错误类型
//!
//! # 配置文件示例
//!
//! ```json
//! {
//!   "models": { "joule_effect": 2, "combustion_coal": 0 },
//!   "strict": true
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod model_config;

/// 层级标识
pub const LAYER: u8 = 2;

// 重导出核心类型
pub use error::ConfigError;
pub use model_config::PhysicalModelConfig;
