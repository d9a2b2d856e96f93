// crates/pm_registry/src/lib.rs

//! PhysModel Registry Layer (Layer 1)
//!
//! 物理模型激活注册表：记录本次运行启用了哪些可选物理子模型
//! （燃烧、电磁、可压缩、大气、地下水、凝固、传热、耦合求解器等），
//! 以及多变体模型所选的变体。
//!
//! # 模块概览
//!
//! - [`model_type`]: 封闭的 `ModelType` 枚举，序号即位置偏移
//! - [`registry`]: `ModelRegistry` 标志表与激活代码
//! - [`variant`]: 焦耳效应、电弧、大气模型的强类型变体
//! - [`handle`]: 供旧数值核心使用的稳定句柄
//! - [`validation`]: 可选的代码范围校验钩子
//! - [`ffi`]: C ABI 导出
//! - [`error`]: 错误类型
//!
//! # 层级架构
//!
//! ```text
//! Layer 3: pm_cli       ─> 查看/校验配置
//! Layer 2: pm_config    ─> JSON 配置 -> set()
//! Layer 1: pm_registry  ─> ModelRegistry (本层)
//! ```
//!
//! # 示例
//!
//! ```
//! use pm_registry::prelude::*;
//!
//! let mut registry = ModelRegistry::initialize();
//! let handle = registry.export_stable_handle();
//!
//! registry.set(ModelType::CombustionCoal, 0);
//! let coal = unsafe { handle.read(ModelType::CombustionCoal.index()) };
//! assert_eq!(coal, 0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod ffi;
pub mod handle;
pub mod model_type;
pub mod registry;
pub mod validation;
pub mod variant;

/// 层级标识
pub const LAYER: u8 = 1;

// 重导出常用类型
pub use error::{RegistryError, RegistryResult};
pub use handle::StableHandle;
pub use model_type::{ModelType, N_MODEL_TYPES};
pub use registry::{is_active_code, ActivationCode, ModelRegistry, INACTIVE};
pub use validation::{AcceptAll, CodeValidator, DocumentedRanges};
pub use variant::{AtmosphericVariant, ElectricArcVariant, JouleEffectVariant};

/// Prelude 模块，包含常用类型
pub mod prelude {
    pub use crate::error::{RegistryError, RegistryResult};
    pub use crate::handle::StableHandle;
    pub use crate::model_type::{ModelType, N_MODEL_TYPES};
    pub use crate::registry::{ActivationCode, ModelRegistry, INACTIVE};
    pub use crate::validation::{CodeValidator, DocumentedRanges};
    pub use crate::variant::{AtmosphericVariant, ElectricArcVariant, JouleEffectVariant};
}
