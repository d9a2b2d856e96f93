// crates/pm_registry/src/error.rs

//! 错误处理模块，定义注册表错误类型
//!
//! 提供 `RegistryError` 枚举和 `RegistryResult` 类型别名。
//!
//! # 错误分类
//!
//! 1. **越界**: 位置索引超出 `0..N_MODEL_TYPES`，属于调用方的编程错误
//! 2. **无效代码**: 仅在启用校验钩子时产生，默认 `set()` 不做任何校验
//! 3. **未知名称**: 配置键无法映射到模型类型
//!
//! # 示例
//!
//! ```
//! use pm_registry::error::{RegistryError, RegistryResult};
//!
//! fn lookup(index: usize) -> RegistryResult<()> {
//!     RegistryError::check_index(index, 16)
//! }
//!
//! assert!(lookup(3).is_ok());
//! assert!(lookup(16).is_err());
//! ```

use thiserror::Error;

use crate::model_type::ModelType;
use crate::registry::ActivationCode;

/// 统一结果类型
pub type RegistryResult<T> = Result<T, RegistryError>;

/// 注册表错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// 位置索引越界
    #[error("模型类型索引越界: {index} 超出范围 0..{len}")]
    IndexOutOfBounds {
        /// 访问的索引
        index: usize,
        /// 上界（模型类型数量）
        len: usize,
    },

    /// 未知的模型名称
    #[error("未知的物理模型: '{name}'")]
    UnknownModel {
        /// 输入的名称
        name: String,
    },

    /// 激活代码不在文档约定的范围内
    #[error("物理模型 {model} 的激活代码无效: {code} ({reason})")]
    InvalidCode {
        /// 模型类型
        model: ModelType,
        /// 被拒绝的代码
        code: ActivationCode,
        /// 拒绝原因
        reason: String,
    },

    /// 序列化布局长度不匹配
    #[error("注册表布局长度不匹配: 期望{expected}, 实际{actual}")]
    LayoutMismatch {
        /// 期望长度
        expected: usize,
        /// 实际长度
        actual: usize,
    },
}

// ========================================================================
// 便捷构造方法
// ========================================================================

impl RegistryError {
    /// 索引越界
    pub fn index_out_of_bounds(index: usize, len: usize) -> Self {
        Self::IndexOutOfBounds { index, len }
    }

    /// 未知模型名称
    pub fn unknown_model(name: impl Into<String>) -> Self {
        Self::UnknownModel { name: name.into() }
    }

    /// 无效激活代码
    pub fn invalid_code(model: ModelType, code: ActivationCode, reason: impl Into<String>) -> Self {
        Self::InvalidCode {
            model,
            code,
            reason: reason.into(),
        }
    }

    /// 布局长度不匹配
    pub fn layout_mismatch(expected: usize, actual: usize) -> Self {
        Self::LayoutMismatch { expected, actual }
    }

    /// 是否属于致命类错误（调用方编程错误）
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::IndexOutOfBounds { .. } | Self::LayoutMismatch { .. })
    }
}

// ========================================================================
// 验证辅助方法
// ========================================================================

impl RegistryError {
    /// 检查位置索引是否在范围内
    #[inline]
    pub fn check_index(index: usize, len: usize) -> RegistryResult<()> {
        if index >= len {
            Err(Self::index_out_of_bounds(index, len))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RegistryError::index_out_of_bounds(20, 16);
        let msg = err.to_string();
        assert!(msg.contains("20"));
        assert!(msg.contains("16"));
    }

    #[test]
    fn test_invalid_code_display() {
        let err = RegistryError::invalid_code(ModelType::JouleEffect, 7, "期望 1..=4");
        let msg = err.to_string();
        assert!(msg.contains("joule_effect"));
        assert!(msg.contains('7'));
    }

    #[test]
    fn test_check_index() {
        assert!(RegistryError::check_index(0, 16).is_ok());
        assert!(RegistryError::check_index(15, 16).is_ok());
        assert_eq!(
            RegistryError::check_index(16, 16),
            Err(RegistryError::IndexOutOfBounds { index: 16, len: 16 })
        );
    }

    #[test]
    fn test_fatal_classification() {
        assert!(RegistryError::index_out_of_bounds(99, 16).is_fatal());
        assert!(!RegistryError::unknown_model("foo").is_fatal());
        assert!(!RegistryError::invalid_code(ModelType::ElectricArcs, 3, "x").is_fatal());
    }
}
