// crates/pm_registry/src/validation.rs

//! 激活代码校验钩子
//!
//! `set()` 默认不校验代码范围。需要更严格行为的调用方可以通过
//! [`ModelRegistry::try_set`](crate::ModelRegistry::try_set) 传入校验器。
//! 这里只检查单个条目的取值范围，不检查模型之间的组合关系。

use std::ops::RangeInclusive;

use crate::error::{RegistryError, RegistryResult};
use crate::model_type::ModelType;
use crate::registry::{ActivationCode, INACTIVE};

/// 激活代码校验器
pub trait CodeValidator {
    /// 校验单个条目的代码
    fn validate(&self, model: ModelType, code: ActivationCode) -> RegistryResult<()>;
}

/// 不做任何校验
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl CodeValidator for AcceptAll {
    fn validate(&self, _model: ModelType, _code: ActivationCode) -> RegistryResult<()> {
        Ok(())
    }
}

/// 按文档约定的取值范围校验
///
/// - 焦耳效应: 1..=4
/// - 电弧: 1..=2
/// - 大气: 0..=2
/// - 其它模型: 0..=`max_code`
///
/// 任何模型都接受 `-1`。
#[derive(Debug, Clone, Copy)]
pub struct DocumentedRanges {
    max_code: ActivationCode,
}

impl DocumentedRanges {
    /// 默认的通用上限
    pub const DEFAULT_MAX_CODE: ActivationCode = 9;

    /// 创建校验器
    pub fn new() -> Self {
        Self {
            max_code: Self::DEFAULT_MAX_CODE,
        }
    }

    /// 设置单变体模型的通用上限
    pub fn with_max_code(mut self, max_code: ActivationCode) -> Self {
        self.max_code = max_code.max(0);
        self
    }

    /// 某模型允许的激活代码范围
    pub fn range_for(&self, model: ModelType) -> RangeInclusive<ActivationCode> {
        match model {
            ModelType::JouleEffect => 1..=4,
            ModelType::ElectricArcs => 1..=2,
            ModelType::Atmospheric => 0..=2,
            _ => 0..=self.max_code,
        }
    }
}

impl Default for DocumentedRanges {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeValidator for DocumentedRanges {
    fn validate(&self, model: ModelType, code: ActivationCode) -> RegistryResult<()> {
        if code == INACTIVE {
            return Ok(());
        }
        let range = self.range_for(model);
        if range.contains(&code) {
            Ok(())
        } else {
            Err(RegistryError::invalid_code(
                model,
                code,
                format!("期望 -1 或 {}..={}", range.start(), range.end()),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_all() {
        assert!(AcceptAll.validate(ModelType::JouleEffect, -42).is_ok());
    }

    #[test]
    fn test_inactive_always_valid() {
        let ranges = DocumentedRanges::default();
        for model in ModelType::ALL {
            assert!(ranges.validate(model, INACTIVE).is_ok());
        }
    }

    #[test]
    fn test_joule_range() {
        let ranges = DocumentedRanges::default();
        assert!(ranges.validate(ModelType::JouleEffect, 0).is_err());
        for code in 1..=4 {
            assert!(ranges.validate(ModelType::JouleEffect, code).is_ok());
        }
        assert!(ranges.validate(ModelType::JouleEffect, 5).is_err());
    }

    #[test]
    fn test_arc_and_atmo_ranges() {
        let ranges = DocumentedRanges::default();
        assert!(ranges.validate(ModelType::ElectricArcs, 2).is_ok());
        assert!(ranges.validate(ModelType::ElectricArcs, 3).is_err());
        assert!(ranges.validate(ModelType::Atmospheric, 0).is_ok());
        assert!(ranges.validate(ModelType::Atmospheric, 3).is_err());
    }

    #[test]
    fn test_generic_max_code() {
        let ranges = DocumentedRanges::new().with_max_code(3);
        assert!(ranges.validate(ModelType::Compressible, 3).is_ok());
        assert!(ranges.validate(ModelType::Compressible, 4).is_err());
        assert!(ranges.validate(ModelType::Compressible, -2).is_err());
    }

    #[test]
    fn test_error_carries_model() {
        let err = DocumentedRanges::default()
            .validate(ModelType::ElectricArcs, 7)
            .unwrap_err();
        match err {
            RegistryError::InvalidCode { model, code, .. } => {
                assert_eq!(model, ModelType::ElectricArcs);
                assert_eq!(code, 7);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
