// crates/pm_registry/src/variant.rs

//! 多变体模型的子选项
//!
//! 焦耳效应、电弧和大气模型的正激活代码还兼任子变体选择器。
//! 这里给出这些代码的强类型视图，注册表内部仍按整数存储。

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::registry::ActivationCode;

/// 焦耳效应变体
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(i32)]
pub enum JouleEffectVariant {
    /// 实数电势
    RealPotential = 1,
    /// 复数电势
    ComplexPotential = 2,
    /// 实数电势 + 特定边界条件
    RealPotentialSpecificBc = 3,
    /// 复数电势 + 特定边界条件
    ComplexPotentialSpecificBc = 4,
}

impl JouleEffectVariant {
    /// 全部变体
    pub const ALL: [Self; 4] = [
        Self::RealPotential,
        Self::ComplexPotential,
        Self::RealPotentialSpecificBc,
        Self::ComplexPotentialSpecificBc,
    ];

    /// 对应的激活代码
    #[inline]
    pub const fn code(self) -> ActivationCode {
        self as ActivationCode
    }

    /// 从激活代码解析，未激活或未知代码返回 `None`
    pub fn from_code(code: ActivationCode) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.code() == code)
    }

    /// 变体名称
    pub fn name(&self) -> &'static str {
        match self {
            Self::RealPotential => "real_potential",
            Self::ComplexPotential => "complex_potential",
            Self::RealPotentialSpecificBc => "real_potential_specific_bc",
            Self::ComplexPotentialSpecificBc => "complex_potential_specific_bc",
        }
    }

    /// 是否使用复数电势
    #[inline]
    pub fn is_complex(&self) -> bool {
        matches!(self, Self::ComplexPotential | Self::ComplexPotentialSpecificBc)
    }

    /// 是否使用特定边界条件
    #[inline]
    pub fn has_specific_boundary_conditions(&self) -> bool {
        matches!(self, Self::RealPotentialSpecificBc | Self::ComplexPotentialSpecificBc)
    }
}

impl fmt::Display for JouleEffectVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 电弧磁场计算方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(i32)]
pub enum ElectricArcVariant {
    /// 由安培定理求磁场
    AmpereTheorem = 1,
    /// 由矢量势求磁场
    VectorPotential = 2,
}

impl ElectricArcVariant {
    /// 全部变体
    pub const ALL: [Self; 2] = [Self::AmpereTheorem, Self::VectorPotential];

    /// 对应的激活代码
    #[inline]
    pub const fn code(self) -> ActivationCode {
        self as ActivationCode
    }

    /// 从激活代码解析
    pub fn from_code(code: ActivationCode) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.code() == code)
    }

    /// 变体名称
    pub fn name(&self) -> &'static str {
        match self {
            Self::AmpereTheorem => "ampere_theorem",
            Self::VectorPotential => "vector_potential",
        }
    }
}

impl fmt::Display for ElectricArcVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 大气模型选项
///
/// 代码 0 也表示激活（常密度），未激活仍为 `-1`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(i32)]
pub enum AtmosphericVariant {
    /// 常密度
    ConstantDensity = 0,
    /// 干空气
    Dry = 1,
    /// 湿空气
    Humid = 2,
}

impl AtmosphericVariant {
    /// 全部变体
    pub const ALL: [Self; 3] = [Self::ConstantDensity, Self::Dry, Self::Humid];

    /// 对应的激活代码
    #[inline]
    pub const fn code(self) -> ActivationCode {
        self as ActivationCode
    }

    /// 从激活代码解析
    pub fn from_code(code: ActivationCode) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.code() == code)
    }

    /// 变体名称
    pub fn name(&self) -> &'static str {
        match self {
            Self::ConstantDensity => "constant_density",
            Self::Dry => "dry",
            Self::Humid => "humid",
        }
    }

    /// 密度是否随温度变化
    #[inline]
    pub fn is_variable_density(&self) -> bool {
        *self > Self::ConstantDensity
    }
}

impl fmt::Display for AtmosphericVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::INACTIVE;

    #[test]
    fn test_joule_codes() {
        assert_eq!(JouleEffectVariant::RealPotential.code(), 1);
        assert_eq!(JouleEffectVariant::ComplexPotentialSpecificBc.code(), 4);
        assert_eq!(JouleEffectVariant::from_code(2), Some(JouleEffectVariant::ComplexPotential));
        assert_eq!(JouleEffectVariant::from_code(INACTIVE), None);
        assert_eq!(JouleEffectVariant::from_code(5), None);
    }

    #[test]
    fn test_joule_flags() {
        assert!(JouleEffectVariant::ComplexPotential.is_complex());
        assert!(!JouleEffectVariant::RealPotentialSpecificBc.is_complex());
        assert!(JouleEffectVariant::RealPotentialSpecificBc.has_specific_boundary_conditions());
        assert!(!JouleEffectVariant::RealPotential.has_specific_boundary_conditions());
    }

    #[test]
    fn test_arc_codes() {
        assert_eq!(ElectricArcVariant::from_code(1), Some(ElectricArcVariant::AmpereTheorem));
        assert_eq!(ElectricArcVariant::from_code(2), Some(ElectricArcVariant::VectorPotential));
        assert_eq!(ElectricArcVariant::from_code(0), None);
    }

    #[test]
    fn test_atmospheric_codes() {
        assert_eq!(AtmosphericVariant::from_code(0), Some(AtmosphericVariant::ConstantDensity));
        assert!(AtmosphericVariant::Humid.is_variable_density());
        assert!(!AtmosphericVariant::ConstantDensity.is_variable_density());
        assert_eq!(AtmosphericVariant::Dry.to_string(), "dry");
    }
}
