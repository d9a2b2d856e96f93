// crates/pm_registry/src/model_type.rs

//! 物理模型类型枚举
//!
//! `ModelType` 是一个封闭、编译期固定的枚举，序号从 0 连续到
//! `N_MODEL_TYPES - 1`。序号即旧数值核心访问标志表时使用的位置偏移，
//! 因此变体顺序不可调整。
//!
//! # 内存布局
//!
//! ```text
//! 偏移  模型
//!  0    physical_model_flag  (全局标志，非物理模型)
//!  1-5  燃烧: 3pt / slfm / ebu / lw / coal
//!  6-7  电磁: joule_effect / electric_arcs
//!  8-15 compressible / atmospheric / cooling_towers / gas_mix /
//!       groundwater / solidification / heat_transfer / neptune_cfd
//! ```
//!
//! # 示例
//!
//! ```
//! use pm_registry::model_type::{ModelType, N_MODEL_TYPES};
//!
//! assert_eq!(ModelType::PhysicalModelFlag.index(), 0);
//! assert_eq!(ModelType::NeptuneCfd.index(), N_MODEL_TYPES - 1);
//! assert_eq!("joule_effect".parse::<ModelType>().unwrap(), ModelType::JouleEffect);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RegistryError;

/// 模型类型数量
pub const N_MODEL_TYPES: usize = 16;

/// 物理模型类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(i32)]
pub enum ModelType {
    /// 全局特定物理标志（汇总标志，不对应具体模型）
    PhysicalModelFlag = 0,
    /// 三点燃烧模型
    #[serde(rename = "combustion_3pt")]
    Combustion3pt = 1,
    /// 稳态层流火焰面模型
    CombustionSlfm = 2,
    /// EBU 燃烧模型
    CombustionEbu = 3,
    /// Libby-Williams 燃烧模型
    CombustionLw = 4,
    /// 煤粉燃烧模型
    CombustionCoal = 5,
    /// 焦耳效应
    JouleEffect = 6,
    /// 电弧
    ElectricArcs = 7,
    /// 可压缩流
    Compressible = 8,
    /// 大气流动
    Atmospheric = 9,
    /// 冷却塔
    CoolingTowers = 10,
    /// 气体混合
    GasMix = 11,
    /// 地下水流动
    Groundwater = 12,
    /// 凝固过程
    Solidification = 13,
    /// 固体传热
    HeatTransfer = 14,
    /// 耦合求解器模式
    NeptuneCfd = 15,
}

impl ModelType {
    /// 全部模型类型，按序号排列
    pub const ALL: [ModelType; N_MODEL_TYPES] = [
        Self::PhysicalModelFlag,
        Self::Combustion3pt,
        Self::CombustionSlfm,
        Self::CombustionEbu,
        Self::CombustionLw,
        Self::CombustionCoal,
        Self::JouleEffect,
        Self::ElectricArcs,
        Self::Compressible,
        Self::Atmospheric,
        Self::CoolingTowers,
        Self::GasMix,
        Self::Groundwater,
        Self::Solidification,
        Self::HeatTransfer,
        Self::NeptuneCfd,
    ];

    /// 燃烧模型组
    pub const COMBUSTION: [ModelType; 5] = [
        Self::Combustion3pt,
        Self::CombustionSlfm,
        Self::CombustionEbu,
        Self::CombustionLw,
        Self::CombustionCoal,
    ];

    /// 电磁模型组
    pub const ELECTROMAGNETIC: [ModelType; 2] = [Self::JouleEffect, Self::ElectricArcs];

    /// 位置偏移
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// 从位置偏移构造
    #[inline]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// 配置键名（snake_case，与序列化名称一致）
    pub fn name(&self) -> &'static str {
        match self {
            Self::PhysicalModelFlag => "physical_model_flag",
            Self::Combustion3pt => "combustion_3pt",
            Self::CombustionSlfm => "combustion_slfm",
            Self::CombustionEbu => "combustion_ebu",
            Self::CombustionLw => "combustion_lw",
            Self::CombustionCoal => "combustion_coal",
            Self::JouleEffect => "joule_effect",
            Self::ElectricArcs => "electric_arcs",
            Self::Compressible => "compressible",
            Self::Atmospheric => "atmospheric",
            Self::CoolingTowers => "cooling_towers",
            Self::GasMix => "gas_mix",
            Self::Groundwater => "groundwater",
            Self::Solidification => "solidification",
            Self::HeatTransfer => "heat_transfer",
            Self::NeptuneCfd => "neptune_cfd",
        }
    }

    /// 可读描述
    pub fn description(&self) -> &'static str {
        match self {
            Self::PhysicalModelFlag => "global specific physics flag",
            Self::Combustion3pt => "3-point combustion model",
            Self::CombustionSlfm => "steady laminar flamelet model",
            Self::CombustionEbu => "EBU combustion model",
            Self::CombustionLw => "Libby-Williams combustion model",
            Self::CombustionCoal => "coal combustion model",
            Self::JouleEffect => "Joule effect",
            Self::ElectricArcs => "electric arcs",
            Self::Compressible => "compressible model",
            Self::Atmospheric => "atmospheric model",
            Self::CoolingTowers => "cooling towers",
            Self::GasMix => "gas mix model",
            Self::Groundwater => "groundwater flows",
            Self::Solidification => "solidification process",
            Self::HeatTransfer => "heat transfer (in solids)",
            Self::NeptuneCfd => "coupled neptune_cfd solver",
        }
    }

    /// 是否为全局汇总标志
    #[inline]
    pub fn is_meta(&self) -> bool {
        matches!(self, Self::PhysicalModelFlag)
    }

    /// 是否为燃烧模型
    #[inline]
    pub fn is_combustion(&self) -> bool {
        Self::COMBUSTION.contains(self)
    }

    /// 是否为电磁模型
    #[inline]
    pub fn is_electromagnetic(&self) -> bool {
        Self::ELECTROMAGNETIC.contains(self)
    }

    /// 迭代全部物理子模型（跳过全局标志）
    pub fn physics() -> impl Iterator<Item = ModelType> {
        Self::ALL.into_iter().filter(|m| !m.is_meta())
    }
}

impl fmt::Display for ModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ModelType {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| RegistryError::unknown_model(s))
    }
}

impl TryFrom<usize> for ModelType {
    type Error = RegistryError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::from_index(index).ok_or(RegistryError::index_out_of_bounds(index, N_MODEL_TYPES))
    }
}

impl From<ModelType> for usize {
    fn from(model: ModelType) -> usize {
        model.index()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinals_are_contiguous() {
        for (i, model) in ModelType::ALL.iter().enumerate() {
            assert_eq!(model.index(), i);
            assert_eq!(ModelType::from_index(i), Some(*model));
        }
        assert_eq!(ModelType::from_index(N_MODEL_TYPES), None);
    }

    #[test]
    fn test_try_from_out_of_range() {
        let err = ModelType::try_from(N_MODEL_TYPES).unwrap_err();
        assert_eq!(err, RegistryError::index_out_of_bounds(16, 16));
        assert_eq!(ModelType::try_from(7).unwrap(), ModelType::ElectricArcs);
    }

    #[test]
    fn test_name_roundtrip() {
        for model in ModelType::ALL {
            assert_eq!(model.name().parse::<ModelType>().unwrap(), model);
        }
        // 与配置文件的键名规则一致：只接受精确的 snake_case
        assert!(" Gas_Mix ".parse::<ModelType>().is_err());
        assert!("gas_mix ".parse::<ModelType>().is_err());
        assert!("plasma".parse::<ModelType>().is_err());
    }

    #[test]
    fn test_serde_names_match() {
        for model in ModelType::ALL {
            let json = serde_json::to_string(&model).unwrap();
            assert_eq!(json, format!("\"{}\"", model.name()));
        }
    }

    #[test]
    fn test_groups() {
        assert!(ModelType::CombustionCoal.is_combustion());
        assert!(!ModelType::JouleEffect.is_combustion());
        assert!(ModelType::ElectricArcs.is_electromagnetic());
        assert!(ModelType::PhysicalModelFlag.is_meta());
        assert_eq!(ModelType::physics().count(), N_MODEL_TYPES - 1);
    }
}
