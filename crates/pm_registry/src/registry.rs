// crates/pm_registry/src/registry.rs

//! 物理模型激活注册表
//!
//! 记录本次运行中哪些可选物理子模型处于激活状态，以及多变体模型选用的变体。
//!
//! # 生命周期
//!
//! ```text
//! initialize() ─> 配置阶段 set() ─> 计算阶段只读 get() / 稳定句柄 ─> drop
//! ```
//!
//! # 存储
//!
//! 标志表是一块在构造时分配、析构时释放的定长堆内存。注册表本身可以移动，
//! 堆块地址不变，因此导出给旧数值核心的指针在注册表存活期间一直有效。
//! 注册表不提供任何改变长度的操作。
//!
//! # 示例
//!
//! ```
//! use pm_registry::{ModelRegistry, ModelType, INACTIVE};
//!
//! let mut registry = ModelRegistry::initialize();
//! registry.set(ModelType::JouleEffect, 2);
//! assert_eq!(registry.get(ModelType::JouleEffect), 2);
//! assert_eq!(registry.get(ModelType::ElectricArcs), INACTIVE);
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ptr::NonNull;
use tracing::{debug, info, warn};

use crate::error::{RegistryError, RegistryResult};
use crate::handle::StableHandle;
use crate::model_type::{ModelType, N_MODEL_TYPES};
use crate::validation::CodeValidator;
use crate::variant::{AtmosphericVariant, ElectricArcVariant, JouleEffectVariant};

/// 激活代码：`-1` 未激活，`>= 0` 激活（多变体模型的正值同时选择变体）
pub type ActivationCode = i32;

/// 未激活标记
pub const INACTIVE: ActivationCode = -1;

/// 代码是否表示激活
#[inline]
pub const fn is_active_code(code: ActivationCode) -> bool {
    code >= 0
}

type FlagBlock = [ActivationCode; N_MODEL_TYPES];

/// 物理模型激活注册表
///
/// 构造即初始化，不存在未初始化状态。写操作需要 `&mut self`，
/// 因此配置阶段的单写者约束由借用检查器保证。
pub struct ModelRegistry {
    /// 定长标志表，地址在整个生命周期内固定
    flags: NonNull<ActivationCode>,
    /// 是否已导出稳定句柄
    handle_exported: bool,
}

// 标志表为独占所有；共享访问只读，写入需要 &mut
unsafe impl Send for ModelRegistry {}
unsafe impl Sync for ModelRegistry {}

impl ModelRegistry {
    /// 分配标志表并将全部条目置为 `-1`
    pub fn initialize() -> Self {
        let block: Box<FlagBlock> = Box::new([INACTIVE; N_MODEL_TYPES]);
        let flags = NonNull::from(Box::leak(block)).cast::<ActivationCode>();
        Self {
            flags,
            handle_exported: false,
        }
    }

    /// 等价于 [`ModelRegistry::initialize`]
    #[inline]
    pub fn new() -> Self {
        Self::initialize()
    }

    /// 从按序号排列的代码构造
    pub fn from_codes(codes: &[ActivationCode]) -> RegistryResult<Self> {
        if codes.len() != N_MODEL_TYPES {
            return Err(RegistryError::layout_mismatch(N_MODEL_TYPES, codes.len()));
        }
        let registry = Self::initialize();
        // SAFETY: 新分配的块尚未导出，此处是唯一访问者
        let flags = unsafe { registry.raw_slice_mut() };
        flags.copy_from_slice(codes);
        Ok(registry)
    }

    #[inline]
    fn as_slice(&self) -> &[ActivationCode] {
        // SAFETY: flags 指向存活的 N_MODEL_TYPES 长度块
        unsafe { std::slice::from_raw_parts(self.flags.as_ptr(), N_MODEL_TYPES) }
    }

    /// # Safety
    /// 调用方保证没有其它对标志表的活跃引用。
    #[inline]
    #[allow(clippy::mut_from_ref)]
    unsafe fn raw_slice_mut(&self) -> &mut [ActivationCode] {
        std::slice::from_raw_parts_mut(self.flags.as_ptr(), N_MODEL_TYPES)
    }

    #[inline]
    fn as_mut_slice(&mut self) -> &mut [ActivationCode] {
        // SAFETY: &mut self 保证独占
        unsafe { self.raw_slice_mut() }
    }

    // ========================================================================
    // 基本读写
    // ========================================================================

    /// 读取激活代码
    #[inline]
    pub fn get(&self, model: ModelType) -> ActivationCode {
        self.as_slice()[model.index()]
    }

    /// 写入激活代码，不做范围校验
    pub fn set(&mut self, model: ModelType, code: ActivationCode) {
        debug!(model = %model, code, "设置物理模型激活代码");
        self.as_mut_slice()[model.index()] = code;
    }

    /// 经校验钩子写入；被拒绝时条目保持不变
    pub fn try_set(
        &mut self,
        model: ModelType,
        code: ActivationCode,
        validator: &dyn CodeValidator,
    ) -> RegistryResult<()> {
        if let Err(err) = validator.validate(model, code) {
            warn!(model = %model, code, "激活代码被拒绝: {}", err);
            return Err(err);
        }
        self.set(model, code);
        Ok(())
    }

    /// 将模型置为未激活
    #[inline]
    pub fn deactivate(&mut self, model: ModelType) {
        self.set(model, INACTIVE);
    }

    /// 模型是否激活
    #[inline]
    pub fn is_active(&self, model: ModelType) -> bool {
        is_active_code(self.get(model))
    }

    /// 按位置偏移读取
    pub fn code_at(&self, index: usize) -> RegistryResult<ActivationCode> {
        RegistryError::check_index(index, N_MODEL_TYPES)?;
        Ok(self.as_slice()[index])
    }

    /// 条目数量，恒为 `N_MODEL_TYPES`
    #[inline]
    pub const fn len(&self) -> usize {
        N_MODEL_TYPES
    }

    /// 恒为 false
    #[inline]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// 按序号迭代 (模型, 代码)
    pub fn iter(&self) -> impl Iterator<Item = (ModelType, ActivationCode)> + '_ {
        ModelType::ALL.into_iter().map(move |m| (m, self.get(m)))
    }

    // ========================================================================
    // 多变体模型
    // ========================================================================

    /// 焦耳效应变体，未激活或代码未知时返回 `None`
    pub fn joule_effect(&self) -> Option<JouleEffectVariant> {
        JouleEffectVariant::from_code(self.get(ModelType::JouleEffect))
    }

    /// 选择焦耳效应变体
    pub fn set_joule_effect(&mut self, variant: JouleEffectVariant) {
        self.set(ModelType::JouleEffect, variant.code());
    }

    /// 电弧变体
    pub fn electric_arcs(&self) -> Option<ElectricArcVariant> {
        ElectricArcVariant::from_code(self.get(ModelType::ElectricArcs))
    }

    /// 选择电弧变体
    pub fn set_electric_arcs(&mut self, variant: ElectricArcVariant) {
        self.set(ModelType::ElectricArcs, variant.code());
    }

    /// 大气模型选项
    pub fn atmospheric(&self) -> Option<AtmosphericVariant> {
        AtmosphericVariant::from_code(self.get(ModelType::Atmospheric))
    }

    /// 选择大气模型选项
    pub fn set_atmospheric(&mut self, variant: AtmosphericVariant) {
        self.set(ModelType::Atmospheric, variant.code());
    }

    // ========================================================================
    // 汇总查询
    // ========================================================================

    /// 已激活的物理子模型（不含全局标志），按序号排列
    pub fn active_models(&self) -> impl Iterator<Item = ModelType> + '_ {
        ModelType::physics().filter(move |m| self.is_active(*m))
    }

    /// 已激活的燃烧模型
    pub fn active_combustion_models(&self) -> impl Iterator<Item = ModelType> + '_ {
        ModelType::COMBUSTION
            .into_iter()
            .filter(move |m| self.is_active(*m))
    }

    /// 第一个激活的燃烧模型
    ///
    /// 同时激活多个燃烧模型不在此检查。
    pub fn combustion_model(&self) -> Option<ModelType> {
        self.active_combustion_models().next()
    }

    /// 是否有任意物理子模型激活
    pub fn has_specific_physics(&self) -> bool {
        self.active_models().next().is_some()
    }

    /// 同步全局标志
    ///
    /// 有子模型激活且全局标志 `<= 0` 时置为 1；从不降低全局标志。
    /// 返回同步后的全局标志。
    pub fn sync_global_flag(&mut self) -> ActivationCode {
        let current = self.get(ModelType::PhysicalModelFlag);
        if current <= 0 && self.has_specific_physics() {
            self.set(ModelType::PhysicalModelFlag, 1);
        }
        self.get(ModelType::PhysicalModelFlag)
    }

    // ========================================================================
    // 布局与导出
    // ========================================================================

    /// 按序号复制全部代码
    pub fn snapshot(&self) -> [ActivationCode; N_MODEL_TYPES] {
        let mut out = [INACTIVE; N_MODEL_TYPES];
        out.copy_from_slice(self.as_slice());
        out
    }

    /// 原生字节序的位置布局
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.as_slice())
    }

    /// 导出稳定句柄
    ///
    /// 多次调用返回同一地址。句柄仅在本注册表存活期间有效。
    pub fn export_stable_handle(&mut self) -> StableHandle {
        if !self.handle_exported {
            info!(
                address = ?self.flags.as_ptr(),
                len = N_MODEL_TYPES,
                "导出物理模型标志表稳定句柄"
            );
            self.handle_exported = true;
        }
        StableHandle::new(self.flags, N_MODEL_TYPES)
    }

    /// 是否已导出稳定句柄
    #[inline]
    pub fn handle_exported(&self) -> bool {
        self.handle_exported
    }
}

impl Drop for ModelRegistry {
    fn drop(&mut self) {
        // SAFETY: flags 由 initialize() 中的 Box::leak 得到，只释放一次
        drop(unsafe { Box::from_raw(self.flags.cast::<FlagBlock>().as_ptr()) });
    }
}

impl Default for ModelRegistry {
    fn default() -> Self {
        Self::initialize()
    }
}

/// 克隆得到独立的新表，句柄导出状态不随之复制
impl Clone for ModelRegistry {
    fn clone(&self) -> Self {
        let registry = Self::initialize();
        // SAFETY: 新分配的块尚未导出
        let flags = unsafe { registry.raw_slice_mut() };
        flags.copy_from_slice(self.as_slice());
        registry
    }
}

impl PartialEq for ModelRegistry {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for ModelRegistry {}

impl fmt::Debug for ModelRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|(m, code)| (m.name(), code)))
            .finish()
    }
}

impl Serialize for ModelRegistry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.as_slice())
    }
}

impl<'de> Deserialize<'de> for ModelRegistry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let codes = Vec::<ActivationCode>::deserialize(deserializer)?;
        Self::from_codes(&codes).map_err(serde::de::Error::custom)
    }
}
