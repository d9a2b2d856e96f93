// crates/pm_registry/src/handle.rs

//! 稳定句柄
//!
//! 面向旧数值核心的非拥有视图，按位置偏移直接访问标志表。
//! 句柄不参与所有权：它不释放、不重新分配存储，也不得比签发它的
//! [`ModelRegistry`](crate::ModelRegistry) 活得更久。

use std::fmt;
use std::ptr::NonNull;

use crate::registry::ActivationCode;

/// 标志表的稳定地址视图
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct StableHandle {
    ptr: NonNull<ActivationCode>,
    len: usize,
}

impl StableHandle {
    #[inline]
    pub(crate) fn new(ptr: NonNull<ActivationCode>, len: usize) -> Self {
        Self { ptr, len }
    }

    /// 首元素地址
    #[inline]
    pub fn as_ptr(&self) -> *mut ActivationCode {
        self.ptr.as_ptr()
    }

    /// 条目数量
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// 是否为空
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// 读取偏移处的代码
    ///
    /// # Panics
    /// `offset >= len` 时 panic。
    ///
    /// # Safety
    /// 签发句柄的注册表必须仍然存活，且没有并发写入。
    #[inline]
    pub unsafe fn read(&self, offset: usize) -> ActivationCode {
        assert!(offset < self.len, "稳定句柄偏移越界: {} >= {}", offset, self.len);
        self.ptr.as_ptr().add(offset).read()
    }

    /// 写入偏移处的代码
    ///
    /// # Panics
    /// `offset >= len` 时 panic。
    ///
    /// # Safety
    /// 签发句柄的注册表必须仍然存活，且此时没有其它读写。
    #[inline]
    pub unsafe fn write(&self, offset: usize, code: ActivationCode) {
        assert!(offset < self.len, "稳定句柄偏移越界: {} >= {}", offset, self.len);
        self.ptr.as_ptr().add(offset).write(code);
    }

    /// 以切片形式查看全部代码
    ///
    /// # Safety
    /// 返回切片存活期间，注册表必须存活且不被修改。
    #[inline]
    pub unsafe fn as_slice(&self) -> &[ActivationCode] {
        std::slice::from_raw_parts(self.ptr.as_ptr(), self.len)
    }
}

impl fmt::Debug for StableHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StableHandle")
            .field("ptr", &self.ptr)
            .field("len", &self.len)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::model_type::{ModelType, N_MODEL_TYPES};
    use crate::registry::{ModelRegistry, INACTIVE};

    #[test]
    fn test_handle_reads_registry_storage() {
        let mut registry = ModelRegistry::initialize();
        let handle = registry.export_stable_handle();
        assert_eq!(handle.len(), N_MODEL_TYPES);
        assert!(!handle.is_empty());

        registry.set(ModelType::Solidification, 1);
        unsafe {
            assert_eq!(handle.read(ModelType::Solidification.index()), 1);
            assert_eq!(handle.read(ModelType::HeatTransfer.index()), INACTIVE);
        }
    }

    #[test]
    fn test_handle_write_visible_to_get() {
        let mut registry = ModelRegistry::initialize();
        let handle = registry.export_stable_handle();
        unsafe { handle.write(ModelType::Compressible.index(), 2) };
        assert_eq!(registry.get(ModelType::Compressible), 2);
    }

    #[test]
    fn test_as_slice_matches_snapshot() {
        let mut registry = ModelRegistry::initialize();
        let handle = registry.export_stable_handle();
        registry.set(ModelType::GasMix, 3);
        registry.set(ModelType::Combustion3pt, 0);

        let view = unsafe { handle.as_slice() };
        assert_eq!(view.len(), N_MODEL_TYPES);
        assert_eq!(view, &registry.snapshot()[..]);
    }

    #[test]
    #[should_panic]
    fn test_handle_offset_out_of_range() {
        let mut registry = ModelRegistry::initialize();
        let handle = registry.export_stable_handle();
        unsafe {
            handle.read(N_MODEL_TYPES);
        }
    }

    #[test]
    fn test_repeated_export_same_address() {
        let mut registry = ModelRegistry::initialize();
        let first = registry.export_stable_handle();
        let second = registry.export_stable_handle();
        assert_eq!(first, second);
        assert!(registry.handle_exported());
    }
}
