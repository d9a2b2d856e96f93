// crates/pm_registry/src/ffi.rs

//! C ABI 导出
//!
//! 旧数值核心只能按位置偏移寻址，通过这里拿到标志表首地址：
//!
//! ```c
//! int *ippmod = NULL;
//! pm_physical_model_get_pointers(registry, &ippmod);
//! if (ippmod[6] > 0) { /* joule effect */ }
//! ```

use std::os::raw::c_int;

use crate::model_type::N_MODEL_TYPES;
use crate::registry::{ActivationCode, ModelRegistry};

const _: () = assert!(std::mem::size_of::<ActivationCode>() == std::mem::size_of::<c_int>());
const _: () = assert!(std::mem::align_of::<ActivationCode>() == std::mem::align_of::<c_int>());

/// 将标志表首地址写入 `*ippmod`
///
/// 任一参数为空指针时不做任何操作。
///
/// # Safety
/// `registry` 必须指向存活的 [`ModelRegistry`]，`ippmod` 必须可写。
/// 返回的地址在注册表析构前有效。
#[no_mangle]
pub unsafe extern "C" fn pm_physical_model_get_pointers(
    registry: *mut ModelRegistry,
    ippmod: *mut *mut c_int,
) {
    if registry.is_null() || ippmod.is_null() {
        return;
    }
    let handle = (*registry).export_stable_handle();
    *ippmod = handle.as_ptr().cast::<c_int>();
}

/// 模型类型数量
#[no_mangle]
pub extern "C" fn pm_physical_model_n_types() -> c_int {
    N_MODEL_TYPES as c_int
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model_type::ModelType;

    #[test]
    fn test_get_pointers_matches_handle() {
        let mut registry = ModelRegistry::initialize();
        let mut ippmod: *mut c_int = std::ptr::null_mut();
        unsafe { pm_physical_model_get_pointers(&mut registry, &mut ippmod) };
        assert!(!ippmod.is_null());
        assert!(registry.handle_exported());

        registry.set(ModelType::CombustionCoal, 0);
        let value = unsafe { *ippmod.add(ModelType::CombustionCoal.index()) };
        assert_eq!(value, 0);
        assert_eq!(registry.export_stable_handle().as_ptr().cast::<c_int>(), ippmod);
    }

    #[test]
    fn test_null_arguments_ignored() {
        let mut ippmod: *mut c_int = std::ptr::null_mut();
        unsafe { pm_physical_model_get_pointers(std::ptr::null_mut(), &mut ippmod) };
        assert!(ippmod.is_null());

        let mut registry = ModelRegistry::initialize();
        unsafe { pm_physical_model_get_pointers(&mut registry, std::ptr::null_mut()) };
        assert!(!registry.handle_exported());
    }

    #[test]
    fn test_n_types() {
        assert_eq!(pm_physical_model_n_types(), 16);
    }
}
