// crates/pm_config/src/error.rs

//! 配置层错误类型

use pm_registry::RegistryError;

/// 配置错误
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO 错误
    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    /// 解析错误
    #[error("解析错误: {0}")]
    Parse(String),

    /// 无效值
    #[error("无效值 '{key}': {value} - {reason}")]
    InvalidValue {
        /// 配置键
        key: String,
        /// 配置值
        value: String,
        /// 原因
        reason: String,
    },

    /// 注册表错误
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

impl ConfigError {
    /// 从注册表校验错误转换为带键名的无效值错误
    pub fn from_rejected(err: RegistryError) -> Self {
        match err {
            RegistryError::InvalidCode { model, code, reason } => Self::InvalidValue {
                key: format!("models.{}", model.name()),
                value: code.to_string(),
                reason,
            },
            other => Self::Registry(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pm_registry::ModelType;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidValue {
            key: "models.joule_effect".to_string(),
            value: "9".to_string(),
            reason: "期望 -1 或 1..=4".to_string(),
        };
        assert!(err.to_string().contains("joule_effect"));
    }

    #[test]
    fn test_from_rejected_keeps_key() {
        let err = ConfigError::from_rejected(RegistryError::invalid_code(
            ModelType::ElectricArcs,
            5,
            "out of range",
        ));
        match err {
            ConfigError::InvalidValue { key, value, .. } => {
                assert_eq!(key, "models.electric_arcs");
                assert_eq!(value, "5");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_registry_error_passthrough() {
        let err = ConfigError::from_rejected(RegistryError::index_out_of_bounds(20, 16));
        assert!(matches!(err, ConfigError::Registry(_)));
    }
}
