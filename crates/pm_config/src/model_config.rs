// crates/pm_config/src/model_config.rs

//! PhysicalModelConfig - 物理模型选择配置
//!
//! 配置以模型键名到激活代码的映射表示，应用时按序号顺序写入注册表。
//! 未出现在配置中的模型保持未激活。

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use tracing::info;

use pm_registry::{
    is_active_code, AcceptAll, ActivationCode, CodeValidator, DocumentedRanges, ModelRegistry,
    ModelType,
};

use crate::error::ConfigError;

/// 物理模型选择配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PhysicalModelConfig {
    /// 各模型的激活代码，同一模型重复出现视为解析错误
    #[serde(default, deserialize_with = "deserialize_unique_models")]
    pub models: BTreeMap<ModelType, ActivationCode>,

    /// 严格模式：按文档约定的范围校验代码
    #[serde(default)]
    pub strict: bool,

    /// 应用后是否同步全局标志
    #[serde(default = "default_sync_global_flag")]
    pub sync_global_flag: bool,

    /// 严格模式下单变体模型的代码上限
    #[serde(default = "default_max_code")]
    pub max_code: ActivationCode,
}

/// 逐项读取 models 映射，拒绝重复键
fn deserialize_unique_models<'de, D>(
    deserializer: D,
) -> Result<BTreeMap<ModelType, ActivationCode>, D::Error>
where
    D: Deserializer<'de>,
{
    struct UniqueModels;

    impl<'de> Visitor<'de> for UniqueModels {
        type Value = BTreeMap<ModelType, ActivationCode>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map from model name to activation code")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
            let mut models = BTreeMap::new();
            while let Some((model, code)) = access.next_entry::<ModelType, ActivationCode>()? {
                if models.insert(model, code).is_some() {
                    return Err(serde::de::Error::custom(format!("重复的物理模型: `{}`", model)));
                }
            }
            Ok(models)
        }
    }

    deserializer.deserialize_map(UniqueModels)
}

fn default_sync_global_flag() -> bool { true }
fn default_max_code() -> ActivationCode { DocumentedRanges::DEFAULT_MAX_CODE }

impl Default for PhysicalModelConfig {
    fn default() -> Self {
        Self {
            models: BTreeMap::new(),
            strict: false,
            sync_global_flag: default_sync_global_flag(),
            max_code: default_max_code(),
        }
    }
}

impl PhysicalModelConfig {
    /// 从文件加载配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// 从 JSON 字符串解析并校验
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        let config: PhysicalModelConfig = serde_json::from_str(content)
            .map_err(|e| ConfigError::Parse(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// 保存配置到文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::Parse(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// 从位置布局（如 `pm_cli show --json` 的输出）还原配置
    ///
    /// 只保留已激活的条目（包括已激活的全局标志），不再同步全局标志。
    pub fn from_layout(codes: &[ActivationCode]) -> Result<Self, ConfigError> {
        let registry = ModelRegistry::from_codes(codes)?;
        let models = registry
            .iter()
            .filter(|(_, code)| is_active_code(*code))
            .collect();
        Ok(Self {
            models,
            sync_global_flag: false,
            ..Self::default()
        })
    }

    /// 启用模型
    pub fn with_model(mut self, model: ModelType, code: ActivationCode) -> Self {
        self.models.insert(model, code);
        self
    }

    /// 启用严格模式
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// 当前配置使用的校验器
    pub fn validator(&self) -> Box<dyn CodeValidator> {
        if self.strict {
            Box::new(DocumentedRanges::new().with_max_code(self.max_code))
        } else {
            Box::new(AcceptAll)
        }
    }

    /// 验证配置有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_code < 0 {
            return Err(ConfigError::InvalidValue {
                key: "max_code".to_string(),
                value: self.max_code.to_string(),
                reason: "max_code 不能为负".to_string(),
            });
        }

        let validator = self.validator();
        for (&model, &code) in &self.models {
            validator
                .validate(model, code)
                .map_err(ConfigError::from_rejected)?;
        }
        Ok(())
    }

    /// 将配置写入注册表
    ///
    /// 先整体校验，任一条目不合法时注册表保持不变。
    pub fn apply(&self, registry: &mut ModelRegistry) -> Result<(), ConfigError> {
        self.validate()?;

        for (&model, &code) in &self.models {
            registry.set(model, code);
        }

        if self.sync_global_flag {
            registry.sync_global_flag();
        }

        info!(
            models = self.models.len(),
            active = registry.active_models().count(),
            "物理模型配置已应用"
        );
        Ok(())
    }

    /// 创建新注册表并应用配置
    pub fn build_registry(&self) -> Result<ModelRegistry, ConfigError> {
        let mut registry = ModelRegistry::initialize();
        self.apply(&mut registry)?;
        Ok(registry)
    }
}
