//! 统一的配置加载接口
//!
//! 读取文件 → `load_from_str` 解析 → `validate` 校验，三步固定顺序。

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{ConfError, ConfResult};

pub trait ConfigLoader: Sized + DeserializeOwned {
    /// 配置类型名称（用于错误消息）
    fn config_type_name() -> &'static str;

    /// 从文件路径加载并校验配置
    fn load_from_path(path: &Path) -> ConfResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfError::Read {
            kind: Self::config_type_name(),
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::load_from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// 解析 TOML 内容（未校验）
    fn load_from_str(content: &str) -> ConfResult<Self> {
        toml::from_str(content).map_err(|source| ConfError::Parse {
            kind: Self::config_type_name(),
            source,
        })
    }

    fn validate(&self) -> ConfResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[derive(Debug, Deserialize)]
    struct Probe {
        value: String,
    }

    impl ConfigLoader for Probe {
        fn config_type_name() -> &'static str {
            "Probe"
        }

        fn validate(&self) -> ConfResult<()> {
            if self.value.is_empty() {
                return Err(ConfError::Validation {
                    kind: Self::config_type_name(),
                    reason: "value 不能为空".into(),
                });
            }
            Ok(())
        }
    }

    #[test]
    fn load_from_path_parses_and_validates() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "value = \"ok\"").unwrap();
        let probe = Probe::load_from_path(file.path()).unwrap();
        assert_eq!(probe.value, "ok");
    }

    #[test]
    fn validation_failure_is_reported() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "value = \"\"").unwrap();
        let err = Probe::load_from_path(file.path()).unwrap_err();
        assert!(matches!(err, ConfError::Validation { .. }));
        assert!(err.to_string().contains("value 不能为空"));
    }

    #[test]
    fn missing_file_is_read_error() {
        let err = Probe::load_from_path(Path::new("/nonexistent/probe.toml")).unwrap_err();
        assert!(matches!(err, ConfError::Read { kind: "Probe", .. }));
    }

    #[test]
    fn bad_toml_is_parse_error() {
        let err = Probe::load_from_str("value = ").err().unwrap();
        assert!(matches!(err, ConfError::Parse { .. }));
    }
}
