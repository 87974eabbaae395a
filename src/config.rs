use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// 允许校验的最大文件大小：100 MB
pub const DEFAULT_MAX_SIZE: u64 = 100 * 1024 * 1024;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VerifyConfig {
    pub max_size: u64,
    pub content_type: String,
    pub registry_root: PathBuf,
    pub organization_name: String,
    pub organization_domain: String,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        VerifyConfig {
            max_size: DEFAULT_MAX_SIZE,
            content_type: String::from("application/pdf"),
            registry_root: PathBuf::from("records"),
            organization_name: String::from("BitNinja Technology"),
            organization_domain: String::from("bitninja.net"),
        }
    }
}

impl VerifyConfig {
    /// 从JSON文件加载配置，缺省字段使用默认值
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        serde_json::from_str(&text).map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }
}


#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::PathBuf;

    use crate::config::{VerifyConfig, DEFAULT_MAX_SIZE};
    use crate::Error;

    #[test]
    fn defaults() {
        let config = VerifyConfig::default();
        assert_eq!(config.max_size, DEFAULT_MAX_SIZE);
        assert_eq!(config.content_type, "application/pdf");
        assert_eq!(config.registry_root, PathBuf::from("records"));
    }

    #[test]
    fn load_partial() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"maxSize": 1024, "registryRoot": "/srv/records"}}"#).unwrap();

        let config = VerifyConfig::load(file.path()).unwrap();
        assert_eq!(config.max_size, 1024);
        assert_eq!(config.registry_root, PathBuf::from("/srv/records"));
        assert_eq!(config.organization_name, "BitNinja Technology");
    }

    #[test]
    fn load_invalid() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(VerifyConfig::load(file.path()), Err(Error::Config(_))));
        assert!(matches!(VerifyConfig::load("/nonexistent/yarish.json"), Err(Error::Config(_))));
    }
}
