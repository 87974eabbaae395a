use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub name: String,
}

/// 已签发文档的登记信息
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub reference_number: String,
    pub issue_date: String,
    pub organization: Organization,
    pub verification_id: String,
}

/// 以摘要为键查询登记信息，键区分大小写；查不到返回`Ok(None)`
pub trait Registry {
    fn lookup(&self, hash: &str) -> Result<Option<Record>>;
}

/// 摘要必须是64个小写16进制字符
fn is_digest(hash: &str) -> bool {
    hash.len() == 64 && hash.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}


/// 目录结构：`<root>/<hash>/config.json`
#[derive(Clone, Debug)]
pub struct DirectoryRegistry {
    root: PathBuf,
}

impl DirectoryRegistry {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        DirectoryRegistry { root: root.into() }
    }
}

impl Registry for DirectoryRegistry {
    fn lookup(&self, hash: &str) -> Result<Option<Record>> {
        if !is_digest(hash) {
            debug!(hash, "rejected malformed registry key");
            return Ok(None);
        }
        let path = self.root.join(hash).join("config.json");
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(Error::Registry(format!("{}: {}", path.display(), e))),
        };
        match serde_json::from_slice(&bytes) {
            Ok(record) => Ok(Some(record)),
            Err(e) => {
                // 损坏的记录按未找到处理
                warn!(path = %path.display(), error = %e, "malformed registry record");
                Ok(None)
            }
        }
    }
}


#[derive(Clone, Debug, Default)]
pub struct MemoryRegistry {
    records: HashMap<String, Record>,
}

impl MemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, hash: impl Into<String>, record: Record) {
        self.records.insert(hash.into(), record);
    }
}

impl Registry for MemoryRegistry {
    fn lookup(&self, hash: &str) -> Result<Option<Record>> {
        Ok(self.records.get(hash).cloned())
    }
}
