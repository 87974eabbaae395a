use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

use tracing::{debug, info};

use crate::config::VerifyConfig;
use crate::error::{Error, Result};
use crate::registry::{Record, Registry};
use crate::sha256;

const PDF_MAGIC: &[u8] = b"%PDF-";

/// 待校验的文档
#[derive(Clone, Debug)]
pub struct Document {
    content_type: Option<String>,
    bytes: Vec<u8>,
}

impl Document {
    /// `content_type`为`None`时根据内容识别类型
    pub fn new(content_type: Option<String>, bytes: Vec<u8>) -> Self {
        Document { content_type, bytes }
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = fs::read(path)?;
        Ok(Document::new(None, bytes))
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn content_type(&self) -> &str {
        match &self.content_type {
            Some(t) => t,
            None if self.bytes.starts_with(PDF_MAGIC) => "application/pdf",
            None => "application/octet-stream",
        }
    }
}


#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verification {
    Verified { hash: String, record: Record },
    NotFound { hash: String },
}

impl Verification {
    pub fn hash(&self) -> &str {
        match self {
            Verification::Verified { hash, .. } | Verification::NotFound { hash } => hash,
        }
    }

    pub fn is_verified(&self) -> bool {
        matches!(self, Verification::Verified { .. })
    }
}


pub struct Verifier<R> {
    config: VerifyConfig,
    registry: R,
}

impl<R: Registry> Verifier<R> {
    pub fn new(config: VerifyConfig, registry: R) -> Self {
        Verifier { config, registry }
    }

    pub fn config(&self) -> &VerifyConfig {
        &self.config
    }

    /// 读取文件并校验，超过大小上限的文件不会被读入内存
    pub fn verify_path(&self, path: impl AsRef<Path>) -> Result<Verification> {
        let limit = self.config.max_size;
        let file = File::open(path)?;
        let size = file.metadata()?.len();
        if size > limit {
            return Err(Error::SizeLimitExceeded { size, limit });
        }
        // 读取期间文件可能变大，多读一个字节用于判断
        let mut bytes = Vec::with_capacity(size as usize);
        file.take(limit.saturating_add(1)).read_to_end(&mut bytes)?;
        self.verify(&Document::new(None, bytes))
    }

    /// 检查类型和大小，计算摘要后查询登记信息
    pub fn verify(&self, document: &Document) -> Result<Verification> {
        let found = document.content_type();
        if found != self.config.content_type {
            return Err(Error::InvalidInputType {
                expected: self.config.content_type.clone(),
                found: found.to_string(),
            });
        }

        let size = document.bytes.len() as u64;
        if size > self.config.max_size {
            return Err(Error::SizeLimitExceeded { size, limit: self.config.max_size });
        }

        let hash = sha256::digest(&document.bytes);
        debug!(%hash, size, "document hashed");

        match self.registry.lookup(&hash)? {
            Some(record) => {
                info!(%hash, reference = %record.reference_number, "document verified");
                Ok(Verification::Verified { hash, record })
            }
            None => {
                info!(%hash, "document not found in registry");
                Ok(Verification::NotFound { hash })
            }
        }
    }
}
