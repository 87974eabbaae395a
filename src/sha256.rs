use tracing::{debug, warn};

mod core;
mod native;

pub use self::core::{padded_len, Crypto};

/// 产生摘要的实现
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Engine {
    Native,
    Software,
}

/// 计算摘要信息，返回由小写16进制字符组成的长度为64的字符串
///
/// 优先使用加速实现，不可用或失败时回退到软件实现，两者结果完全一致。
pub fn digest(data: &[u8]) -> String {
    digest_with_engine(data).0
}

/// 同`digest`，同时返回实际使用的实现
pub fn digest_with_engine(data: &[u8]) -> (String, Engine) {
    match native::digest(data) {
        Ok(hash) => {
            debug!(len = data.len(), "digest computed by native engine");
            (hex::encode(hash), Engine::Native)
        }
        Err(e) => {
            warn!(error = %e, "native digest failed, falling back to software engine");
            (software(data), Engine::Software)
        }
    }
}

/// 仅使用软件实现计算摘要
pub fn software(data: &[u8]) -> String {
    hex::encode(Crypto::new(data).hash())
}
