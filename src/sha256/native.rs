use crate::error::Result;

/// 使用平台加速实现计算摘要
#[cfg(feature = "native")]
pub fn digest(data: &[u8]) -> Result<[u8; 32]> {
    use sha2::{Digest, Sha256};

    // 加速实现出现异常时交给调用方回退
    let out = std::panic::catch_unwind(|| Sha256::digest(data))
        .map_err(|_| crate::error::Error::Computation(String::from("sha2 panicked")))?;
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&out);
    Ok(hash)
}

/// 未启用`native`特性时加速实现不可用
#[cfg(not(feature = "native"))]
pub fn digest(_data: &[u8]) -> Result<[u8; 32]> {
    Err(crate::error::Error::NativeUnavailable)
}
