//! 定义整个 crate 共享的错误类型
use thiserror::Error;

/// 加解密操作可能遇到的错误类型
///
/// 每种失败都会同步地报告给直接调用方，并且不会被重试：
/// 对相同输入而言，密码学失败是确定性的。
#[derive(Error, Debug)]
pub enum Error {
    /// 算法声明了固定密钥长度，而传入的密钥不满足
    #[error("invalid key length: expected {expected} bytes, got {actual}")]
    KeyLength { expected: usize, actual: usize },

    /// 密钥材料（DER 等）无法解析
    #[error("malformed key material: {0}")]
    KeyFormat(String),

    /// Base64 输入无法解码
    #[error("decoding from Base64 failed: {0}")]
    Decode(#[from] base64::DecodeError),

    /// RSA 明文超出单块容量，不做截断也不做分块
    #[error("plaintext exceeds RSA block capacity: limit {limit} bytes, got {actual}")]
    PlaintextTooLarge { limit: usize, actual: usize },

    /// GCM 认证标签校验失败
    ///
    /// 与其它失败严格区分，调用方绝不能把被篡改的密文误当作有效明文。
    #[error("authentication tag verification failed")]
    Integrity,

    /// 底层原语的其它失败：解密时补位错误、RC5 轮数不受支持等
    #[error("cipher operation failed: {0}")]
    Cipher(String),

    /// 请求了未支持的算法配置
    #[error("unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// 数据格式无效
    #[error("invalid data format: {0}")]
    Format(String),
}

/// 本 crate 统一的 Result 别名
pub type Result<T> = std::result::Result<T, Error>;

// thiserror 自动处理 Display, StdError 和所有 #[from] 的实现

// 手动实现一些无法使用 #[from] 的转换
impl From<std::string::FromUtf8Error> for Error {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Error::Format(format!("UTF-8 conversion error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_length_error_display() {
        let err = Error::KeyLength {
            expected: 32,
            actual: 16,
        };
        assert_eq!(
            err.to_string(),
            "invalid key length: expected 32 bytes, got 16"
        );
    }

    #[test]
    fn test_from_utf8_error_maps_to_format() {
        let invalid = vec![0xff, 0xfe];
        let err: Error = String::from_utf8(invalid).unwrap_err().into();
        assert!(matches!(err, Error::Format(_)));
    }
}
