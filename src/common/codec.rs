//! 编解码模块：密文与密钥使用 Base64，摘要使用小写十六进制
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};

use crate::common::errors::Result;

/// 将字节序列编码为 Base64 字符串
pub fn encode_base64(data: &[u8]) -> String {
    BASE64.encode(data)
}

/// 从 Base64 字符串解码为字节序列
///
/// 字母表错误或补位长度错误返回 [`Error::Decode`](crate::Error::Decode)。
pub fn decode_base64(encoded: &str) -> Result<Vec<u8>> {
    Ok(BASE64.decode(encoded)?)
}

/// 将字节序列编码为小写十六进制，每字节两位，无分隔符
pub fn encode_hex(data: &[u8]) -> String {
    hex::encode(data)
}
