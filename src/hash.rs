//! 哈希引擎：SM3、HMAC-SM3（可加盐）、MD5、SHA-256
//!
//! 全部操作以 UTF-8 文本为输入，输出小写十六进制摘要。
//! MD5 与 SHA-256 仅用于遗留系统兼容；MD5 已存在碰撞攻击，调用方需自行评估。

use hmac::{Hmac, Mac};
use md5::Md5;
use sha2::{Digest, Sha256};
use sm3::Sm3;

use crate::common::codec::encode_hex;

type HmacSm3 = Hmac<Sm3>;

/// 对文本的 UTF-8 字节计算 SM3 摘要（32 字节）
pub fn sm3(input: &str) -> String {
    encode_hex(&Sm3::digest(input.as_bytes()))
}

/// 以 SM3 为底层压缩函数的 HMAC，密钥取 UTF-8 字节
pub fn hmac_sm3(key: &str, input: &str) -> String {
    encode_hex(&hmac_sm3_raw(key.as_bytes(), input.as_bytes()))
}

/// HMAC-SM3 哈希计算（带盐值增强）
///
/// 盐被拼接到*明文*之后，再按 UTF-8 重新解释拼接结果，与原始线格式保持一致。
/// 盐不是合法 UTF-8 时，无效字节序列会被替换为 U+FFFD，结果因此可能有损；
/// 这一行为是既有契约的一部分，在格式版本升级前不做修正。
pub fn hmac_sm3_with_salt(key: &str, input: &str, salt: &[u8]) -> String {
    let mut combined = input.as_bytes().to_vec();
    combined.extend_from_slice(salt);
    let reinterpreted = String::from_utf8_lossy(&combined);
    hmac_sm3(key, &reinterpreted)
}

/// MD5 摘要（16 字节），仅适用于兼容旧系统
pub fn md5(input: &str) -> String {
    encode_hex(&Md5::digest(input.as_bytes()))
}

/// SHA-256 摘要（32 字节）
pub fn sha256(input: &str) -> String {
    encode_hex(&Sha256::digest(input.as_bytes()))
}

fn hmac_sm3_raw(key: &[u8], input: &[u8]) -> Vec<u8> {
    let mut mac = HmacSm3::new_from_slice(key).expect("HMAC can take key of any size");
    mac.update(input);
    mac.finalize().into_bytes().to_vec()
}
