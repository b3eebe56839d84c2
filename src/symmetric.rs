//! 对称加密模块
//!
//! [`suite`] 提供按 [`Algorithm`] 分发的统一入口；本模块另外导出
//! 与原始接口一一对应的便捷函数，均为文本进、文本出。

pub mod descriptor;
pub mod primitives;
pub mod suite;

pub use self::descriptor::{Algorithm, AlgorithmDescriptor, IvPolicy, Mode, Padding, validate_key};
pub use self::suite::{decrypt, decrypt_bytes, encrypt, encrypt_bytes};

use crate::common::errors::Result;

/// AES-128/ECB/PKCS#7 加密（遗留模式，无 IV，不推荐新系统使用）
pub fn aes_encrypt(plaintext: &str, key: &str) -> Result<String> {
    suite::encrypt(Algorithm::Aes128Ecb, plaintext, key)
}

/// AES-128/ECB/PKCS#7 解密
pub fn aes_decrypt(ciphertext: &str, key: &str) -> Result<String> {
    suite::decrypt(Algorithm::Aes128Ecb, ciphertext, key)
}

/// AES-256/GCM 加密（推荐），随机 nonce 内嵌在输出信封中
pub fn aes256_encrypt(plaintext: &str, key: &str) -> Result<String> {
    suite::encrypt(Algorithm::Aes256Gcm, plaintext, key)
}

/// AES-256/GCM 解密，标签校验失败返回 [`Error::Integrity`](crate::Error::Integrity)
pub fn aes256_decrypt(ciphertext: &str, key: &str) -> Result<String> {
    suite::decrypt(Algorithm::Aes256Gcm, ciphertext, key)
}

/// DES/CBC/PKCS#7 加密，固定全零 IV（已知弱点，为线格式兼容保留）
pub fn des_encrypt(plaintext: &str, key: &str) -> Result<String> {
    suite::encrypt(Algorithm::DesCbc, plaintext, key)
}

/// DES/CBC/PKCS#7 解密
pub fn des_decrypt(ciphertext: &str, key: &str) -> Result<String> {
    suite::decrypt(Algorithm::DesCbc, ciphertext, key)
}

/// 3DES/CBC/PKCS#7 加密，密钥必须为 24 字节，固定全零 IV
pub fn triple_des_encrypt(plaintext: &str, key: &str) -> Result<String> {
    suite::encrypt(Algorithm::TripleDesCbc, plaintext, key)
}

/// 3DES/CBC/PKCS#7 解密
pub fn triple_des_decrypt(ciphertext: &str, key: &str) -> Result<String> {
    suite::decrypt(Algorithm::TripleDesCbc, ciphertext, key)
}

/// RC5-64 加密，轮数运行期可配，尾部补零到分组倍数
pub fn rc5_encrypt(plaintext: &str, key: &str, rounds: usize) -> Result<String> {
    suite::encrypt(Algorithm::Rc5 { rounds }, plaintext, key)
}

/// RC5-64 解密，剥离尾部零字节（对以零结尾的明文有损）
pub fn rc5_decrypt(ciphertext: &str, key: &str, rounds: usize) -> Result<String> {
    suite::decrypt(Algorithm::Rc5 { rounds }, ciphertext, key)
}

/// IDEA/CBC/PKCS#7 加密，固定全零 IV
pub fn idea_encrypt(plaintext: &str, key: &str) -> Result<String> {
    suite::encrypt(Algorithm::IdeaCbc, plaintext, key)
}

/// IDEA/CBC/PKCS#7 解密
pub fn idea_decrypt(ciphertext: &str, key: &str) -> Result<String> {
    suite::decrypt(Algorithm::IdeaCbc, ciphertext, key)
}

/// RC4 流加密（RFC 7465 已废弃，仅遗留兼容）
pub fn rc4_encrypt(plaintext: &str, key: &str) -> Result<String> {
    suite::encrypt(Algorithm::Rc4, plaintext, key)
}

/// RC4 流解密
pub fn rc4_decrypt(ciphertext: &str, key: &str) -> Result<String> {
    suite::decrypt(Algorithm::Rc4, ciphertext, key)
}
