//! # Cipher-Kit: 统一文本接口的加解密工具库
//!
//! `cipher-kit` 通过一套一致的文本进、文本出契约暴露哈希、对称加密
//! （分组与流、遗留与现代模式）以及 RSA 非对称加密。密文与密钥使用
//! Base64 文本，摘要使用小写十六进制。
//!
//! ## 核心概念
//!
//! - **[`Algorithm`]**：封闭枚举，每个变体携带一份不可变的
//!   [`AlgorithmDescriptor`]，集中列出密钥长度要求、IV 策略与补位方案。
//! - **[`symmetric::suite`]**：按算法描述符分发的统一 `encrypt`/`decrypt`
//!   入口；逐算法的便捷函数是它的薄包装。
//! - **[`asymmetric::rsa`]**：RSA-2048 密钥对生成、单块加解密与
//!   DER（Base64）密钥导入导出。
//! - **[`hash`]**：SM3、HMAC-SM3（可加盐）、MD5、SHA-256。
//!
//! 所有操作都是纯函数式的单次调用，内部不保留可变状态，天然线程安全。
//! 唯一的进程级副作用是后端初始化，由一次性屏障保护（见 [`init`]）。
//!
//! ## 安全提示
//!
//! 1. 仅 AES-256/GCM 提供完整性保护；标签校验失败以独立的
//!    [`Error::Integrity`] 报告，被篡改的密文绝不会以明文形态返回
//! 2. DES/3DES/IDEA 的固定全零 IV 与 RC5 的尾部补零是已知弱点，
//!    为线格式兼容而保留；安全加固需要格式版本升级
//! 3. MD5、RC4、DES 仅适用于遗留系统兼容，不应在新系统中使用
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cipher_kit::{aes256_decrypt, aes256_encrypt};
//!
//! fn main() -> cipher_kit::Result<()> {
//!     let key = "01234567890123456789012345678901"; // 32 字节
//!     let envelope = aes256_encrypt("Hello, Cipher-Kit!", key)?;
//!     let plaintext = aes256_decrypt(&envelope, key)?;
//!     assert_eq!(plaintext, "Hello, Cipher-Kit!");
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]

pub mod asymmetric;
pub mod common;
pub mod hash;
pub mod symmetric;

// --- 公开操作面 ---
pub use common::{Error, Result, ZeroizingVec, decode_base64, encode_base64, encode_hex, init};

pub use hash::{hmac_sm3, hmac_sm3_with_salt, md5, sha256, sm3};

pub use symmetric::{
    Algorithm, AlgorithmDescriptor, IvPolicy, Mode, Padding, aes256_decrypt, aes256_encrypt,
    aes_decrypt, aes_encrypt, decrypt, decrypt_bytes, des_decrypt, des_encrypt, encrypt,
    encrypt_bytes, idea_decrypt, idea_encrypt, rc4_decrypt, rc4_encrypt, rc5_decrypt, rc5_encrypt,
    triple_des_decrypt, triple_des_encrypt, validate_key,
};

pub use asymmetric::{
    RsaKeyPair, RsaPrivateKeyWrapper, RsaPublicKeyWrapper, export_private_key, export_public_key,
    generate_rsa_keypair, get_private_key, get_public_key, rsa_decrypt, rsa_encrypt,
};

/// The version of the `cipher-kit` crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
