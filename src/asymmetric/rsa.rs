//! 基于 RSA PKCS#1 v1.5 的单块非对称加解密
//!
//! 密钥以 DER 字节在包装器内携带：公钥为 X.509 SPKI，私钥为 PKCS#8，
//! 对外统一以 Base64 文本导入导出。明文不得超过 `密钥字节数 - 11`，
//! 超限即失败，不截断也不分块（分块属于上层混合加密的职责）。

use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey, EncodePrivateKey, EncodePublicKey};
use rsa::rand_core::OsRng as RsaOsRng;
use rsa::traits::PublicKeyParts;
use rsa::{Pkcs1v15Encrypt, RsaPrivateKey, RsaPublicKey};
use serde::{Deserialize, Serialize};

use crate::common::codec::{decode_base64, encode_base64};
use crate::common::errors::{Error, Result};
use crate::common::provider::ensure_backend;
use crate::common::utils::ZeroizingVec;

const RSA_KEY_BITS: usize = 2048;
// PKCS#1 v1.5 每块保留 11 字节补位开销
const PKCS1_PADDING_OVERHEAD: usize = 11;

/// RSA 公钥包装器（X.509 SPKI DER），提供序列化支持
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RsaPublicKeyWrapper(pub Vec<u8>);

impl RsaPublicKeyWrapper {
    /// 获取内部 DER 编码的公钥数据
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// RSA 私钥包装器（PKCS#8 DER），提供序列化和安全擦除支持
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RsaPrivateKeyWrapper(pub ZeroizingVec);

impl RsaPrivateKeyWrapper {
    /// 获取内部 DER 编码的私钥数据
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// 一对可独立序列化的 RSA 密钥
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RsaKeyPair {
    pub public: RsaPublicKeyWrapper,
    pub private: RsaPrivateKeyWrapper,
}

/// 生成 2048 位 RSA 密钥对
pub fn generate_rsa_keypair() -> Result<RsaKeyPair> {
    ensure_backend()?;
    let mut rng = RsaOsRng;

    let private_key = RsaPrivateKey::new(&mut rng, RSA_KEY_BITS)
        .map_err(|e| Error::Cipher(format!("RSA key generation failed: {}", e)))?;
    let public_key = RsaPublicKey::from(&private_key);

    let public_der = public_key
        .to_public_key_der()
        .map_err(|e| Error::KeyFormat(format!("RSA public key DER export failed: {}", e)))?;
    let private_der = private_key
        .to_pkcs8_der()
        .map_err(|e| Error::KeyFormat(format!("RSA private key DER export failed: {}", e)))?;

    Ok(RsaKeyPair {
        public: RsaPublicKeyWrapper(public_der.as_bytes().to_vec()),
        private: RsaPrivateKeyWrapper(ZeroizingVec(private_der.as_bytes().to_vec())),
    })
}

/// 用公钥加密单块文本，返回 Base64 密文
///
/// 明文超过 `密钥字节数 - 11` 时在调用底层原语之前返回
/// [`Error::PlaintextTooLarge`]。
pub fn rsa_encrypt(plaintext: &str, public_key: &RsaPublicKeyWrapper) -> Result<String> {
    let key = parse_public_key(&public_key.0)?;
    let limit = key.size() - PKCS1_PADDING_OVERHEAD;
    let data = plaintext.as_bytes();
    if data.len() > limit {
        return Err(Error::PlaintextTooLarge {
            limit,
            actual: data.len(),
        });
    }

    ensure_backend()?;
    let mut rng = RsaOsRng;
    let ciphertext = key
        .encrypt(&mut rng, Pkcs1v15Encrypt, data)
        .map_err(|e| Error::Cipher(format!("RSA encryption failed: {}", e)))?;
    Ok(encode_base64(&ciphertext))
}

/// 用私钥解密 Base64 密文，补位或格式不匹配返回 [`Error::Cipher`]
pub fn rsa_decrypt(ciphertext: &str, private_key: &RsaPrivateKeyWrapper) -> Result<String> {
    let key = parse_private_key(&private_key.0)?;
    let decoded = decode_base64(ciphertext)?;
    let plaintext = key
        .decrypt(Pkcs1v15Encrypt, &decoded)
        .map_err(|e| Error::Cipher(format!("RSA decryption failed: {}", e)))?;
    Ok(String::from_utf8(plaintext)?)
}

/// 从 Base64 的 X.509 SPKI DER 导入公钥
pub fn get_public_key(der_base64: &str) -> Result<RsaPublicKeyWrapper> {
    let der = decode_base64(der_base64)?;
    parse_public_key(&der)?;
    Ok(RsaPublicKeyWrapper(der))
}

/// 从 Base64 的 PKCS#8 DER 导入私钥
pub fn get_private_key(der_base64: &str) -> Result<RsaPrivateKeyWrapper> {
    let der = decode_base64(der_base64)?;
    parse_private_key(&der)?;
    Ok(RsaPrivateKeyWrapper(ZeroizingVec(der)))
}

/// 导出公钥为 Base64 的 X.509 SPKI DER 文本
pub fn export_public_key(public_key: &RsaPublicKeyWrapper) -> String {
    encode_base64(&public_key.0)
}

/// 导出私钥为 Base64 的 PKCS#8 DER 文本
pub fn export_private_key(private_key: &RsaPrivateKeyWrapper) -> String {
    encode_base64(&private_key.0)
}

fn parse_public_key(der: &[u8]) -> Result<RsaPublicKey> {
    RsaPublicKey::from_public_key_der(der)
        .map_err(|e| Error::KeyFormat(format!("failed to parse RSA public key: {}", e)))
}

fn parse_private_key(der: &[u8]) -> Result<RsaPrivateKey> {
    RsaPrivateKey::from_pkcs8_der(der)
        .map_err(|e| Error::KeyFormat(format!("failed to parse RSA private key: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_keys() -> RsaKeyPair {
        generate_rsa_keypair().unwrap()
    }

    #[test]
    fn test_rsa_encryption_roundtrip() {
        let pair = setup_keys();
        let ciphertext = rsa_encrypt("some secret data", &pair.public).unwrap();
        let decrypted = rsa_decrypt(&ciphertext, &pair.private).unwrap();
        assert_eq!(decrypted, "some secret data");
    }

    #[test]
    fn test_rsa_encrypt_empty_text() {
        let pair = setup_keys();
        let ciphertext = rsa_encrypt("", &pair.public).unwrap();
        assert_eq!(rsa_decrypt(&ciphertext, &pair.private).unwrap(), "");
    }

    #[test]
    fn test_rsa_plaintext_at_block_capacity() {
        let pair = setup_keys();
        // 2048 位密钥：256 - 11 = 245 字节是单块上限
        let at_limit = "a".repeat(245);
        let ciphertext = rsa_encrypt(&at_limit, &pair.public).unwrap();
        assert_eq!(rsa_decrypt(&ciphertext, &pair.private).unwrap(), at_limit);
    }

    #[test]
    fn test_rsa_plaintext_one_byte_over_capacity() {
        let pair = setup_keys();
        let over_limit = "a".repeat(246);
        let result = rsa_encrypt(&over_limit, &pair.public);
        assert!(matches!(
            result,
            Err(Error::PlaintextTooLarge {
                limit: 245,
                actual: 246
            })
        ));
    }

    #[test]
    fn test_rsa_decrypt_wrong_key_fails() {
        let pair = setup_keys();
        let other = setup_keys();
        let ciphertext = rsa_encrypt("secret", &pair.public).unwrap();
        let result = rsa_decrypt(&ciphertext, &other.private);
        assert!(matches!(result, Err(Error::Cipher(_))));
    }

    #[test]
    fn test_rsa_decrypt_tampered_ciphertext_fails() {
        let pair = setup_keys();
        let ciphertext = rsa_encrypt("original text", &pair.public).unwrap();
        let mut raw = decode_base64(&ciphertext).unwrap();
        raw[0] ^= 0xff;
        let result = rsa_decrypt(&encode_base64(&raw), &pair.private);
        assert!(matches!(result, Err(Error::Cipher(_))));
    }

    #[test]
    fn test_key_export_import_roundtrip() {
        let pair = setup_keys();

        let public_b64 = export_public_key(&pair.public);
        let private_b64 = export_private_key(&pair.private);

        let imported_public = get_public_key(&public_b64).unwrap();
        let imported_private = get_private_key(&private_b64).unwrap();

        assert_eq!(pair.public, imported_public);
        assert_eq!(pair.private, imported_private);

        let ciphertext = rsa_encrypt("via imported keys", &imported_public).unwrap();
        assert_eq!(
            rsa_decrypt(&ciphertext, &imported_private).unwrap(),
            "via imported keys"
        );
    }

    #[test]
    fn test_import_rejects_malformed_base64() {
        let result = get_public_key("not!!base64");
        assert!(matches!(result, Err(Error::Decode(_))));
    }

    #[test]
    fn test_import_rejects_malformed_der() {
        let bogus = encode_base64(b"this is not DER at all");
        assert!(matches!(get_public_key(&bogus), Err(Error::KeyFormat(_))));
        assert!(matches!(get_private_key(&bogus), Err(Error::KeyFormat(_))));
    }

    #[test]
    fn test_public_and_private_der_are_not_interchangeable() {
        let pair = setup_keys();
        let public_b64 = export_public_key(&pair.public);
        assert!(matches!(
            get_private_key(&public_b64),
            Err(Error::KeyFormat(_))
        ));
    }
}
