//! 对称加密套件：按算法描述符分发的统一加解密入口
//!
//! 所有模式共用一个信封约定：GCM 为 `nonce(12) || 密文 || tag(16)`，
//! 其余模式的信封就是密文本身（补位已包含在内），对外一律 Base64 文本。
//! 解密严格按加密产生的布局还原。

use aes::Aes128;
use aes::cipher::block_padding::{Pkcs7, UnpadError};
use aes::cipher::{BlockDecryptMut, BlockEncryptMut, InvalidLength, KeyIvInit};
use aes_gcm::aead::{Aead, KeyInit, OsRng};
use aes_gcm::{AeadCore, Aes256Gcm, Nonce};
use des::{Des, TdesEde3};
use idea::Idea;

use crate::common::codec::{decode_base64, encode_base64};
use crate::common::errors::{Error, Result};
use crate::common::provider::ensure_backend;
use crate::symmetric::descriptor::{Algorithm, validate_key};
use crate::symmetric::primitives::rc4::Rc4;
use crate::symmetric::primitives::rc5::{self, Rc5Engine};

const GCM_NONCE_SIZE: usize = 12;
const GCM_TAG_SIZE: usize = 16;
// 固定全零 IV 是既有线格式的一部分，随机化会让旧密文无法解开
const CBC_ZERO_IV: [u8; 8] = [0u8; 8];

type Aes128EcbEnc = ecb::Encryptor<Aes128>;
type Aes128EcbDec = ecb::Decryptor<Aes128>;
type DesCbcEnc = cbc::Encryptor<Des>;
type DesCbcDec = cbc::Decryptor<Des>;
type TdesCbcEnc = cbc::Encryptor<TdesEde3>;
type TdesCbcDec = cbc::Decryptor<TdesEde3>;
type IdeaCbcEnc = cbc::Encryptor<Idea>;
type IdeaCbcDec = cbc::Decryptor<Idea>;

/// 加密 UTF-8 文本，返回 Base64 信封
///
/// 密钥校验先于任何密码构造执行。
pub fn encrypt(algorithm: Algorithm, plaintext: &str, key: &str) -> Result<String> {
    let envelope = encrypt_bytes(algorithm, plaintext.as_bytes(), key.as_bytes())?;
    Ok(encode_base64(&envelope))
}

/// 解密 Base64 信封，返回 UTF-8 文本
pub fn decrypt(algorithm: Algorithm, ciphertext: &str, key: &str) -> Result<String> {
    let envelope = decode_base64(ciphertext)?;
    let plaintext = decrypt_bytes(algorithm, &envelope, key.as_bytes())?;
    Ok(String::from_utf8(plaintext)?)
}

/// 字节层加密入口，产生可传输的信封字节
pub fn encrypt_bytes(algorithm: Algorithm, plaintext: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    validate_key(algorithm.descriptor(), key)?;
    match algorithm {
        Algorithm::Aes128Ecb => {
            let cipher = Aes128EcbEnc::new_from_slice(key).map_err(invalid_key)?;
            Ok(cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
        }
        Algorithm::Aes256Gcm => gcm_encrypt(plaintext, key),
        Algorithm::DesCbc => {
            let cipher = DesCbcEnc::new_from_slices(key, &CBC_ZERO_IV).map_err(invalid_key)?;
            Ok(cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
        }
        Algorithm::TripleDesCbc => {
            let cipher = TdesCbcEnc::new_from_slices(key, &CBC_ZERO_IV).map_err(invalid_key)?;
            Ok(cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
        }
        Algorithm::Rc5 { rounds } => rc5_apply(plaintext, key, rounds, true),
        Algorithm::IdeaCbc => {
            let cipher = IdeaCbcEnc::new_from_slices(key, &CBC_ZERO_IV).map_err(invalid_key)?;
            Ok(cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
        }
        Algorithm::Rc4 => {
            let mut cipher = Rc4::new(key)?;
            let mut buffer = plaintext.to_vec();
            cipher.apply_keystream(&mut buffer);
            Ok(buffer)
        }
    }
}

/// 字节层解密入口，还原信封为明文字节
///
/// GCM 标签校验失败返回 [`Error::Integrity`]，绝不返回部分解密的内容；
/// 其余模式的补位失败返回 [`Error::Cipher`]。
pub fn decrypt_bytes(algorithm: Algorithm, envelope: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    validate_key(algorithm.descriptor(), key)?;
    match algorithm {
        Algorithm::Aes128Ecb => {
            let cipher = Aes128EcbDec::new_from_slice(key).map_err(invalid_key)?;
            cipher
                .decrypt_padded_vec_mut::<Pkcs7>(envelope)
                .map_err(bad_padding)
        }
        Algorithm::Aes256Gcm => gcm_decrypt(envelope, key),
        Algorithm::DesCbc => {
            let cipher = DesCbcDec::new_from_slices(key, &CBC_ZERO_IV).map_err(invalid_key)?;
            cipher
                .decrypt_padded_vec_mut::<Pkcs7>(envelope)
                .map_err(bad_padding)
        }
        Algorithm::TripleDesCbc => {
            let cipher = TdesCbcDec::new_from_slices(key, &CBC_ZERO_IV).map_err(invalid_key)?;
            cipher
                .decrypt_padded_vec_mut::<Pkcs7>(envelope)
                .map_err(bad_padding)
        }
        Algorithm::Rc5 { rounds } => rc5_apply(envelope, key, rounds, false),
        Algorithm::IdeaCbc => {
            let cipher = IdeaCbcDec::new_from_slices(key, &CBC_ZERO_IV).map_err(invalid_key)?;
            cipher
                .decrypt_padded_vec_mut::<Pkcs7>(envelope)
                .map_err(bad_padding)
        }
        Algorithm::Rc4 => {
            let mut cipher = Rc4::new(key)?;
            let mut buffer = envelope.to_vec();
            cipher.apply_keystream(&mut buffer);
            Ok(buffer)
        }
    }
}

/// AES-256-GCM 加密：每次调用生成新的 12 字节随机 nonce，前置于密文
fn gcm_encrypt(plaintext: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    ensure_backend()?;
    let cipher = Aes256Gcm::new_from_slice(key).map_err(invalid_key)?;
    let nonce = Aes256Gcm::generate_nonce(&mut OsRng);

    // Aead::encrypt 的输出已是 密文 || tag
    let ciphertext = cipher
        .encrypt(&nonce, plaintext)
        .map_err(|_| Error::Cipher("AEAD encryption failed".to_string()))?;

    let mut envelope = Vec::with_capacity(GCM_NONCE_SIZE + ciphertext.len());
    envelope.extend_from_slice(nonce.as_slice());
    envelope.extend_from_slice(&ciphertext);
    Ok(envelope)
}

/// AES-256-GCM 解密：拆出前置 nonce，标签校验失败即整体失败
fn gcm_decrypt(envelope: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    if envelope.len() < GCM_NONCE_SIZE + GCM_TAG_SIZE {
        return Err(Error::Cipher(
            "ciphertext is too short to contain nonce and tag".to_string(),
        ));
    }
    let cipher = Aes256Gcm::new_from_slice(key).map_err(invalid_key)?;
    let (nonce, ciphertext) = envelope.split_at(GCM_NONCE_SIZE);
    cipher
        .decrypt(Nonce::from_slice(nonce), ciphertext)
        .map_err(|_| Error::Integrity)
}

/// RC5-64 逐块处理：加密时尾部补零到分组倍数，解密后剥离尾部零字节
///
/// 剥离对以零字节结尾的明文是有损的，这是所选补位方案固有的歧义，
/// 为线格式兼容而保留。
fn rc5_apply(input: &[u8], key: &[u8], rounds: usize, encrypting: bool) -> Result<Vec<u8>> {
    let engine = Rc5Engine::new(key, rounds)?;

    if encrypting {
        let padded_len = input.len().div_ceil(rc5::BLOCK_SIZE) * rc5::BLOCK_SIZE;
        let mut buffer = vec![0u8; padded_len];
        buffer[..input.len()].copy_from_slice(input);
        for block in buffer.chunks_exact_mut(rc5::BLOCK_SIZE) {
            engine.encrypt_block(block);
        }
        Ok(buffer)
    } else {
        if input.len() % rc5::BLOCK_SIZE != 0 {
            return Err(Error::Cipher(
                "RC5 ciphertext length is not a multiple of the block size".to_string(),
            ));
        }
        let mut buffer = input.to_vec();
        for block in buffer.chunks_exact_mut(rc5::BLOCK_SIZE) {
            engine.decrypt_block(block);
        }
        let unpadded_len = buffer.iter().rposition(|&b| b != 0).map_or(0, |p| p + 1);
        buffer.truncate(unpadded_len);
        Ok(buffer)
    }
}

fn invalid_key(err: InvalidLength) -> Error {
    Error::Cipher(format!("key rejected by cipher: {}", err))
}

fn bad_padding(_: UnpadError) -> Error {
    Error::Cipher("padding check failed on decrypt".to_string())
}
