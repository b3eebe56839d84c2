//! RC4/ARC4 流加密引擎（密钥长度运行期可变）
//!
//! 生态实现把密钥长度固定在类型层面，这里按标准 KSA/PRGA 实现以
//! 接受任意长度的调用方密钥。RC4 已被主流标准废弃（RFC 7465），
//! 仅用于遗留系统兼容。

use crate::common::errors::{Error, Result};

/// 已完成密钥编排的 RC4 引擎
///
/// 加密与解密是同一个异或密钥流操作。
pub struct Rc4 {
    state: [u8; 256],
    i: u8,
    j: u8,
}

impl Rc4 {
    /// 用 1 到 256 字节的密钥完成密钥编排
    pub fn new(key: &[u8]) -> Result<Self> {
        if key.is_empty() || key.len() > 256 {
            return Err(Error::Cipher(format!(
                "RC4 key must be between 1 and 256 bytes, got {}",
                key.len()
            )));
        }

        let mut state = [0u8; 256];
        for (i, slot) in state.iter_mut().enumerate() {
            *slot = i as u8;
        }
        let mut j = 0u8;
        for i in 0..256 {
            j = j.wrapping_add(state[i]).wrapping_add(key[i % key.len()]);
            state.swap(i, j as usize);
        }

        Ok(Self { state, i: 0, j: 0 })
    }

    /// 将密钥流异或到缓冲区上（就地加密或解密）
    pub fn apply_keystream(&mut self, buffer: &mut [u8]) {
        for byte in buffer {
            self.i = self.i.wrapping_add(1);
            self.j = self.j.wrapping_add(self.state[self.i as usize]);
            self.state.swap(self.i as usize, self.j as usize);
            let index = self.state[self.i as usize].wrapping_add(self.state[self.j as usize]);
            *byte ^= self.state[index as usize];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vector_key_plaintext() {
        // RFC 6229 风格的经典测试向量：key="Key", plaintext="Plaintext"
        let mut cipher = Rc4::new(b"Key").unwrap();
        let mut buffer = *b"Plaintext";
        cipher.apply_keystream(&mut buffer);
        assert_eq!(
            buffer,
            [0xbb, 0xf3, 0x16, 0xe8, 0xd9, 0x40, 0xaf, 0x0a, 0xd3]
        );
    }

    #[test]
    fn test_known_vector_wiki() {
        let mut cipher = Rc4::new(b"Wiki").unwrap();
        let mut buffer = *b"pedia";
        cipher.apply_keystream(&mut buffer);
        assert_eq!(buffer, [0x10, 0x21, 0xbf, 0x04, 0x20]);
    }

    #[test]
    fn test_roundtrip() {
        let mut encryptor = Rc4::new(b"shared secret").unwrap();
        let mut buffer = b"stream cipher payload".to_vec();
        encryptor.apply_keystream(&mut buffer);

        let mut decryptor = Rc4::new(b"shared secret").unwrap();
        decryptor.apply_keystream(&mut buffer);
        assert_eq!(buffer, b"stream cipher payload");
    }

    #[test]
    fn test_rejects_empty_key() {
        assert!(matches!(Rc4::new(b""), Err(Error::Cipher(_))));
    }

    #[test]
    fn test_rejects_oversized_key() {
        assert!(Rc4::new(&[0u8; 257]).is_err());
    }
}
