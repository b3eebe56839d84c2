//! RC5-64 分组引擎（字长 64 位，分组 16 字节，轮数运行期可配）
//!
//! 生态中的 RC5 实现把轮数固定在类型层面，无法表达运行期可配的轮数，
//! 因此在此按参考语义实现密钥编排与分组变换。字节序为小端。

use crate::common::errors::{Error, Result};

const P64: u64 = 0xb7e1_5162_8aed_2a6b;
const Q64: u64 = 0x9e37_79b9_7f4a_7c15;
const BYTES_PER_WORD: usize = 8;

/// RC5-64 的分组大小：两个 64 位字
pub const BLOCK_SIZE: usize = 2 * BYTES_PER_WORD;

/// 已完成密钥编排的 RC5-64 引擎
///
/// 引擎本身无方向性，同一实例可用于加密和解密。
pub struct Rc5Engine {
    s: Vec<u64>,
    rounds: usize,
}

impl Rc5Engine {
    /// 用给定密钥和轮数完成密钥编排
    ///
    /// 轮数必须在 1..=255 之间；少于 12 轮的 RC5 已知存在弱点，
    /// 但为兼容既有密文不在此处强制。
    pub fn new(key: &[u8], rounds: usize) -> Result<Self> {
        if !(1..=255).contains(&rounds) {
            return Err(Error::Cipher(format!(
                "unsupported RC5 round count: {}",
                rounds
            )));
        }

        // 密钥字节按小端填入 L 数组
        let mut l = vec![0u64; key.len().div_ceil(BYTES_PER_WORD).max(1)];
        for i in (0..key.len()).rev() {
            l[i / BYTES_PER_WORD] =
                (l[i / BYTES_PER_WORD] << 8).wrapping_add(u64::from(key[i]));
        }

        let table_len = 2 * (rounds + 1);
        let mut s = vec![0u64; table_len];
        s[0] = P64;
        for i in 1..table_len {
            s[i] = s[i - 1].wrapping_add(Q64);
        }

        // 混合 S 与 L，迭代次数为两者长度较大者的三倍
        let iterations = 3 * table_len.max(l.len());
        let (mut a, mut b) = (0u64, 0u64);
        let (mut i, mut j) = (0usize, 0usize);
        for _ in 0..iterations {
            a = s[i].wrapping_add(a).wrapping_add(b).rotate_left(3);
            s[i] = a;
            let shift = (a.wrapping_add(b) & 63) as u32;
            b = l[j].wrapping_add(a).wrapping_add(b).rotate_left(shift);
            l[j] = b;
            i = (i + 1) % table_len;
            j = (j + 1) % l.len();
        }

        Ok(Self { s, rounds })
    }

    /// 就地加密一个 16 字节分组
    pub fn encrypt_block(&self, block: &mut [u8]) {
        debug_assert_eq!(block.len(), BLOCK_SIZE);
        let mut a = read_word(&block[..BYTES_PER_WORD]).wrapping_add(self.s[0]);
        let mut b = read_word(&block[BYTES_PER_WORD..]).wrapping_add(self.s[1]);
        for r in 1..=self.rounds {
            a = (a ^ b)
                .rotate_left((b & 63) as u32)
                .wrapping_add(self.s[2 * r]);
            b = (b ^ a)
                .rotate_left((a & 63) as u32)
                .wrapping_add(self.s[2 * r + 1]);
        }
        block[..BYTES_PER_WORD].copy_from_slice(&a.to_le_bytes());
        block[BYTES_PER_WORD..].copy_from_slice(&b.to_le_bytes());
    }

    /// 就地解密一个 16 字节分组
    pub fn decrypt_block(&self, block: &mut [u8]) {
        debug_assert_eq!(block.len(), BLOCK_SIZE);
        let mut a = read_word(&block[..BYTES_PER_WORD]);
        let mut b = read_word(&block[BYTES_PER_WORD..]);
        for r in (1..=self.rounds).rev() {
            b = b
                .wrapping_sub(self.s[2 * r + 1])
                .rotate_right((a & 63) as u32)
                ^ a;
            a = a
                .wrapping_sub(self.s[2 * r])
                .rotate_right((b & 63) as u32)
                ^ b;
        }
        b = b.wrapping_sub(self.s[1]);
        a = a.wrapping_sub(self.s[0]);
        block[..BYTES_PER_WORD].copy_from_slice(&a.to_le_bytes());
        block[BYTES_PER_WORD..].copy_from_slice(&b.to_le_bytes());
    }
}

fn read_word(bytes: &[u8]) -> u64 {
    let mut word = [0u8; BYTES_PER_WORD];
    word.copy_from_slice(bytes);
    u64::from_le_bytes(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_block_roundtrip() {
        let engine = Rc5Engine::new(b"0123456789abcdef", 12).unwrap();
        let mut block = *b"exactly16bytes!!";
        let original = block;
        engine.encrypt_block(&mut block);
        assert_ne!(block, original);
        engine.decrypt_block(&mut block);
        assert_eq!(block, original);
    }

    #[test]
    fn test_roundtrip_across_round_counts() {
        for rounds in [1, 8, 12, 16, 255] {
            let engine = Rc5Engine::new(b"variable-len-key", rounds).unwrap();
            let mut block = [0x5au8; BLOCK_SIZE];
            engine.encrypt_block(&mut block);
            engine.decrypt_block(&mut block);
            assert_eq!(block, [0x5au8; BLOCK_SIZE]);
        }
    }

    #[test]
    fn test_round_count_changes_ciphertext() {
        let twelve = Rc5Engine::new(b"key", 12).unwrap();
        let sixteen = Rc5Engine::new(b"key", 16).unwrap();
        let mut a = [1u8; BLOCK_SIZE];
        let mut b = [1u8; BLOCK_SIZE];
        twelve.encrypt_block(&mut a);
        sixteen.encrypt_block(&mut b);
        assert_ne!(a, b);
    }

    #[test]
    fn test_short_key_is_accepted() {
        // 密钥不足一个字时按零扩展
        let engine = Rc5Engine::new(b"k", 12).unwrap();
        let mut block = [0u8; BLOCK_SIZE];
        engine.encrypt_block(&mut block);
        engine.decrypt_block(&mut block);
        assert_eq!(block, [0u8; BLOCK_SIZE]);
    }

    #[test]
    fn test_rejects_zero_rounds() {
        assert!(matches!(
            Rc5Engine::new(b"key", 0),
            Err(Error::Cipher(_))
        ));
    }

    #[test]
    fn test_rejects_oversized_rounds() {
        assert!(Rc5Engine::new(b"key", 256).is_err());
    }
}
