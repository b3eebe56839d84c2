//! 算法描述符与密钥校验
//!
//! 每种受支持的密码配置对应一个不可变的 [`AlgorithmDescriptor`] 静态实例，
//! 集中列出分组大小、密钥长度要求、模式、补位方案与 IV 策略。
//! 加解密入口按描述符分发，避免逐算法的重复调用点。

use crate::common::errors::{Error, Result};

/// 受支持的对称算法
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// AES-128/ECB/PKCS#7（遗留，无 IV，不推荐）
    Aes128Ecb,
    /// AES-256/GCM，唯一提供完整性保护的模式
    Aes256Gcm,
    /// DES/CBC/PKCS#7，固定全零 IV
    DesCbc,
    /// 3DES(EDE3)/CBC/PKCS#7，固定全零 IV
    TripleDesCbc,
    /// RC5-64，轮数运行期可配，逐块处理（等效 ECB），尾部补零
    Rc5 { rounds: usize },
    /// IDEA/CBC/PKCS#7，固定全零 IV
    IdeaCbc,
    /// RC4 流加密，无 IV 无补位
    Rc4,
}

/// 分组密码工作模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Ecb,
    Cbc,
    Gcm,
    Stream,
}

/// 补位方案
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Padding {
    /// PKCS#7（对 8/16 字节分组等同于 PKCS#5）
    Pkcs7,
    /// 尾部补零，解密时剥离尾部零字节（有损，见 RC5 文档）
    Zero,
    /// 无补位（AEAD 或流加密）
    None,
}

/// IV/nonce 的生成策略
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IvPolicy {
    /// 无 IV（ECB、流加密）
    None,
    /// 固定全零 IV，按字节数给出
    ///
    /// 已知弱点，为线格式兼容而保留；随机化会破坏既有密文。
    FixedZero(usize),
    /// 每次加密调用由安全随机源生成的新 nonce，按字节数给出，前置于密文
    RandomNonce(usize),
}

/// 一种密码配置的完整静态描述
#[derive(Debug, Clone, Copy)]
pub struct AlgorithmDescriptor {
    pub name: &'static str,
    /// 分组大小（字节）；流加密为 1
    pub block_size: usize,
    /// 声明的固定密钥长度；`None` 表示不做校验，由底层密码自行决定
    pub key_length: Option<usize>,
    pub mode: Mode,
    pub padding: Padding,
    pub authenticated: bool,
    pub iv: IvPolicy,
}

static AES_128_ECB: AlgorithmDescriptor = AlgorithmDescriptor {
    name: "AES-128/ECB",
    block_size: 16,
    key_length: None,
    mode: Mode::Ecb,
    padding: Padding::Pkcs7,
    authenticated: false,
    iv: IvPolicy::None,
};

static AES_256_GCM: AlgorithmDescriptor = AlgorithmDescriptor {
    name: "AES-256/GCM",
    block_size: 16,
    key_length: Some(32),
    mode: Mode::Gcm,
    padding: Padding::None,
    authenticated: true,
    iv: IvPolicy::RandomNonce(12),
};

static DES_CBC: AlgorithmDescriptor = AlgorithmDescriptor {
    name: "DES/CBC",
    block_size: 8,
    key_length: None,
    mode: Mode::Cbc,
    padding: Padding::Pkcs7,
    authenticated: false,
    iv: IvPolicy::FixedZero(8),
};

static TRIPLE_DES_CBC: AlgorithmDescriptor = AlgorithmDescriptor {
    name: "3DES/CBC",
    block_size: 8,
    key_length: Some(24),
    mode: Mode::Cbc,
    padding: Padding::Pkcs7,
    authenticated: false,
    iv: IvPolicy::FixedZero(8),
};

static RC5_64: AlgorithmDescriptor = AlgorithmDescriptor {
    name: "RC5-64",
    block_size: 16,
    key_length: None,
    mode: Mode::Ecb,
    padding: Padding::Zero,
    authenticated: false,
    iv: IvPolicy::None,
};

static IDEA_CBC: AlgorithmDescriptor = AlgorithmDescriptor {
    name: "IDEA/CBC",
    block_size: 8,
    key_length: None,
    mode: Mode::Cbc,
    padding: Padding::Pkcs7,
    authenticated: false,
    iv: IvPolicy::FixedZero(8),
};

static RC4: AlgorithmDescriptor = AlgorithmDescriptor {
    name: "RC4",
    block_size: 1,
    key_length: None,
    mode: Mode::Stream,
    padding: Padding::None,
    authenticated: false,
    iv: IvPolicy::None,
};

impl Algorithm {
    /// 返回该算法的静态描述符
    pub fn descriptor(&self) -> &'static AlgorithmDescriptor {
        match self {
            Algorithm::Aes128Ecb => &AES_128_ECB,
            Algorithm::Aes256Gcm => &AES_256_GCM,
            Algorithm::DesCbc => &DES_CBC,
            Algorithm::TripleDesCbc => &TRIPLE_DES_CBC,
            Algorithm::Rc5 { .. } => &RC5_64,
            Algorithm::IdeaCbc => &IDEA_CBC,
            Algorithm::Rc4 => &RC4,
        }
    }

    /// 按描述符名称查找算法；RC5 使用默认的 12 轮
    pub fn from_name(name: &str) -> Result<Algorithm> {
        match name {
            "AES-128/ECB" => Ok(Algorithm::Aes128Ecb),
            "AES-256/GCM" => Ok(Algorithm::Aes256Gcm),
            "DES/CBC" => Ok(Algorithm::DesCbc),
            "3DES/CBC" => Ok(Algorithm::TripleDesCbc),
            "RC5-64" => Ok(Algorithm::Rc5 { rounds: 12 }),
            "IDEA/CBC" => Ok(Algorithm::IdeaCbc),
            "RC4" => Ok(Algorithm::Rc4),
            other => Err(Error::UnsupportedAlgorithm(other.to_string())),
        }
    }
}

/// 在调用底层密码之前校验密钥长度
///
/// 仅声明了固定长度的算法（AES-256/GCM、3DES）会被检查；其余算法原样放行，
/// 保留原始实现宽松但有风险的行为，由底层密码自行拒绝不可用的密钥。
pub fn validate_key(descriptor: &AlgorithmDescriptor, key: &[u8]) -> Result<()> {
    match descriptor.key_length {
        Some(expected) if key.len() != expected => Err(Error::KeyLength {
            expected,
            actual: key.len(),
        }),
        _ => Ok(()),
    }
}
