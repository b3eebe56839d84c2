//! 通用模块，包含错误处理、编解码、后端初始化和工具类型

pub mod codec;
pub mod errors;
pub mod provider;
pub mod utils;

pub use self::codec::{decode_base64, encode_base64, encode_hex};
pub use self::errors::{Error, Result};
pub use self::provider::init;
pub use self::utils::ZeroizingVec;
