//! 非对称加密模块

pub mod rsa;

pub use self::rsa::{
    RsaKeyPair, RsaPrivateKeyWrapper, RsaPublicKeyWrapper, export_private_key, export_public_key,
    generate_rsa_keypair, get_private_key, get_public_key, rsa_decrypt, rsa_encrypt,
};
