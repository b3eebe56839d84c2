//! 加密后端的一次性初始化
//!
//! 原始实现依赖静态块注册安全提供者。这里改为显式的初始化入口：
//! 由 [`std::sync::OnceLock`] 保证只执行一次，可由宿主显式调用，
//! 也会在第一次消耗随机数的操作前被惰性触发。

use std::sync::OnceLock;

use rand_core::{OsRng, RngCore};

use crate::common::errors::{Error, Result};

static BACKEND: OnceLock<std::result::Result<(), String>> = OnceLock::new();

/// 显式初始化加密后端
///
/// 幂等且线程安全；并发首次调用只会执行一次探测。宿主不调用也没问题，
/// 第一次需要随机数的操作会自行触发。
pub fn init() -> Result<()> {
    ensure_backend()
}

/// 确认后端可用，探测操作系统随机源
///
/// 熵源不可用时在首次使用处立即失败，而不是拖到生成 nonce 的时刻。
pub(crate) fn ensure_backend() -> Result<()> {
    let state = BACKEND.get_or_init(|| {
        let mut probe = [0u8; 16];
        OsRng
            .try_fill_bytes(&mut probe)
            .map_err(|e| format!("OS random source unavailable: {}", e))
    });
    state
        .clone()
        .map_err(|msg| Error::Cipher(format!("backend initialization failed: {}", msg)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init().unwrap();
        init().unwrap();
        ensure_backend().unwrap();
    }

    #[test]
    fn test_concurrent_first_use() {
        let handles: Vec<_> = (0..8).map(|_| std::thread::spawn(|| init().is_ok())).collect();
        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }
}
