//! 无注册表实现可用的底层引擎
//!
//! 这里只放生态 crate 无法按运行期参数表达的两个算法；
//! 其余算法全部委托给既有的密码实现。

pub mod rc4;
pub mod rc5;
