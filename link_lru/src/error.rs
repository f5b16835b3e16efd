//! Error definitions for link_lru
//! link_lru 错误定义

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
  /// Capacity of 0 cannot hold anything
  /// 容量为 0 无法存放任何条目
  #[error("limit must be >= 1 / 容量上限必须 >= 1")]
  ZeroLimit,

  /// Bulk load never evicts, so too many keys is a caller error
  /// 批量加载不淘汰，键过多属于调用方错误
  #[error("bulk load of {len} entries exceeds limit {limit} / 批量加载 {len} 条超出上限 {limit}")]
  CapacityExceeded { len: usize, limit: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
