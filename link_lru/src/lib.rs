//! Arena-linked LRU cache / 基于数组链表的 LRU 缓存
//!
//! # Features
//!
//! - `hashlink` (default): [`Lru`], a `hashlink::LruCache` backed [`Cache`] used as a
//!   reference model for [`LinkLru`]; use [`LinkLru`] for real caching
//! - `serde`: serialize [`LinkLru`] and [`Pair`] as `{key, value}` records
//!
//! [`LinkLru`] is single-threaded; share it behind a lock or an owning task.
//! [`LinkLru`] 为单线程结构；跨线程共享需外部加锁或由单一任务持有。

#![cfg_attr(docsrs, feature(doc_cfg))]

mod entry;
mod error;
mod iter;
mod list;
mod lru;
mod pair;

#[cfg(feature = "hashlink")]
mod hash;

pub use error::{Error, Result};
#[cfg(feature = "hashlink")]
pub use hash::Lru;
pub use iter::{IntoIter, Iter, Keys, Values};
pub use lru::LinkLru;
pub use pair::Pair;

/// Cache trait for basic operations
/// 缓存基本操作 trait
///
/// # Complexity
/// 复杂度
///
/// All implementations should provide:
/// 所有实现应提供：
/// - get: O(1), marks the key as most recently used
/// - set: O(1) amortized
/// - rm: O(1)
pub trait Cache<K, V> {
  /// Get value by key
  /// 按键获取值
  fn get(&mut self, key: &K) -> Option<&V>;

  /// Insert key-value pair
  /// 插入键值对
  fn set(&mut self, key: K, val: V);

  /// Remove by key
  /// 按键删除
  fn rm(&mut self, key: &K);
}
