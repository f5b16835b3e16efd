//! Reference model over hashlink::LruCache
//! 基于 hashlink::LruCache 的参照模型
//!
//! Not a replacement for [`LinkLru`](crate::LinkLru): it has no bulk load,
//! ordered snapshot or `evict_oldest` of its own. It exists to cross-check
//! [`LinkLru`](crate::LinkLru) eviction order against an independent
//! implementation, and to show the [`Cache`] trait over a second backend.
//!
//! 并非 [`LinkLru`](crate::LinkLru) 的替代品：没有批量加载、有序快照与 `evict_oldest`。
//! 用于以独立实现校验 [`LinkLru`](crate::LinkLru) 的淘汰顺序，并演示 [`Cache`] trait 的第二种后端。

use std::hash::Hash;

use hashlink::LruCache;

use crate::{Cache, Error, Result};

/// Reference LRU with fixed capacity; the inner `LruCache` is public for model checks
/// 固定容量的参照 LRU；内部 `LruCache` 公开以便模型校验
pub struct Lru<K: Hash + Eq, V>(pub LruCache<K, V>);

impl<K: Hash + Eq, V> Lru<K, V> {
  /// Create with capacity, `limit` must be >= 1
  /// 创建，指定容量（必须 >= 1）
  #[inline]
  pub fn new(limit: usize) -> Result<Self> {
    if limit == 0 {
      return Err(Error::ZeroLimit);
    }
    Ok(Self(LruCache::new(limit)))
  }

  /// Keys, oldest → newest
  /// 键，从旧到新
  #[inline]
  pub fn keys(&self) -> impl Iterator<Item = &K> {
    self.0.iter().map(|(k, _)| k)
  }
}

impl<K: Hash + Eq, V> Cache<K, V> for Lru<K, V> {
  #[inline(always)]
  fn get(&mut self, key: &K) -> Option<&V> {
    self.0.get(key)
  }

  #[inline(always)]
  fn set(&mut self, key: K, val: V) {
    self.0.insert(key, val);
  }

  #[inline(always)]
  fn rm(&mut self, key: &K) {
    self.0.remove(key);
  }
}
