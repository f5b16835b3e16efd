//! LRU (Least Recently Used) cache over an index-linked arena
//! 基于下标链接数组的 LRU（最近最少使用）缓存
//!
//! # Complexity
//! 复杂度
//!
//! - get / peek / has: O(1)
//! - set: O(1), evicts at most one entry
//! - delete / evict_oldest: O(1)
//! - assign / clear / iteration: O(n)
//!
//! Entries live in one `Vec`; the index maps key → slot and the recency list
//! links slots by index, so there are no reference cycles.
//! 条目存放于单个 `Vec`；索引映射 键 → 槽位，链表以下标连接槽位，无引用环。

use std::{
  borrow::Borrow,
  collections::{HashMap, hash_map::RandomState},
  hash::{BuildHasher, Hash},
  mem,
};

use log::{debug, trace};

use crate::{
  Cache, Error, Result,
  entry::Entry,
  iter::{IntoIter, Iter, Keys, Values},
  list::List,
};

/// Bounded LRU cache, oldest → newest
/// 有界 LRU 缓存，从旧到新
///
/// # Examples
/// ```
/// use link_lru::LinkLru;
///
/// let mut cache = LinkLru::new(3).unwrap();
/// cache.set("a", 1);
/// cache.set("b", 2);
/// cache.set("c", 3);
/// assert_eq!(cache.get(&"a"), Some(&1));
///
/// // "b" is now the oldest
/// cache.set("d", 4);
/// assert_eq!(cache.get(&"b"), None);
/// assert_eq!(cache.keys().copied().collect::<Vec<_>>(), ["c", "a", "d"]);
/// ```
#[derive(Clone)]
#[must_use]
pub struct LinkLru<K, V, S = RandomState> {
  arena: Vec<Entry<K, V>>,
  index: HashMap<K, usize, S>,
  list: List,
  limit: usize,
}

impl<K, V> LinkLru<K, V> {
  /// Create empty cache, `limit` must be >= 1
  /// 创建空缓存，`limit` 必须 >= 1
  #[inline]
  pub fn new(limit: usize) -> Result<Self> {
    Self::with_hasher(limit, RandomState::new())
  }
}

impl<K: Hash + Eq + Clone, V> LinkLru<K, V> {
  /// Create and bulk load `initial`, oldest first
  /// 创建并批量加载 `initial`，最旧在前
  pub fn with_entries<I>(limit: usize, initial: I) -> Result<Self>
  where
    I: IntoIterator<Item = (K, V)>,
  {
    let mut lru = Self::new(limit)?;
    lru.assign(initial)?;
    Ok(lru)
  }

  /// Bulk load `initial`; the limit becomes the number of distinct keys loaded
  /// 批量加载 `initial`；上限取加载的不同键数
  pub fn from_entries<I>(initial: I) -> Result<Self>
  where
    I: IntoIterator<Item = (K, V)>,
  {
    let mut lru = Self::staged(RandomState::new());
    lru.load(initial);
    if lru.arena.is_empty() {
      return Err(Error::ZeroLimit);
    }
    lru.limit = lru.arena.len();
    Ok(lru)
  }
}

impl<K, V, S> LinkLru<K, V, S> {
  /// Create empty cache with a custom hasher for the index
  /// 创建空缓存，索引使用自定义哈希器
  #[inline]
  pub fn with_hasher(limit: usize, hasher: S) -> Result<Self> {
    if limit == 0 {
      return Err(Error::ZeroLimit);
    }
    let mut lru = Self::staged(hasher);
    lru.limit = limit;
    Ok(lru)
  }

  #[inline]
  fn staged(hasher: S) -> Self {
    Self {
      arena: Vec::new(),
      index: HashMap::with_hasher(hasher),
      list: List::default(),
      limit: usize::MAX,
    }
  }

  #[inline]
  pub fn len(&self) -> usize {
    self.arena.len()
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.arena.is_empty()
  }

  #[inline]
  pub fn limit(&self) -> usize {
    self.limit
  }

  #[inline]
  pub fn hasher(&self) -> &S {
    self.index.hasher()
  }

  /// Least recently used pair
  /// 最久未使用的键值对
  #[inline]
  pub fn oldest(&self) -> Option<(&K, &V)> {
    let e = &self.arena[self.list.oldest?];
    Some((&e.key, &e.val))
  }

  /// Most recently used pair
  /// 最近使用的键值对
  #[inline]
  pub fn newest(&self) -> Option<(&K, &V)> {
    let e = &self.arena[self.list.newest?];
    Some((&e.key, &e.val))
  }

  /// Pairs, oldest → newest
  /// 键值对，从旧到新
  #[inline]
  pub fn iter(&self) -> Iter<'_, K, V> {
    Iter {
      arena: &self.arena,
      front: self.list.oldest,
      back: self.list.newest,
      len: self.arena.len(),
    }
  }

  #[inline]
  pub fn entries(&self) -> Iter<'_, K, V> {
    self.iter()
  }

  #[inline]
  pub fn keys(&self) -> Keys<'_, K, V> {
    Keys(self.iter())
  }

  #[inline]
  pub fn values(&self) -> Values<'_, K, V> {
    Values(self.iter())
  }

  /// Call `f(value, key, cache)` for each entry, oldest → newest
  /// 对每个条目调用 `f(value, key, cache)`，从旧到新
  pub fn for_each<F>(&self, mut f: F)
  where
    F: FnMut(&V, &K, &Self),
  {
    for (k, v) in self.iter() {
      f(v, k, self);
    }
  }

  /// Drop everything, no eviction
  /// 清空全部，不触发淘汰
  pub fn clear(&mut self) {
    debug!("clear {} entries", self.arena.len());
    self.arena.clear();
    self.index.clear();
    self.list = List::default();
  }
}

impl<K: Hash + Eq + Clone, V, S: BuildHasher> LinkLru<K, V, S> {
  /// Insert or update, then mark as newest.
  /// A new key beyond `limit` evicts the oldest entry.
  ///
  /// 插入或更新，并标记为最新。
  /// 新键超出 `limit` 时淘汰最旧条目。
  #[inline]
  pub fn set(&mut self, key: K, val: V) {
    self.insert(key, val);
  }

  /// Like [`set`](Self::set), returning the evicted pair if any
  /// 同 [`set`](Self::set)，返回被淘汰的键值对
  pub fn insert(&mut self, key: K, val: V) -> Option<(K, V)> {
    if let Some(&idx) = self.index.get(&key) {
      self.arena[idx].val = val;
      self.list.touch(&mut self.arena, idx);
      return None;
    }
    self.push(key, val)
  }

  /// Like [`set`](Self::set), returning the replaced value if the key existed
  /// 同 [`set`](Self::set)，若键已存在则返回旧值
  pub fn put(&mut self, key: K, val: V) -> Option<V> {
    if let Some(&idx) = self.index.get(&key) {
      let old = mem::replace(&mut self.arena[idx].val, val);
      self.list.touch(&mut self.arena, idx);
      return Some(old);
    }
    self.push(key, val);
    None
  }

  fn push(&mut self, key: K, val: V) -> Option<(K, V)> {
    let idx = self.arena.len();
    self.index.insert(key.clone(), idx);
    self.arena.push(Entry::new(key, val));
    self.list.push_newest(&mut self.arena, idx);
    // One insert can overflow by at most one
    // 单次插入最多超出一个
    if self.arena.len() > self.limit {
      return self.evict_oldest();
    }
    None
  }

  /// Get value and mark as newest
  /// 获取值并标记为最新
  #[inline]
  pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
  where
    K: Borrow<Q>,
    Q: Hash + Eq + ?Sized,
  {
    let &idx = self.index.get(key)?;
    self.list.touch(&mut self.arena, idx);
    Some(&self.arena[idx].val)
  }

  #[inline]
  pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
  where
    K: Borrow<Q>,
    Q: Hash + Eq + ?Sized,
  {
    let &idx = self.index.get(key)?;
    self.list.touch(&mut self.arena, idx);
    Some(&mut self.arena[idx].val)
  }

  /// Get value without touching recency
  /// 获取值但不改变新旧顺序
  #[inline]
  pub fn peek<Q>(&self, key: &Q) -> Option<&V>
  where
    K: Borrow<Q>,
    Q: Hash + Eq + ?Sized,
  {
    let &idx = self.index.get(key)?;
    Some(&self.arena[idx].val)
  }

  /// Alias of [`peek`](Self::peek)
  #[inline(always)]
  pub fn find<Q>(&self, key: &Q) -> Option<&V>
  where
    K: Borrow<Q>,
    Q: Hash + Eq + ?Sized,
  {
    self.peek(key)
  }

  #[inline]
  pub fn has<Q>(&self, key: &Q) -> bool
  where
    K: Borrow<Q>,
    Q: Hash + Eq + ?Sized,
  {
    self.index.contains_key(key)
  }

  /// Remove by key, returning its value
  /// 按键删除，返回其值
  #[inline]
  pub fn delete<Q>(&mut self, key: &Q) -> Option<V>
  where
    K: Borrow<Q>,
    Q: Hash + Eq + ?Sized,
  {
    let idx = self.index.remove(key)?;
    Some(self.take(idx).1)
  }

  /// Remove and return the oldest pair
  /// 删除并返回最旧的键值对
  pub fn evict_oldest(&mut self) -> Option<(K, V)> {
    let idx = self.list.oldest?;
    self.index.remove(&self.arena[idx].key);
    let pair = self.take(idx);
    trace!("evict oldest, {} left", self.arena.len());
    Some(pair)
  }

  /// Alias of [`evict_oldest`](Self::evict_oldest)
  #[inline(always)]
  pub fn shift(&mut self) -> Option<(K, V)> {
    self.evict_oldest()
  }

  // Caller has already removed the key from the index
  // 调用方已从索引中移除该键
  fn take(&mut self, idx: usize) -> (K, V) {
    let (e, moved) = self.list.remove(&mut self.arena, idx);
    if moved && let Some(slot) = self.index.get_mut(&self.arena[idx].key) {
      *slot = idx;
    }
    (e.key, e.val)
  }

  /// Append pairs as newest without eviction; repeated keys keep the last value.
  /// Returns the number of pairs supplied, repeats included.
  ///
  /// 追加为最新且不淘汰；重复键保留最后的值。
  /// 返回传入的键值对数量（含重复）。
  fn load<I>(&mut self, entries: I) -> usize
  where
    I: IntoIterator<Item = (K, V)>,
  {
    let entries = entries.into_iter();
    let (lower, _) = entries.size_hint();
    self.arena.reserve(lower);
    self.index.reserve(lower);
    let mut supplied = 0;
    for (key, val) in entries {
      supplied += 1;
      if let Some(&idx) = self.index.get(&key) {
        self.arena[idx].val = val;
        self.list.touch(&mut self.arena, idx);
      } else {
        let idx = self.arena.len();
        self.index.insert(key.clone(), idx);
        self.arena.push(Entry::new(key, val));
        self.list.push_newest(&mut self.arena, idx);
      }
    }
    supplied
  }

  /// Replace all contents with `entries`, oldest first.
  /// Fails without touching the cache if more than `limit` pairs are given,
  /// repeated keys counted each time.
  ///
  /// 用 `entries` 替换全部内容，最旧在前。
  /// 传入键值对数（重复键逐次计数）超过 `limit` 时报错，缓存保持不变。
  pub fn assign<I>(&mut self, entries: I) -> Result<()>
  where
    I: IntoIterator<Item = (K, V)>,
    S: Clone,
  {
    let mut staged = Self::staged(self.index.hasher().clone());
    let len = staged.load(entries);
    if len > self.limit {
      return Err(Error::CapacityExceeded {
        len,
        limit: self.limit,
      });
    }
    staged.limit = self.limit;
    *self = staged;
    debug!("assign {len} pairs, {} kept, limit {}", self.arena.len(), self.limit);
    Ok(())
  }
}

impl<'a, K, V, S> IntoIterator for &'a LinkLru<K, V, S> {
  type Item = (&'a K, &'a V);
  type IntoIter = Iter<'a, K, V>;

  #[inline]
  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

impl<K, V, S> IntoIterator for LinkLru<K, V, S> {
  type Item = (K, V);
  type IntoIter = IntoIter<K, V>;

  #[inline]
  fn into_iter(self) -> Self::IntoIter {
    IntoIter::new(self.arena, self.list.oldest)
  }
}

impl<K: Hash + Eq + Clone, V, S: BuildHasher> Cache<K, V> for LinkLru<K, V, S> {
  #[inline(always)]
  fn get(&mut self, key: &K) -> Option<&V> {
    LinkLru::get(self, key)
  }

  #[inline(always)]
  fn set(&mut self, key: K, val: V) {
    LinkLru::set(self, key, val);
  }

  #[inline(always)]
  fn rm(&mut self, key: &K) {
    self.delete(key);
  }
}

#[cfg(test)]
impl<K: Hash + Eq + Clone, V, S: BuildHasher> LinkLru<K, V, S> {
  /// Assert list, index and arena agree
  /// 断言链表、索引与数组一致
  pub(crate) fn check(&self) {
    let n = self.arena.len();
    assert_eq!(self.index.len(), n);
    assert!(n <= self.limit);

    let mut fwd = Vec::with_capacity(n);
    let mut prev = None;
    let mut cur = self.list.oldest;
    while let Some(i) = cur {
      assert!(fwd.len() < n, "cycle");
      assert_eq!(self.arena[i].older, prev);
      assert_eq!(self.index.get(&self.arena[i].key), Some(&i));
      fwd.push(i);
      prev = cur;
      cur = self.arena[i].newer;
    }
    assert_eq!(fwd.len(), n);
    assert_eq!(self.list.newest, prev);

    let mut bwd = Vec::with_capacity(n);
    let mut cur = self.list.newest;
    while let Some(i) = cur {
      assert!(bwd.len() < n, "cycle");
      bwd.push(i);
      cur = self.arena[i].older;
    }
    bwd.reverse();
    assert_eq!(fwd, bwd);
  }
}
