//! Ordered iterators, oldest → newest
//! 有序迭代器，从旧到新
//!
//! Iterators borrow the cache, so the cache cannot be mutated while one is alive.
//! 迭代器借用缓存，存活期间缓存无法被修改。

use std::iter::FusedIterator;

use crate::entry::Entry;

/// Walks the recency list from both ends
/// 从链表两端遍历
pub struct Iter<'a, K, V> {
  pub(crate) arena: &'a [Entry<K, V>],
  pub(crate) front: Option<usize>,
  pub(crate) back: Option<usize>,
  pub(crate) len: usize,
}

impl<K, V> Clone for Iter<'_, K, V> {
  fn clone(&self) -> Self {
    Self { ..*self }
  }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
  type Item = (&'a K, &'a V);

  #[inline]
  fn next(&mut self) -> Option<Self::Item> {
    if self.len == 0 {
      return None;
    }
    let arena = self.arena;
    let e = &arena[self.front?];
    self.front = e.newer;
    self.len -= 1;
    Some((&e.key, &e.val))
  }

  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.len, Some(self.len))
  }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
  #[inline]
  fn next_back(&mut self) -> Option<Self::Item> {
    if self.len == 0 {
      return None;
    }
    let arena = self.arena;
    let e = &arena[self.back?];
    self.back = e.older;
    self.len -= 1;
    Some((&e.key, &e.val))
  }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}
impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// Keys, oldest → newest
/// 键，从旧到新
pub struct Keys<'a, K, V>(pub(crate) Iter<'a, K, V>);

impl<K, V> Clone for Keys<'_, K, V> {
  fn clone(&self) -> Self {
    Self(self.0.clone())
  }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
  type Item = &'a K;

  #[inline]
  fn next(&mut self) -> Option<&'a K> {
    self.0.next().map(|(k, _)| k)
  }

  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) {
    self.0.size_hint()
  }
}

impl<K, V> DoubleEndedIterator for Keys<'_, K, V> {
  #[inline]
  fn next_back(&mut self) -> Option<Self::Item> {
    self.0.next_back().map(|(k, _)| k)
  }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}
impl<K, V> FusedIterator for Keys<'_, K, V> {}

/// Values, oldest → newest
/// 值，从旧到新
pub struct Values<'a, K, V>(pub(crate) Iter<'a, K, V>);

impl<K, V> Clone for Values<'_, K, V> {
  fn clone(&self) -> Self {
    Self(self.0.clone())
  }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
  type Item = &'a V;

  #[inline]
  fn next(&mut self) -> Option<&'a V> {
    self.0.next().map(|(_, v)| v)
  }

  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) {
    self.0.size_hint()
  }
}

impl<K, V> DoubleEndedIterator for Values<'_, K, V> {
  #[inline]
  fn next_back(&mut self) -> Option<Self::Item> {
    self.0.next_back().map(|(_, v)| v)
  }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}
impl<K, V> FusedIterator for Values<'_, K, V> {}

/// Owning iterator, oldest → newest
/// 所有权迭代器，从旧到新
pub struct IntoIter<K, V>(pub(crate) std::vec::IntoIter<(K, V)>);

impl<K, V> IntoIter<K, V> {
  /// Drain the arena in list order
  /// 按链表顺序取出数组
  pub(crate) fn new(arena: Vec<Entry<K, V>>, mut cur: Option<usize>) -> Self {
    let mut slots: Vec<Option<Entry<K, V>>> = arena.into_iter().map(Some).collect();
    let mut out = Vec::with_capacity(slots.len());
    while let Some(i) = cur {
      if let Some(e) = slots[i].take() {
        cur = e.newer;
        out.push((e.key, e.val));
      } else {
        break;
      }
    }
    Self(out.into_iter())
  }
}

impl<K, V> Iterator for IntoIter<K, V> {
  type Item = (K, V);

  #[inline]
  fn next(&mut self) -> Option<(K, V)> {
    self.0.next()
  }

  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) {
    self.0.size_hint()
  }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
  #[inline]
  fn next_back(&mut self) -> Option<(K, V)> {
    self.0.next_back()
  }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}
impl<K, V> FusedIterator for IntoIter<K, V> {}
