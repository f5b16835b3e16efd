//! Recency list threaded through the arena
//! 贯穿数组的新旧顺序链表
//!
//! # Complexity
//! 复杂度
//!
//! - push_newest: O(1)
//! - unlink: O(1)
//! - touch: O(1)
//! - remove: O(1), swap-remove keeps the arena dense
//!
//! Links are slot indices, never references, so the list owns nothing.
//! 链接是下标而非引用，链表不拥有任何条目。

use crate::entry::Entry;

/// Ends of the oldest → newest chain
/// 从旧到新链的两端
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub(crate) struct List {
  pub oldest: Option<usize>,
  pub newest: Option<usize>,
}

impl List {
  /// Link a detached slot as newest
  /// 将游离槽位链接为最新
  #[inline]
  pub fn push_newest<K, V>(&mut self, arena: &mut [Entry<K, V>], idx: usize) {
    let prev = self.newest;
    {
      let e = &mut arena[idx];
      e.older = prev;
      e.newer = None;
    }
    match prev {
      Some(n) => arena[n].newer = Some(idx),
      None => self.oldest = Some(idx),
    }
    self.newest = Some(idx);
  }

  /// Detach a slot, joining its neighbours
  /// 摘除槽位，连接其前后邻居
  #[inline]
  pub fn unlink<K, V>(&mut self, arena: &mut [Entry<K, V>], idx: usize) {
    let (older, newer) = {
      let e = &mut arena[idx];
      (e.older.take(), e.newer.take())
    };
    match older {
      Some(o) => arena[o].newer = newer,
      None => self.oldest = newer,
    }
    match newer {
      Some(n) => arena[n].older = older,
      None => self.newest = older,
    }
  }

  /// Mark slot as most recently used
  /// 标记槽位为最近使用
  #[inline]
  pub fn touch<K, V>(&mut self, arena: &mut [Entry<K, V>], idx: usize) {
    if self.newest == Some(idx) {
      return;
    }
    self.unlink(arena, idx);
    self.push_newest(arena, idx);
  }

  /// Unlink and swap-remove a slot.
  /// Returns the entry and whether the former last slot now lives at `idx`
  /// (its key must then be re-pointed in the index).
  ///
  /// 摘除并 swap-remove 槽位。
  /// 返回条目，以及原末尾槽位是否已移到 `idx`（需更新其索引）。
  pub fn remove<K, V>(&mut self, arena: &mut Vec<Entry<K, V>>, idx: usize) -> (Entry<K, V>, bool) {
    self.unlink(arena, idx);
    let last = arena.len() - 1;
    let entry = arena.swap_remove(idx);
    let moved = idx != last;
    if moved {
      self.relink(arena, idx);
    }
    (entry, moved)
  }

  /// Point neighbours of a relocated slot at its new index
  /// 将被搬迁槽位的邻居指向其新下标
  #[inline]
  fn relink<K, V>(&mut self, arena: &mut [Entry<K, V>], idx: usize) {
    let (older, newer) = {
      let e = &arena[idx];
      (e.older, e.newer)
    };
    match older {
      Some(o) => arena[o].newer = Some(idx),
      None => self.oldest = Some(idx),
    }
    match newer {
      Some(n) => arena[n].older = Some(idx),
      None => self.newest = Some(idx),
    }
  }
}
