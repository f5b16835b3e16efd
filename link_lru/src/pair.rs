//! Snapshot record and text rendering
//! 快照记录与文本渲染

use std::{
  fmt,
  hash::{BuildHasher, Hash},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize, Serializer};

use crate::LinkLru;

/// `{key, value}` record, as produced by [`LinkLru::to_json`]
/// `{key, value}` 记录，由 [`LinkLru::to_json`] 生成
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pair<K, V> {
  pub key: K,
  pub value: V,
}

impl<K, V> From<Pair<K, V>> for (K, V) {
  #[inline(always)]
  fn from(p: Pair<K, V>) -> Self {
    (p.key, p.value)
  }
}

impl<K, V> From<(K, V)> for Pair<K, V> {
  #[inline(always)]
  fn from((key, value): (K, V)) -> Self {
    Self { key, value }
  }
}

impl<K: Hash + Eq + Clone, V: Clone, S: BuildHasher> LinkLru<K, V, S> {
  /// Ordered snapshot, oldest first
  /// 有序快照，最旧在前
  pub fn to_json(&self) -> Vec<Pair<K, V>> {
    self
      .iter()
      .map(|(k, v)| Pair {
        key: k.clone(),
        value: v.clone(),
      })
      .collect()
  }
}

/// `k1:v1 < k2:v2 < k3:v3`, debugging only
/// 仅用于调试
impl<K: fmt::Display, V: fmt::Display, S> fmt::Display for LinkLru<K, V, S> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (n, (k, v)) in self.iter().enumerate() {
      if n > 0 {
        f.write_str(" < ")?;
      }
      write!(f, "{k}:{v}")?;
    }
    Ok(())
  }
}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for LinkLru<K, V, S> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_map().entries(self.iter()).finish()
  }
}

#[cfg(feature = "serde")]
impl<K: Serialize, V: Serialize, S> Serialize for LinkLru<K, V, S> {
  fn serialize<Z: Serializer>(&self, serializer: Z) -> Result<Z::Ok, Z::Error> {
    serializer.collect_seq(self.iter().map(|(key, value)| Pair { key, value }))
  }
}
