//! Arena node
//! 数组节点

/// One cached pair plus its recency links (arena slot indices)
/// 一个缓存键值对及其新旧链接（数组下标）
#[derive(Clone)]
pub(crate) struct Entry<K, V> {
  pub key: K,
  pub val: V,
  pub older: Option<usize>,
  pub newer: Option<usize>,
}

impl<K, V> Entry<K, V> {
  #[inline(always)]
  pub fn new(key: K, val: V) -> Self {
    Self {
      key,
      val,
      older: None,
      newer: None,
    }
  }
}
