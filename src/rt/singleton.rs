use std::sync::Arc;

use once_cell::race::OnceBox;

/// Process-wide slot for a zero-argument variant.
///
/// Racing first callers may each construct an instance; one wins and every
/// caller from then on gets the winner.
pub struct Singleton<V> {
    slot: OnceBox<Arc<V>>,
}

impl<V> Singleton<V> {
    pub const fn new() -> Self { Singleton { slot: OnceBox::new() } }

    pub fn get_or_init(&self, init: impl FnOnce() -> V) -> Arc<V> {
        self.slot.get_or_init(|| Box::new(Arc::new(init()))).clone()
    }
}

impl<V> Default for Singleton<V> {
    fn default() -> Self { Self::new() }
}
