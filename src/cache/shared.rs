use super::key::CanonicalKey;
use super::lru::LruTtl;
use crate::equity::EquityResult;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::time::Duration;

/// Process-wide memo of equity answers, safe to share across threads.
///
/// Every operation holds the lock for one map operation only. Solvers
/// never run under it, so two threads missing on the same key may both
/// compute, and the later `set` wins.
#[derive(Debug)]
pub struct EquityCache(Mutex<LruTtl<CanonicalKey, EquityResult>>);

impl EquityCache {
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        Self(Mutex::new(LruTtl::new(capacity, ttl)))
    }
    pub fn get(&self, key: &CanonicalKey) -> Option<EquityResult> {
        self.lock().get(key)
    }
    pub fn set(&self, key: CanonicalKey, result: EquityResult) {
        self.lock().set(key, result)
    }
    pub fn clear(&self) {
        self.lock().clear()
    }
    pub fn len(&self) -> usize {
        self.lock().len()
    }
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
    /// A panic elsewhere can't leave the map half-updated, so a poisoned
    /// lock is still safe to use.
    fn lock(&self) -> MutexGuard<'_, LruTtl<CanonicalKey, EquityResult>> {
        self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equity::Method;
    use crate::equity::Query;
    use std::sync::Arc;

    fn key(board: &str) -> CanonicalKey {
        CanonicalKey::from(&Query::parse("AsAh", "KsKd", board).unwrap())
    }

    #[test]
    fn stores_and_recalls() {
        let cache = EquityCache::new(8, Duration::from_secs(60));
        let result = EquityResult::new(76.0, Method::Exact);
        assert_eq!(cache.get(&key("2c7d9h")), None);
        cache.set(key("2c7d9h"), result);
        assert_eq!(cache.get(&key("9h7d2c")), Some(result));
        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn concurrent_writers() {
        let cache = Arc::new(EquityCache::new(1000, Duration::from_secs(60)));
        let boards = ["2c7d9h", "2c7d9hTc", "2c7d9hTc3s", ""];
        let handles = boards
            .iter()
            .map(|board| {
                let cache = Arc::clone(&cache);
                let key = key(board);
                std::thread::spawn(move || {
                    for i in 0..100 {
                        cache.set(key, EquityResult::new(i as f64, Method::Exact));
                        assert!(cache.get(&key).is_some());
                    }
                })
            })
            .collect::<Vec<_>>();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(cache.len(), boards.len());
    }
}
