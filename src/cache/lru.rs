use std::collections::BTreeMap;
use std::collections::HashMap;
use std::hash::Hash;
use std::time::Duration;
use std::time::Instant;

/// Bounded map with least-recently-used eviction and a fixed time to live.
///
/// Recency is a monotone tick: every hit or insert stamps the entry with
/// the next tick, and `order` maps ticks back to keys so the oldest one is
/// always the first entry. Expired entries are dropped lazily, when a
/// lookup finds them.
#[derive(Debug)]
pub struct LruTtl<K, V> {
    capacity: usize,
    ttl: Duration,
    clock: u64,
    entries: HashMap<K, Entry<V>>,
    order: BTreeMap<u64, K>,
}

#[derive(Debug)]
struct Entry<V> {
    value: V,
    tick: u64,
    inserted: Instant,
    expires: Option<Instant>,
}

impl<K, V> LruTtl<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        Self {
            capacity,
            ttl,
            clock: 0,
            entries: HashMap::new(),
            order: BTreeMap::new(),
        }
    }

    pub fn get(&mut self, key: &K) -> Option<V> {
        self.get_at(key, Instant::now())
    }
    pub fn set(&mut self, key: K, value: V) {
        self.set_at(key, value, Instant::now())
    }

    /// Lookup as of `now`. A hit becomes most recently used; an expired
    /// entry is removed and reported as a miss.
    pub fn get_at(&mut self, key: &K, now: Instant) -> Option<V> {
        let expired = self
            .entries
            .get(key)?
            .expires
            .is_some_and(|expires| now >= expires);
        if expired {
            self.remove(key);
            return None;
        }
        let tick = self.tick();
        let entry = self.entries.get_mut(key)?;
        self.order.remove(&entry.tick);
        self.order.insert(tick, key.clone());
        entry.tick = tick;
        Some(entry.value.clone())
    }

    /// Insert or overwrite as of `now`, then evict down to capacity.
    pub fn set_at(&mut self, key: K, value: V, now: Instant) {
        let tick = self.tick();
        let entry = Entry {
            value,
            tick,
            inserted: now,
            expires: now.checked_add(self.ttl),
        };
        if let Some(stale) = self.entries.insert(key.clone(), entry) {
            self.order.remove(&stale.tick);
        }
        self.order.insert(tick, key);
        while self.entries.len() > self.capacity {
            match self.order.pop_first() {
                Some((_, oldest)) => self.entries.remove(&oldest),
                None => break,
            };
        }
    }

    /// How long ago `key` was stored, if it is still held.
    pub fn age_at(&self, key: &K, now: Instant) -> Option<Duration> {
        self.entries
            .get(key)
            .map(|entry| now.saturating_duration_since(entry.inserted))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    pub fn capacity(&self) -> usize {
        self.capacity
    }
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    fn remove(&mut self, key: &K) {
        if let Some(entry) = self.entries.remove(key) {
            self.order.remove(&entry.tick);
        }
    }
    fn tick(&mut self) -> u64 {
        self.clock += 1;
        self.clock
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOUR: Duration = Duration::from_secs(3600);

    #[test]
    fn evicts_least_recent() {
        let mut lru = LruTtl::new(2, HOUR);
        lru.set("a", 1);
        lru.set("b", 2);
        assert_eq!(lru.get(&"a"), Some(1));
        lru.set("c", 3);
        assert_eq!(lru.len(), 2);
        assert_eq!(lru.get(&"b"), None);
        assert_eq!(lru.get(&"a"), Some(1));
        assert_eq!(lru.get(&"c"), Some(3));
    }

    #[test]
    fn overwrite_refreshes() {
        let mut lru = LruTtl::new(2, HOUR);
        lru.set("a", 1);
        lru.set("b", 2);
        lru.set("a", 10);
        lru.set("c", 3);
        assert_eq!(lru.get(&"a"), Some(10));
        assert_eq!(lru.get(&"b"), None);
    }

    #[test]
    fn entries_expire() {
        let mut lru = LruTtl::new(4, HOUR);
        let t0 = Instant::now();
        lru.set_at("a", 1, t0);
        assert_eq!(lru.get_at(&"a", t0 + HOUR / 2), Some(1));
        assert_eq!(lru.age_at(&"a", t0 + HOUR / 2), Some(HOUR / 2));
        assert_eq!(lru.get_at(&"a", t0 + HOUR), None);
        assert!(lru.is_empty());
    }

    #[test]
    fn hits_do_not_extend_life() {
        let mut lru = LruTtl::new(4, HOUR);
        let t0 = Instant::now();
        lru.set_at("a", 1, t0);
        assert_eq!(lru.get_at(&"a", t0 + HOUR - Duration::from_secs(1)), Some(1));
        assert_eq!(lru.get_at(&"a", t0 + HOUR + Duration::from_secs(1)), None);
    }

    #[test]
    fn zero_capacity_holds_nothing() {
        let mut lru = LruTtl::new(0, HOUR);
        lru.set("a", 1);
        assert!(lru.is_empty());
        assert_eq!(lru.get(&"a"), None);
    }

    #[test]
    fn clear_empties() {
        let mut lru = LruTtl::new(4, HOUR);
        lru.set("a", 1);
        lru.set("b", 2);
        lru.clear();
        assert_eq!(lru.len(), 0);
        assert_eq!(lru.get(&"a"), None);
    }
}
