//! Per-phone send throttle for the WhatsApp sandbox.
//!
//! At most [`MAX_SENDS_PER_WINDOW`] test messages per phone inside a
//! [`WINDOW_MS`] window, counted in `localStorage` under `rateLimit-<phone>`.
//! This is a courtesy guard only: the read-then-write is not atomic, so two
//! tabs sending from the same number can both slip through. The server is the
//! authority and answers 429 when it disagrees.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::storage::KeyValueStore;

pub const MAX_SENDS_PER_WINDOW: u32 = 5;
pub const WINDOW_MS: i64 = 3_600_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitRecord {
    pub count: u32,
    /// Epoch millis of the last recorded attempt.
    pub timestamp: i64,
}

impl RateLimitRecord {
    pub fn is_expired(&self, now_ms: i64) -> bool {
        now_ms.saturating_sub(self.timestamp) > WINDOW_MS
    }
}

pub fn storage_key(phone: &str) -> String {
    format!("rateLimit-{}", phone)
}

pub struct RateLimiter<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> RateLimiter<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    fn read(&self, phone: &str) -> Option<RateLimitRecord> {
        let raw = self.store.get(&storage_key(phone))?;
        match serde_json::from_str(&raw) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Discarding unreadable rate limit record for {}: {}", phone, e);
                self.store.remove(&storage_key(phone));
                None
            }
        }
    }

    fn write(&self, phone: &str, record: RateLimitRecord) {
        let raw = match serde_json::to_string(&record) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Could not encode rate limit record: {}", e);
                return;
            }
        };
        if let Err(e) = self.store.set(&storage_key(phone), &raw) {
            warn!("Rate limit not persisted: {}", e);
        }
    }

    /// The stored record if it is still inside the window. Expired records
    /// are removed on the way.
    pub fn live_record(&self, phone: &str, now_ms: i64) -> Option<RateLimitRecord> {
        let record = self.read(phone)?;
        if record.is_expired(now_ms) {
            debug!("Rate limit window for {} expired", phone);
            self.store.remove(&storage_key(phone));
            return None;
        }
        Some(record)
    }

    /// `true` when `phone` has used up its sends for the current window.
    pub fn check_limit(&self, phone: &str, now_ms: i64) -> bool {
        self.live_record(phone, now_ms)
            .map_or(false, |record| record.count >= MAX_SENDS_PER_WINDOW)
    }

    pub fn record_attempt(&self, phone: &str, now_ms: i64) -> RateLimitRecord {
        let count = self
            .live_record(phone, now_ms)
            .map_or(1, |record| record.count.saturating_add(1));
        let record = RateLimitRecord { count, timestamp: now_ms };
        self.write(phone, record);
        record
    }

    /// Used when the server says 429: treat the window as spent from now.
    pub fn mark_exhausted(&self, phone: &str, now_ms: i64) {
        self.write(
            phone,
            RateLimitRecord {
                count: MAX_SENDS_PER_WINDOW,
                timestamp: now_ms,
            },
        );
    }

    pub fn remaining(&self, phone: &str, now_ms: i64) -> u32 {
        let used = self.live_record(phone, now_ms).map_or(0, |record| record.count);
        MAX_SENDS_PER_WINDOW.saturating_sub(used)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    const PHONE: &str = "9876543210";
    const T0: i64 = 1_700_000_000_000;

    #[test]
    fn fresh_phone_is_not_limited() {
        let limiter = RateLimiter::new(MemoryStorage::new());
        assert!(!limiter.check_limit(PHONE, T0));
        assert_eq!(limiter.remaining(PHONE, T0), MAX_SENDS_PER_WINDOW);
    }

    #[test]
    fn fifth_attempt_inside_window_trips_the_limit() {
        let limiter = RateLimiter::new(MemoryStorage::new());
        for i in 0..4 {
            limiter.record_attempt(PHONE, T0 + i * 1_000);
            assert!(!limiter.check_limit(PHONE, T0 + i * 1_000));
        }
        assert_eq!(limiter.remaining(PHONE, T0 + 4_000), 1);
        let record = limiter.record_attempt(PHONE, T0 + 5_000);
        assert_eq!(record, RateLimitRecord { count: 5, timestamp: T0 + 5_000 });
        assert!(limiter.check_limit(PHONE, T0 + 5_000));
        assert!(limiter.check_limit(PHONE, T0 + 5_000 + WINDOW_MS));
    }

    #[test]
    fn expired_record_is_cleared() {
        let store = MemoryStorage::new();
        let limiter = RateLimiter::new(store.clone());
        for _ in 0..5 {
            limiter.record_attempt(PHONE, T0);
        }
        assert!(limiter.check_limit(PHONE, T0 + WINDOW_MS));
        assert!(!limiter.check_limit(PHONE, T0 + WINDOW_MS + 1));
        assert_eq!(store.get(&storage_key(PHONE)), None);

        let record = limiter.record_attempt(PHONE, T0 + WINDOW_MS + 2);
        assert_eq!(record.count, 1);
    }

    #[test]
    fn limits_are_tracked_per_phone() {
        let limiter = RateLimiter::new(MemoryStorage::new());
        for _ in 0..5 {
            limiter.record_attempt(PHONE, T0);
        }
        assert!(limiter.check_limit(PHONE, T0));
        assert!(!limiter.check_limit("9123456789", T0));
    }

    #[test]
    fn server_429_exhausts_window() {
        let store = MemoryStorage::new();
        let limiter = RateLimiter::new(store.clone());
        limiter.record_attempt(PHONE, T0);
        limiter.mark_exhausted(PHONE, T0 + 10);
        assert!(limiter.check_limit(PHONE, T0 + 10));
        assert_eq!(limiter.remaining(PHONE, T0 + 10), 0);
        let stored: RateLimitRecord =
            serde_json::from_str(&store.get("rateLimit-9876543210").unwrap()).unwrap();
        assert_eq!(stored, RateLimitRecord { count: 5, timestamp: T0 + 10 });
    }

    #[test]
    fn extreme_timestamps_do_not_overflow() {
        let ancient = RateLimitRecord { count: 5, timestamp: i64::MIN };
        assert!(ancient.is_expired(T0));
        let future = RateLimitRecord { count: 5, timestamp: i64::MAX };
        assert!(!future.is_expired(i64::MIN));

        let store = MemoryStorage::new();
        store
            .set(&storage_key(PHONE), &serde_json::to_string(&ancient).unwrap())
            .unwrap();
        let limiter = RateLimiter::new(store.clone());
        assert!(!limiter.check_limit(PHONE, T0));
        assert_eq!(limiter.record_attempt(PHONE, T0).count, 1);
    }

    #[test]
    fn garbage_in_storage_counts_as_no_record() {
        let store = MemoryStorage::new();
        store.set(&storage_key(PHONE), "{not json").unwrap();
        let limiter = RateLimiter::new(store.clone());
        assert!(!limiter.check_limit(PHONE, T0));
        assert_eq!(store.len(), 0);
    }
}
