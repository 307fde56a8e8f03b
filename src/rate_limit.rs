use std::time::{Duration, Instant};

use dashmap::DashMap;

/// Per-account login brute force limiter. Usernames are only unique within a
/// company, so the key includes the company.
pub struct LoginRateLimiter {
    /// (company, username) -> (failed_count, window_start)
    entries: DashMap<(String, String), (u32, Instant)>,
}

const MAX_FAILURES: u32 = 5;
const WINDOW: Duration = Duration::from_secs(15 * 60);

impl LoginRateLimiter {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Check if a login attempt is allowed. 5 failures per 15 minutes.
    /// Does NOT increment the counter — call `record_failure()` on a failed
    /// verification.
    pub fn check(&self, company: &str, username: &str) -> Result<(), u64> {
        let now = Instant::now();

        let entry = self.entries.get(&key(company, username));
        let Some(entry) = entry else {
            return Ok(());
        };

        let (count, start) = entry.value();

        if now.duration_since(*start) > WINDOW {
            return Ok(());
        }

        if *count >= MAX_FAILURES {
            let elapsed = now.duration_since(*start).as_secs();
            return Err(WINDOW.as_secs().saturating_sub(elapsed));
        }

        Ok(())
    }

    /// Record a failed login attempt for the given account.
    pub fn record_failure(&self, company: &str, username: &str) {
        let now = Instant::now();

        let mut entry = self.entries.entry(key(company, username)).or_insert((0, now));
        let (count, start) = entry.value_mut();

        if now.duration_since(*start) > WINDOW {
            *count = 1;
            *start = now;
        } else {
            *count += 1;
        }
    }

    /// Remove stale entries older than the given duration.
    pub fn cleanup(&self, max_age: Duration) {
        let now = Instant::now();
        self.entries
            .retain(|_, (_, start)| now.duration_since(*start) < max_age);
    }
}

fn key(company: &str, username: &str) -> (String, String) {
    (company.to_string(), username.to_lowercase())
}
