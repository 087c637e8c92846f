use std::collections::HashSet;
use std::fmt;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::Category;
use crate::error::Result;
use crate::repository::Repository;

pub const DEFAULT_POMODORO: Duration = Duration::from_secs(25 * 60);
pub const DEFAULT_SHORT_BREAK: Duration = Duration::from_secs(5 * 60);
pub const DEFAULT_LONG_BREAK: Duration = Duration::from_secs(15 * 60);

/// Everything needed to create and run intervals: the repository plus the
/// planned duration of each category.
///
/// Immutable once built. The tick engine and scheduler only read from it.
pub struct IntervalConfig {
    repo: Arc<dyn Repository>,
    pomodoro_duration: Duration,
    short_break_duration: Duration,
    long_break_duration: Duration,
    /// Ids with a live tick loop.
    active: Mutex<HashSet<i64>>,
}

impl IntervalConfig {
    /// A zero duration falls back to the default for that category.
    pub fn new(
        repo: Arc<dyn Repository>,
        pomodoro: Duration,
        short_break: Duration,
        long_break: Duration,
    ) -> Self {
        Self {
            repo,
            pomodoro_duration: or_default(pomodoro, DEFAULT_POMODORO),
            short_break_duration: or_default(short_break, DEFAULT_SHORT_BREAK),
            long_break_duration: or_default(long_break, DEFAULT_LONG_BREAK),
            active: Mutex::new(HashSet::new()),
        }
    }

    pub fn repo(&self) -> &dyn Repository {
        self.repo.as_ref()
    }

    pub fn pomodoro_duration(&self) -> Duration {
        self.pomodoro_duration
    }

    pub fn short_break_duration(&self) -> Duration {
        self.short_break_duration
    }

    pub fn long_break_duration(&self) -> Duration {
        self.long_break_duration
    }

    pub fn duration_for(&self, category: Category) -> Duration {
        match category {
            Category::Pomodoro => self.pomodoro_duration,
            Category::ShortBreak => self.short_break_duration,
            Category::LongBreak => self.long_break_duration,
        }
    }

    /// Claim `id` for a tick loop. Returns `None` if another loop holds it.
    pub(crate) fn claim(&self, id: i64) -> Result<Option<ActiveClaim<'_>>> {
        let mut active = self.active.lock()?;
        if !active.insert(id) {
            return Ok(None);
        }
        Ok(Some(ActiveClaim { config: self, id }))
    }
}

impl fmt::Debug for IntervalConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntervalConfig")
            .field("pomodoro_duration", &self.pomodoro_duration)
            .field("short_break_duration", &self.short_break_duration)
            .field("long_break_duration", &self.long_break_duration)
            .finish_non_exhaustive()
    }
}

/// Releases the id when the tick loop exits, on every path.
pub(crate) struct ActiveClaim<'a> {
    config: &'a IntervalConfig,
    id: i64,
}

impl Drop for ActiveClaim<'_> {
    fn drop(&mut self) {
        // A poisoned set only ever holds ids; recover it rather than leak the claim.
        let mut active = match self.config.active.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        active.remove(&self.id);
    }
}

fn or_default(value: Duration, default: Duration) -> Duration {
    if value.is_zero() {
        default
    } else {
        value
    }
}
