//! Interval records and the "get next interval" lifecycle.
//!
//! An [`Interval`] is one timed segment of work or rest. Intervals are never
//! deleted: `Done` and `Cancelled` are terminal states that stay in the
//! repository, and the scheduler reads them back to decide what comes next.

mod config;

pub use config::{IntervalConfig, DEFAULT_LONG_BREAK, DEFAULT_POMODORO, DEFAULT_SHORT_BREAK};

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::scheduler::next_category;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Pomodoro,
    ShortBreak,
    LongBreak,
}

impl Category {
    pub fn is_break(self) -> bool {
        matches!(self, Category::ShortBreak | Category::LongBreak)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Pomodoro => "Pomodoro",
            Category::ShortBreak => "ShortBreak",
            Category::LongBreak => "LongBreak",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "Pomodoro" => Ok(Category::Pomodoro),
            "ShortBreak" => Ok(Category::ShortBreak),
            "LongBreak" => Ok(Category::LongBreak),
            other => Err(format!("unknown interval category: {other}")),
        }
    }
}

/// Lifecycle state of an interval.
///
/// ```text
/// NotStarted -> Running <-> Paused
///                  |
///                  +-> Done | Cancelled
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum IntervalState {
    NotStarted,
    Running,
    Paused,
    Done,
    Cancelled,
}

impl IntervalState {
    pub fn is_terminal(self) -> bool {
        matches!(self, IntervalState::Done | IntervalState::Cancelled)
    }

    /// Stable numeric code, used by serialized records.
    pub fn code(self) -> i64 {
        match self {
            IntervalState::NotStarted => 0,
            IntervalState::Running => 1,
            IntervalState::Paused => 2,
            IntervalState::Done => 3,
            IntervalState::Cancelled => 4,
        }
    }
}

impl TryFrom<i64> for IntervalState {
    type Error = CoreError;

    fn try_from(code: i64) -> Result<Self> {
        match code {
            0 => Ok(IntervalState::NotStarted),
            1 => Ok(IntervalState::Running),
            2 => Ok(IntervalState::Paused),
            3 => Ok(IntervalState::Done),
            4 => Ok(IntervalState::Cancelled),
            other => Err(CoreError::InvalidState(other)),
        }
    }
}

impl From<IntervalState> for i64 {
    fn from(state: IntervalState) -> Self {
        state.code()
    }
}

/// A single timed segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    /// Assigned by the repository on create. Zero until then.
    pub id: i64,
    /// Set on the first transition into `Running`.
    pub start_time: Option<DateTime<Utc>>,
    pub planned_duration: Duration,
    /// Grows one second per tick while running.
    pub actual_duration: Duration,
    pub category: Category,
    pub state: IntervalState,
}

impl Interval {
    /// Build an unsaved interval of the given category.
    pub fn new(category: Category, planned_duration: Duration) -> Self {
        Self {
            id: 0,
            start_time: None,
            planned_duration,
            actual_duration: Duration::ZERO,
            category,
            state: IntervalState::NotStarted,
        }
    }

    /// Planned time not yet ticked off.
    pub fn remaining(&self) -> Duration {
        self.planned_duration.saturating_sub(self.actual_duration)
    }
}

/// Return the interval the caller should run next.
///
/// The most recent interval is resumed as-is unless it is terminal, in which
/// case a fresh one is created with the scheduled category.
pub fn get_interval(config: &IntervalConfig) -> Result<Interval> {
    match config.repo().last() {
        Ok(last) if !last.state.is_terminal() => Ok(last),
        Ok(_) | Err(CoreError::NoIntervals) => new_interval(config),
        Err(e) => Err(e),
    }
}

fn new_interval(config: &IntervalConfig) -> Result<Interval> {
    let category = next_category(config.repo())?;
    let mut interval = Interval::new(category, config.duration_for(category));
    interval.id = config.repo().create(&interval)?;
    tracing::debug!(id = interval.id, %category, "created interval");
    Ok(interval)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{InMemoryRepository, Repository};
    use std::sync::Arc;

    fn config() -> (Arc<InMemoryRepository>, IntervalConfig) {
        let repo = Arc::new(InMemoryRepository::new());
        let config = IntervalConfig::new(repo.clone(), Duration::ZERO, Duration::ZERO, Duration::ZERO);
        (repo, config)
    }

    #[test]
    fn state_codes_round_trip() {
        for state in [
            IntervalState::NotStarted,
            IntervalState::Running,
            IntervalState::Paused,
            IntervalState::Done,
            IntervalState::Cancelled,
        ] {
            assert_eq!(IntervalState::try_from(state.code()).unwrap(), state);
        }
    }

    #[test]
    fn unknown_state_code_is_rejected() {
        assert!(matches!(
            IntervalState::try_from(7),
            Err(CoreError::InvalidState(7))
        ));
        let json = r#"{"id":1,"start_time":null,"planned_duration":{"secs":1,"nanos":0},
            "actual_duration":{"secs":0,"nanos":0},"category":"Pomodoro","state":9}"#;
        assert!(serde_json::from_str::<Interval>(json).is_err());
    }

    #[test]
    fn category_parses_its_own_display() {
        for c in [Category::Pomodoro, Category::ShortBreak, Category::LongBreak] {
            assert_eq!(c.to_string().parse::<Category>().unwrap(), c);
        }
        assert!("Nap".parse::<Category>().is_err());
    }

    #[test]
    fn first_interval_is_a_fresh_pomodoro() {
        let (_repo, config) = config();
        let interval = get_interval(&config).unwrap();
        assert_eq!(interval.id, 1);
        assert_eq!(interval.category, Category::Pomodoro);
        assert_eq!(interval.state, IntervalState::NotStarted);
        assert_eq!(interval.planned_duration, DEFAULT_POMODORO);
        assert_eq!(interval.start_time, None);
    }

    #[test]
    fn resumable_interval_is_returned_unchanged() {
        let (repo, config) = config();
        let mut first = get_interval(&config).unwrap();
        first.state = IntervalState::Paused;
        first.actual_duration = Duration::from_secs(42);
        repo.update(&first).unwrap();

        let again = get_interval(&config).unwrap();
        assert_eq!(again, first);
    }

    #[test]
    fn terminal_interval_is_followed_by_next_id() {
        let (repo, config) = config();
        for terminal in [IntervalState::Done, IntervalState::Cancelled] {
            let mut current = get_interval(&config).unwrap();
            current.state = terminal;
            repo.update(&current).unwrap();

            let next = get_interval(&config).unwrap();
            assert_eq!(next.id, current.id + 1);
            assert_eq!(next.state, IntervalState::NotStarted);
        }
    }

    #[test]
    fn remaining_saturates() {
        let mut interval = Interval::new(Category::ShortBreak, Duration::from_secs(2));
        interval.actual_duration = Duration::from_secs(3);
        assert_eq!(interval.remaining(), Duration::ZERO);
    }
}
