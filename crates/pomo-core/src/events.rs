use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::interval::{Category, Interval, IntervalState};

/// A record of something the tick engine did to an interval.
/// Produced by [`crate::timer::EventHooks`] for callers that prefer
/// serializable events over raw callbacks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    IntervalStarted {
        id: i64,
        category: Category,
        planned_secs: u64,
        actual_secs: u64,
        at: DateTime<Utc>,
    },
    IntervalTicked {
        id: i64,
        actual_secs: u64,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    IntervalExpired {
        id: i64,
        category: Category,
        state: IntervalState,
        at: DateTime<Utc>,
    },
}

impl Event {
    pub fn started(interval: &Interval) -> Self {
        Event::IntervalStarted {
            id: interval.id,
            category: interval.category,
            planned_secs: interval.planned_duration.as_secs(),
            actual_secs: interval.actual_duration.as_secs(),
            at: Utc::now(),
        }
    }

    pub fn ticked(interval: &Interval) -> Self {
        Event::IntervalTicked {
            id: interval.id,
            actual_secs: interval.actual_duration.as_secs(),
            remaining_secs: interval.remaining().as_secs(),
            at: Utc::now(),
        }
    }

    pub fn expired(interval: &Interval) -> Self {
        Event::IntervalExpired {
            id: interval.id,
            category: interval.category,
            state: interval.state,
            at: Utc::now(),
        }
    }

    pub fn interval_id(&self) -> i64 {
        match self {
            Event::IntervalStarted { id, .. }
            | Event::IntervalTicked { id, .. }
            | Event::IntervalExpired { id, .. } => *id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn ticked_reports_remaining_time() {
        let mut interval = Interval::new(Category::Pomodoro, Duration::from_secs(10));
        interval.id = 4;
        interval.actual_duration = Duration::from_secs(3);
        match Event::ticked(&interval) {
            Event::IntervalTicked { id, actual_secs, remaining_secs, .. } => {
                assert_eq!(id, 4);
                assert_eq!(actual_secs, 3);
                assert_eq!(remaining_secs, 7);
            }
            other => panic!("Expected IntervalTicked, got {other:?}"),
        }
    }

    #[test]
    fn serializes_with_type_tag() {
        let mut interval = Interval::new(Category::LongBreak, Duration::from_secs(1));
        interval.id = 2;
        interval.state = IntervalState::Done;
        let json = serde_json::to_value(Event::expired(&interval)).unwrap();
        assert_eq!(json["type"], "IntervalExpired");
        assert_eq!(json["category"], "LongBreak");
        assert_eq!(json["state"], 3);
    }
}
