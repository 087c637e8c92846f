//! # Pomo Core Library
//!
//! Core logic for a Pomodoro-technique interval timer: interval records and
//! their state machine, the work/break category scheduler, and an async tick
//! engine that persists progress every second.
//!
//! ## Architecture
//!
//! - **Repository**: persistence contract plus an in-memory reference store
//! - **Interval**: the record, its states, and the "get next interval" lifecycle
//! - **Scheduler**: derives the next category from break history
//! - **Timer**: tokio tick loop with start/pause/expire/cancel and caller hooks
//! - **Storage**: TOML configuration for interval lengths
//!
//! ## Key Components
//!
//! - [`get_interval`]: resume the active interval or create the next one
//! - [`Interval::start`] / [`Interval::pause`]: drive the state machine
//! - [`Repository`]: trait implemented by storage backends
//! - [`IntervalHooks`]: callbacks fired by the tick engine

pub mod error;
pub mod events;
pub mod interval;
pub mod repository;
pub mod scheduler;
pub mod storage;
pub mod timer;

pub use error::{ConfigError, CoreError, Result};
pub use events::Event;
pub use interval::{get_interval, Category, Interval, IntervalConfig, IntervalState};
pub use repository::{InMemoryRepository, Repository};
pub use scheduler::next_category;
pub use storage::{Config, ScheduleConfig};
pub use timer::{EventHooks, FnHooks, IntervalHooks, NoopHooks, TickOutcome, TICK};
pub use tokio_util::sync::CancellationToken;
