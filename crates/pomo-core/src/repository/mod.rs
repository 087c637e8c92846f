//! Persistence contract for intervals.
//!
//! The core never talks to a storage backend directly; everything goes
//! through [`Repository`]. Implementations must serialize their own reads and
//! writes, since a running tick loop and a caller's pause can race.

mod in_memory;

pub use in_memory::InMemoryRepository;

use crate::error::Result;
use crate::interval::Interval;

pub trait Repository: Send + Sync {
    /// Store a new interval and return its id: positive and sequential.
    fn create(&self, interval: &Interval) -> Result<i64>;

    /// Overwrite an existing interval.
    ///
    /// Fails with `InvalidId` when the id is below 1 or unknown.
    fn update(&self, interval: &Interval) -> Result<()>;

    /// Fails with `InvalidId` when the id is below 1 or unknown.
    fn by_id(&self, id: i64) -> Result<Interval>;

    /// The most recently created interval, or `NoIntervals`.
    fn last(&self) -> Result<Interval>;

    /// Up to `n` most recent break intervals, most recent first.
    fn breaks(&self, n: usize) -> Result<Vec<Interval>>;
}
