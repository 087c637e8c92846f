//! Tick engine: drives a running interval until it is paused, expires, or is
//! cancelled.
//!
//! ## State Transitions
//!
//! ```text
//! NotStarted -> Running -> Paused -> Running -> ...
//!                  |
//!                  +-> Done       (planned duration elapsed)
//!                  +-> Cancelled  (cancellation token fired)
//! ```
//!
//! The loop waits on three signals: a one-second ticker, a one-shot expiry
//! timer sized to the remaining planned time, and the caller's
//! [`CancellationToken`]. Each tick reloads the interval from the repository,
//! so a pause written by someone else is seen within one second.
//!
//! ## Usage
//!
//! ```ignore
//! let interval = get_interval(&config)?;
//! let outcome = interval.start(&config, &mut NoopHooks, &cancel).await?;
//! ```

use std::time::Duration;

use chrono::Utc;
use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::hooks::IntervalHooks;
use crate::error::{CoreError, Result};
use crate::interval::{Interval, IntervalConfig, IntervalState};

/// One unit of recorded progress.
pub const TICK: Duration = Duration::from_secs(1);

/// How a call to [`Interval::start`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The interval was already running; nothing was done.
    AlreadyRunning,
    /// Another tick loop holds this interval id; nothing was done.
    Busy,
    /// A pause was observed on a tick.
    Paused,
    /// The planned duration elapsed and the interval is `Done`.
    Expired,
    /// The cancellation token fired and the interval is `Cancelled`.
    Cancelled,
}

impl Interval {
    /// Start or resume this interval and tick it until it stops.
    ///
    /// Rejected transitions return an error before anything is persisted.
    pub async fn start<H>(
        &self,
        config: &IntervalConfig,
        hooks: &mut H,
        cancel: &CancellationToken,
    ) -> Result<TickOutcome>
    where
        H: IntervalHooks + ?Sized,
    {
        let mut interval = self.clone();
        match interval.state {
            IntervalState::Running => return Ok(TickOutcome::AlreadyRunning),
            IntervalState::Done | IntervalState::Cancelled => {
                return Err(CoreError::IntervalCompleted)
            }
            IntervalState::NotStarted => interval.start_time = Some(Utc::now()),
            IntervalState::Paused => {}
        }

        let Some(_claim) = config.claim(interval.id)? else {
            warn!(id = interval.id, "interval already has a live tick loop");
            return Ok(TickOutcome::Busy);
        };

        interval.state = IntervalState::Running;
        config.repo().update(&interval)?;
        info!(
            id = interval.id,
            category = %interval.category,
            remaining_secs = interval.remaining().as_secs(),
            "interval running"
        );

        tick(interval.id, config, hooks, cancel).await
    }

    /// Pause a running interval.
    ///
    /// The stored record is reloaded before writing so progress ticked since
    /// this snapshot was taken is kept.
    pub fn pause(&self, config: &IntervalConfig) -> Result<()> {
        if self.state != IntervalState::Running {
            return Err(CoreError::IntervalNotRunning);
        }

        let mut interval = config.repo().by_id(self.id)?;
        if interval.state != IntervalState::Running {
            return Err(CoreError::IntervalNotRunning);
        }
        interval.state = IntervalState::Paused;
        config.repo().update(&interval)?;
        info!(
            id = interval.id,
            actual_secs = interval.actual_duration.as_secs(),
            "interval paused"
        );
        Ok(())
    }
}

async fn tick<H>(
    id: i64,
    config: &IntervalConfig,
    hooks: &mut H,
    cancel: &CancellationToken,
) -> Result<TickOutcome>
where
    H: IntervalHooks + ?Sized,
{
    let repo = config.repo();
    let interval = repo.by_id(id)?;

    let now = Instant::now();
    let expire = time::sleep_until(now + interval.remaining());
    tokio::pin!(expire);
    let mut ticker = time::interval_at(now + TICK, TICK);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    hooks.on_start(&interval);

    loop {
        // Cancellation first, then ticks, then expiry: a tick due at the same
        // instant as expiry is recorded before the interval is closed.
        tokio::select! {
            biased;

            _ = cancel.cancelled() => {
                let mut interval = repo.by_id(id)?;
                interval.state = IntervalState::Cancelled;
                repo.update(&interval)?;
                info!(id, actual_secs = interval.actual_duration.as_secs(), "interval cancelled");
                return Ok(TickOutcome::Cancelled);
            }

            _ = ticker.tick() => {
                let mut interval = repo.by_id(id)?;
                if interval.state == IntervalState::Paused {
                    debug!(id, "pause observed, leaving tick loop");
                    return Ok(TickOutcome::Paused);
                }

                interval.actual_duration += TICK;
                repo.update(&interval)?;
                debug!(id, actual_secs = interval.actual_duration.as_secs(), "tick");
                hooks.on_tick(&interval);
            }

            _ = &mut expire => {
                let mut interval = repo.by_id(id)?;
                interval.state = IntervalState::Done;
                repo.update(&interval)?;
                info!(id, category = %interval.category, "interval done");
                hooks.on_expire(&interval);
                return Ok(TickOutcome::Expired);
            }
        }
    }
}
