//! Picks the category of the next interval from repository history.
//!
//! ```text
//! P1 -> short -> P2 -> short -> P3 -> short -> P4 -> long -> P1 ...
//! ```
//!
//! Every break is followed by a Pomodoro. After a Pomodoro the last three
//! breaks decide: three short breaks in a row earn a long break, anything
//! else is a short break. The position in the cycle is never stored.

use crate::error::{CoreError, Result};
use crate::interval::Category;
use crate::repository::Repository;

/// Breaks inspected when deciding between a short and a long break.
const BREAKS_BEFORE_LONG: usize = 3;

pub fn next_category(repo: &dyn Repository) -> Result<Category> {
    let last = match repo.last() {
        Ok(last) => last,
        Err(CoreError::NoIntervals) => return Ok(Category::Pomodoro),
        Err(e) => return Err(e),
    };

    if last.category.is_break() {
        return Ok(Category::Pomodoro);
    }

    let breaks = repo.breaks(BREAKS_BEFORE_LONG)?;
    if breaks.len() < BREAKS_BEFORE_LONG
        || breaks.iter().any(|b| b.category == Category::LongBreak)
    {
        return Ok(Category::ShortBreak);
    }

    Ok(Category::LongBreak)
}
