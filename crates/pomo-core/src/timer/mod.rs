mod engine;
mod hooks;

pub use engine::{TickOutcome, TICK};
pub use hooks::{EventHooks, FnHooks, IntervalHooks, NoopHooks};
