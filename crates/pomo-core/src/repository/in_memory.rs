use std::sync::RwLock;

use super::Repository;
use crate::error::{CoreError, Result};
use crate::interval::Interval;

/// Arena of intervals behind a reader/writer lock.
///
/// An id is the 1-based position in the arena, so `id - 1` is the index.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    intervals: RwLock<Vec<Interval>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.intervals.read()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

fn index_of(id: i64, len: usize) -> Result<usize> {
    if id < 1 || id as u64 > len as u64 {
        return Err(CoreError::InvalidId(id));
    }
    Ok((id - 1) as usize)
}

impl Repository for InMemoryRepository {
    fn create(&self, interval: &Interval) -> Result<i64> {
        let mut intervals = self.intervals.write()?;
        let mut record = interval.clone();
        record.id = intervals.len() as i64 + 1;
        let id = record.id;
        intervals.push(record);
        Ok(id)
    }

    fn update(&self, interval: &Interval) -> Result<()> {
        let mut intervals = self.intervals.write()?;
        let idx = index_of(interval.id, intervals.len())?;
        intervals[idx] = interval.clone();
        Ok(())
    }

    fn by_id(&self, id: i64) -> Result<Interval> {
        let intervals = self.intervals.read()?;
        let idx = index_of(id, intervals.len())?;
        Ok(intervals[idx].clone())
    }

    fn last(&self) -> Result<Interval> {
        self.intervals
            .read()?
            .last()
            .cloned()
            .ok_or(CoreError::NoIntervals)
    }

    fn breaks(&self, n: usize) -> Result<Vec<Interval>> {
        let intervals = self.intervals.read()?;
        Ok(intervals
            .iter()
            .rev()
            .filter(|i| i.category.is_break())
            .take(n)
            .cloned()
            .collect())
    }
}
