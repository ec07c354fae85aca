// plotting/mod.rs
// Bounded time series feeding the live force chart

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Fixed-capacity FIFO of samples; the oldest one is evicted on overflow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSeries {
    samples: VecDeque<f32>,
    capacity: usize,
}

impl TimeSeries {
    /// A zero capacity is bumped to one so `push` always keeps the newest sample.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, value: f32) {
        while self.samples.len() >= self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(value);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn latest(&self) -> Option<f32> {
        self.samples.back().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ {
        self.samples.iter().copied()
    }

    /// Samples oldest first.
    pub fn values(&self) -> Vec<f32> {
        self.samples.iter().copied().collect()
    }

    /// (min, max) of the stored samples, for chart autoscaling.
    pub fn range(&self) -> Option<(f32, f32)> {
        let mut iter = self.samples.iter().copied();
        let first = iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }
}

/// The two signals charted for the most recently spawned particle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForcePlots {
    /// Magnitude of the field force
    pub lorentz: TimeSeries,
    /// Scaled charge value
    pub electric: TimeSeries,
}

impl ForcePlots {
    pub fn new(capacity: usize) -> Self {
        Self {
            lorentz: TimeSeries::new(capacity),
            electric: TimeSeries::new(capacity),
        }
    }

    pub fn record(&mut self, lorentz: f32, electric: f32) {
        self.lorentz.push(lorentz);
        self.electric.push(electric);
    }
}

#[cfg(test)]
mod tests;
