//! Bounded history of the epicycle tip's vertical coordinate.

use std::collections::VecDeque;

use crate::TRACE_CAPACITY;

/// Sliding window of tip heights, newest first.
///
/// Pushing past capacity evicts the oldest entry, so the history always
/// holds the most recent `capacity` values.
#[derive(Debug, Clone)]
pub struct TraceHistory {
    values: VecDeque<f64>,
    capacity: usize,
}

impl TraceHistory {
    pub fn new() -> Self {
        Self::with_capacity(TRACE_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Insert the newest value at the front, dropping the oldest at capacity
    pub fn push(&mut self, y: f64) {
        if self.capacity == 0 {
            return;
        }
        self.values.push_front(y);
        if self.values.len() > self.capacity {
            self.values.pop_back();
        }
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Most recent value
    pub fn newest(&self) -> Option<f64> {
        self.values.front().copied()
    }

    /// Values from newest to oldest
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }

    /// Lay the history out left to right, newest at `x_start`, one
    /// `x_step` per frame. Ready for a line chart.
    pub fn points(&self, x_start: f64, x_step: f64) -> Vec<(f64, f64)> {
        self.values
            .iter()
            .enumerate()
            .map(|(i, &y)| (x_start + i as f64 * x_step, y))
            .collect()
    }
}

impl Default for TraceHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newest_first() {
        let mut trace = TraceHistory::with_capacity(4);
        trace.push(1.0);
        trace.push(2.0);
        trace.push(3.0);
        assert_eq!(trace.iter().collect::<Vec<_>>(), vec![3.0, 2.0, 1.0]);
        assert_eq!(trace.newest(), Some(3.0));
    }

    #[test]
    fn test_evicts_oldest_at_capacity() {
        let mut trace = TraceHistory::new();
        for i in 0..(TRACE_CAPACITY + 37) {
            trace.push(i as f64);
        }
        assert_eq!(trace.len(), TRACE_CAPACITY);

        let values: Vec<f64> = trace.iter().collect();
        let newest = (TRACE_CAPACITY + 36) as f64;
        assert_eq!(values[0], newest);
        assert_eq!(values[TRACE_CAPACITY - 1], newest - (TRACE_CAPACITY - 1) as f64);
    }

    #[test]
    fn test_zero_capacity_stays_empty() {
        let mut trace = TraceHistory::with_capacity(0);
        trace.push(1.0);
        assert!(trace.is_empty());
    }

    #[test]
    fn test_points_layout() {
        let mut trace = TraceHistory::with_capacity(8);
        trace.push(-1.0);
        trace.push(0.5);
        assert_eq!(trace.points(10.0, 2.0), vec![(10.0, 0.5), (12.0, -1.0)]);
    }
}
