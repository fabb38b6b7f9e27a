use crate::error::{HwmonError, Result};
use std::collections::VecDeque;

/// Largest buffer reserved up front; bigger windows grow on demand.
const PREALLOC_LIMIT: usize = 1 << 16;

/// Fixed-capacity history of the most recent values, oldest first.
///
/// Backed by a ring buffer so eviction is O(1). The oldest value is evicted
/// before a push would exceed `capacity`.
#[derive(Debug, Clone, PartialEq)]
pub struct RollingWindow<T> {
    values:   VecDeque<T>,
    capacity: usize,
}

impl<T> RollingWindow<T> {
    /// An empty window holding at most `capacity` values.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(HwmonError::InvalidCapacity);
        }
        Ok(Self {
            values: VecDeque::with_capacity(capacity.min(PREALLOC_LIMIT)),
            capacity,
        })
    }

    /// A full window with every slot set to `value`.
    pub fn filled(capacity: usize, value: T) -> Result<Self>
    where
        T: Clone,
    {
        let mut window = Self::new(capacity)?;
        window.values.extend(std::iter::repeat(value).take(capacity));
        Ok(window)
    }

    /// Append `value`, returning the evicted oldest value when at capacity.
    pub fn push(&mut self, value: T) -> Option<T> {
        let evicted = if self.values.len() == self.capacity {
            self.values.pop_front()
        } else {
            None
        };
        self.values.push_back(value);
        evicted
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Most recently pushed value.
    pub fn latest(&self) -> Option<&T> {
        self.values.back()
    }

    /// Values in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.values.iter()
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.values.iter().cloned().collect()
    }
}

impl RollingWindow<f32> {
    /// Average of all samples in the window.
    pub fn average(&self) -> f32 {
        if self.values.is_empty() {
            return 0.0;
        }
        self.values.iter().sum::<f32>() / self.values.len() as f32
    }
}
