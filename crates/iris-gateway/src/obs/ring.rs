//! Fixed-capacity ring buffer.
//!
//! Slots are allocated once; pushing into a full buffer overwrites the oldest
//! slot and hands the evicted value back.

use iris_core::error::{IrisError, Result};

#[derive(Debug, Clone)]
pub struct RingBuffer<T> {
    slots: Vec<Option<T>>,
    /// Index of the oldest element.
    head: usize,
    len: usize,
}

impl<T> RingBuffer<T> {
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(IrisError::BadRequest("ring buffer capacity must be > 0".into()));
        }
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Ok(Self { slots, head: 0, len: 0 })
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Append `value`; returns the evicted oldest element when full.
    pub fn push(&mut self, value: T) -> Option<T> {
        let cap = self.capacity();
        if self.len < cap {
            let tail = (self.head + self.len) % cap;
            self.slots[tail] = Some(value);
            self.len += 1;
            None
        } else {
            let evicted = self.slots[self.head].replace(value);
            self.head = (self.head + 1) % cap;
            evicted
        }
    }

    /// Iterate oldest -> newest.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        let cap = self.capacity();
        (0..self.len).filter_map(move |i| self.slots[(self.head + i) % cap].as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_capacity_rejected() {
        assert!(RingBuffer::<u8>::with_capacity(0).is_err());
    }

    #[test]
    fn fills_then_evicts_oldest_first() {
        let mut r = RingBuffer::with_capacity(3).unwrap();
        assert_eq!(r.push(1), None);
        assert_eq!(r.push(2), None);
        assert_eq!(r.push(3), None);
        assert_eq!(r.len(), 3);
        assert_eq!(r.push(4), Some(1));
        assert_eq!(r.push(5), Some(2));
        assert_eq!(r.iter().copied().collect::<Vec<_>>(), vec![3, 4, 5]);
        assert_eq!(r.iter().next(), Some(&3));
        assert_eq!(r.len(), 3);
    }

    #[test]
    fn fifty_one_pushes_keep_fifty() {
        let mut r = RingBuffer::with_capacity(50).unwrap();
        for i in 1..=51 {
            r.push(i);
        }
        assert_eq!(r.len(), 50);
        assert_eq!(r.iter().next(), Some(&2));
        assert!(!r.iter().any(|&v| v == 1));
        assert_eq!(r.iter().last(), Some(&51));
    }

    #[test]
    fn wraps_many_times() {
        let mut r = RingBuffer::with_capacity(4).unwrap();
        for i in 0..1_000 {
            r.push(i);
        }
        assert_eq!(r.iter().copied().collect::<Vec<_>>(), vec![996, 997, 998, 999]);
        assert_eq!(r.capacity(), 4);
    }
}
