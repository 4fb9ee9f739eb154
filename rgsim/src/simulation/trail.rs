//! Fixed-capacity photon history.
//!
//! A ring buffer over a preallocated `Vec`: `head` is the slot of the oldest
//! point, `len` the number of live points. Once full, a push overwrites the
//! oldest point, so the buffer always holds the most recent `capacity`
//! positions in chronological order.

use super::states::NVec3;

pub const DEFAULT_TRAIL_POINTS: usize = 1000;

#[derive(Debug, Clone)]
pub struct TrailBuffer {
    points: Vec<NVec3>,
    head: usize,
    len: usize,
}

impl TrailBuffer {
    /// Empty buffer holding at most `capacity` points (at least one)
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: vec![NVec3::zeros(); capacity.max(1)],
            head: 0,
            len: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.points.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Append a point, evicting the oldest one when full
    pub fn push(&mut self, p: NVec3) {
        let cap = self.capacity();
        if self.len < cap {
            let slot = (self.head + self.len) % cap;
            self.points[slot] = p;
            self.len += 1;
        } else {
            // head is the oldest slot; overwrite it and advance
            self.points[self.head] = p;
            self.head = (self.head + 1) % cap;
        }
    }

    /// Oldest retained point
    pub fn oldest(&self) -> Option<&NVec3> {
        self.get(0)
    }

    /// Most recent point
    pub fn newest(&self) -> Option<&NVec3> {
        self.len.checked_sub(1).and_then(|i| self.get(i))
    }

    /// `i`-th point in chronological order (0 = oldest)
    pub fn get(&self, i: usize) -> Option<&NVec3> {
        if i >= self.len {
            return None;
        }
        Some(&self.points[(self.head + i) % self.capacity()])
    }

    /// Points oldest-first
    pub fn iter(&self) -> impl Iterator<Item = &NVec3> + '_ {
        (0..self.len).map(move |i| &self.points[(self.head + i) % self.capacity()])
    }

    /// Owned copy of the points, oldest-first
    pub fn snapshot(&self) -> Vec<NVec3> {
        self.iter().copied().collect()
    }

    pub fn clear(&mut self) {
        self.head = 0;
        self.len = 0;
    }
}

impl Default for TrailBuffer {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_TRAIL_POINTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(i: usize) -> NVec3 {
        NVec3::new(i as f64, 0.0, 0.0)
    }

    #[test]
    fn fills_in_order_below_capacity() {
        let mut trail = TrailBuffer::with_capacity(4);
        for i in 0..3 {
            trail.push(p(i));
        }
        assert_eq!(trail.len(), 3);
        assert!(!trail.is_full());
        assert_eq!(trail.snapshot(), vec![p(0), p(1), p(2)]);
        assert_eq!(trail.newest(), Some(&p(2)));
    }

    #[test]
    fn wraps_and_keeps_chronological_order() {
        let mut trail = TrailBuffer::with_capacity(4);
        for i in 0..10 {
            trail.push(p(i));
        }
        assert_eq!(trail.len(), 4);
        assert_eq!(trail.snapshot(), vec![p(6), p(7), p(8), p(9)]);
        assert_eq!(trail.oldest(), Some(&p(6)));
        assert!(trail.get(4).is_none());
    }

    #[test]
    fn clear_empties_without_shrinking() {
        let mut trail = TrailBuffer::with_capacity(3);
        trail.push(p(1));
        trail.push(p(2));
        trail.clear();
        assert!(trail.is_empty());
        assert_eq!(trail.capacity(), 3);
        assert!(trail.newest().is_none());
    }
}
