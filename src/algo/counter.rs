use std::collections::HashMap;
use std::hash::Hash;

use super::window::WindowAggregate;

/// Occurrence counts keyed by element value.
///
/// An entry disappears as soon as its count drops to zero, so `distinct`
/// is always the number of different values currently counted.
#[derive(Debug, Clone)]
pub struct Counter<T> {
    counts: HashMap<T, usize>,
}

impl<T: Eq + Hash> Counter<T> {
    pub fn new() -> Self {
        Counter {
            counts: HashMap::new(),
        }
    }

    pub fn add(&mut self, item: T) {
        *self.counts.entry(item).or_insert(0) += 1;
    }

    /// Removes one occurrence of `item`, if counted.
    pub fn remove(&mut self, item: &T) {
        match self.counts.get_mut(item) {
            Some(n) if *n > 1 => *n -= 1,
            Some(_) => {
                self.counts.remove(item);
            }
            None => (),
        }
    }

    pub fn distinct(&self) -> usize {
        self.counts.len()
    }
}

impl<T: Eq + Hash> Default for Counter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash + Clone> WindowAggregate<T> for Counter<T> {
    fn push(&mut self, item: &T) {
        self.add(item.clone());
    }
    fn pop(&mut self, item: &T) {
        self.remove(item);
    }
}

/// Byte counts over the 7-bit ASCII range. Other bytes are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsciiCounter {
    counts: [usize; 128],
}

impl AsciiCounter {
    pub fn new() -> Self {
        AsciiCounter { counts: [0; 128] }
    }

    pub fn add(&mut self, b: u8) {
        if b.is_ascii() {
            self.counts[usize::from(b)] += 1;
        }
    }

    pub fn remove(&mut self, b: u8) {
        if b.is_ascii() {
            let n = &mut self.counts[usize::from(b)];
            *n = n.saturating_sub(1);
        }
    }

    pub fn count(&self, b: u8) -> usize {
        if b.is_ascii() {
            self.counts[usize::from(b)]
        } else {
            0
        }
    }

    /// True when every ASCII letter occurs here at least as often as in `need`.
    pub fn covers(&self, need: &AsciiCounter) -> bool {
        (b'A'..=b'Z')
            .chain(b'a'..=b'z')
            .all(|b| self.count(b) >= need.count(b))
    }
}

impl Default for AsciiCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<u8> for AsciiCounter {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut counter = AsciiCounter::new();
        for b in iter {
            counter.add(b);
        }
        counter
    }
}

#[cfg(test)]
mod tests {
    use super::{AsciiCounter, Counter};
    use crate::algo::window::fixed_windows;

    #[test]
    fn entries_vanish_at_zero() {
        let mut c = Counter::new();
        for x in [4, 4, 5] {
            c.add(x);
        }
        assert_eq!(c.distinct(), 2);
        c.remove(&4);
        assert_eq!(c.distinct(), 2);
        c.remove(&4);
        assert_eq!(c.distinct(), 1);
        c.remove(&4);
        assert_eq!(c.distinct(), 1);
        c.remove(&5);
        assert_eq!(c.distinct(), 0);
    }

    #[test]
    fn distinct_values_per_window() {
        let mut distinct = vec![];
        fixed_windows(&[1i32, 4, 4, 5, 1], 3, Counter::<i32>::new(), |c, _, _| {
            distinct.push(c.distinct())
        })
        .unwrap();
        assert_eq!(distinct, vec![2, 2, 3]);
    }

    #[test]
    fn ascii_coverage() {
        let need: AsciiCounter = "ABBc".bytes().collect();
        let mut have: AsciiCounter = "cBAx".bytes().collect();
        assert!(!have.covers(&need));
        have.add(b'B');
        assert!(have.covers(&need));
        have.remove(b'c');
        assert!(!have.covers(&need));
    }

    #[test]
    fn non_ascii_bytes_are_ignored() {
        let mut c = AsciiCounter::new();
        c.add(0xC3);
        assert_eq!(c.count(0xC3), 0);
        c.remove(0xC3);
        assert_eq!(c, AsciiCounter::new());
        assert!(c.covers(&AsciiCounter::new()));
    }
}
