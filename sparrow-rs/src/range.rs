//! Range iteration and key/value iteration.
//!
//! [`Loop`] is the value behind `loop(start, end, step)`: a lazy, inclusive,
//! restartable integer range.  [`KeyValues`] is the `for (k, v in c)` form,
//! yielding `(key, value)` pairs in the container's natural order.

use std::collections::BTreeMap;
use std::fmt;

/// Lazy inclusive integer range `start, start+step, … <= end`.
///
/// A `Loop` holds no cursor, so every `into_iter()` starts again from
/// `start`.  A non-positive `step` or `start > end` yields nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Loop {
    pub start: i64,
    pub end: i64,
    pub step: i64,
}

impl Loop {
    pub fn new(start: i64, end: i64, step: i64) -> Self {
        Loop { start, end, step }
    }

    /// Returns `true` if iterating this loop yields no values.
    pub fn is_empty(&self) -> bool {
        self.step <= 0 || self.start > self.end
    }

    /// Number of values the loop yields.
    ///
    /// `u128` because `loop(i64::MIN, i64::MAX, 1)` yields 2^64 values.
    pub fn len(&self) -> u128 {
        if self.is_empty() {
            return 0;
        }
        let span = (self.end as i128 - self.start as i128) as u128;
        span / self.step as u128 + 1
    }

    pub fn iter(&self) -> LoopIter {
        LoopIter {
            next: if self.is_empty() { None } else { Some(self.start) },
            end: self.end,
            step: self.step,
        }
    }
}

impl fmt::Display for Loop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "loop(start:{},end:{},step:{})", self.start, self.end, self.step)
    }
}

impl IntoIterator for Loop {
    type Item = i64;
    type IntoIter = LoopIter;

    fn into_iter(self) -> LoopIter {
        self.iter()
    }
}

impl IntoIterator for &Loop {
    type Item = i64;
    type IntoIter = LoopIter;

    fn into_iter(self) -> LoopIter {
        self.iter()
    }
}

/// Cursor over a [`Loop`].
#[derive(Debug, Clone)]
pub struct LoopIter {
    next: Option<i64>,
    end: i64,
    step: i64,
}

impl Iterator for LoopIter {
    type Item = i64;

    #[inline]
    fn next(&mut self) -> Option<i64> {
        let cur = self.next?;
        // Stop rather than wrap when the next step would overflow.
        self.next = cur.checked_add(self.step).filter(|&n| n <= self.end);
        Some(cur)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.next {
            None => (0, Some(0)),
            Some(cur) => {
                let remaining = Loop::new(cur, self.end, self.step).len();
                match usize::try_from(remaining) {
                    Ok(n) => (n, Some(n)),
                    Err(_) => (usize::MAX, None),
                }
            }
        }
    }
}

impl std::iter::FusedIterator for LoopIter {}

// ── Key/value iteration ───────────────────────────────────────────────────────

/// Containers that can be walked as `(key, value)` pairs.
pub trait KeyValues {
    type Key;
    type Value;

    fn key_values(&self) -> impl Iterator<Item = (Self::Key, Self::Value)> + '_;
}

impl KeyValues for [i64] {
    type Key = usize;
    type Value = i64;

    fn key_values(&self) -> impl Iterator<Item = (usize, i64)> + '_ {
        self.iter().copied().enumerate()
    }
}

impl KeyValues for Vec<i64> {
    type Key = usize;
    type Value = i64;

    fn key_values(&self) -> impl Iterator<Item = (usize, i64)> + '_ {
        self.as_slice().key_values()
    }
}

impl<const N: usize> KeyValues for [i64; N] {
    type Key = usize;
    type Value = i64;

    fn key_values(&self) -> impl Iterator<Item = (usize, i64)> + '_ {
        self.as_slice().key_values()
    }
}

impl<K: Clone> KeyValues for BTreeMap<K, i64> {
    type Key = K;
    type Value = i64;

    fn key_values(&self) -> impl Iterator<Item = (K, i64)> + '_ {
        self.iter().map(|(k, v)| (k.clone(), *v))
    }
}

/// A loop dereferences to its current index for both key and value.
impl KeyValues for Loop {
    type Key = i64;
    type Value = i64;

    fn key_values(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        self.iter().map(|i| (i, i))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
