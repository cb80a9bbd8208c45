// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Lexicographic permutation generator.
//!
//! The generator keeps an array of counters, indices into the element array,
//! and emits the elements in counter order. Counters are advanced by a pool
//! and pivot step:
//!
//! 1. Scan backward from the last position, moving each counter into a pool
//!    of free values and tracking the largest counter seen so far.
//! 2. The first position whose counter is below that maximum is the pivot. It
//!    takes the smallest larger counter from the positions after it.
//! 3. The rest of the pool is sorted and written back to the positions after
//!    the pivot.
//! 4. No pivot means the counters are in descending order: the last
//!    permutation has been reached.
//!
//! The result is plain ascending lexicographic order over the counters.
//!
//! A shard fixes a prefix of the counters; the scan then stops at the first
//! free position, so the shard covers exactly the permutations with that
//! prefix.

use crate::error::ShardError;
use crate::geometry::Arrangement;

/// Generator state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// The counters hold a permutation that has not been emitted yet.
    Running,
    /// The counters hold the last permutation; no successor exists.
    Exhausted,
}

/// Enumerates the permutations of `N` distinct elements.
#[derive(Debug, Clone)]
pub struct Permutations<const N: usize> {
    elements: [u32; N],
    counters: [usize; N],
    /// Positions `0..fixed` never change.
    fixed: usize,
    state: State,
    /// Set once the iterator has yielded the last permutation.
    drained: bool,
}

impl<const N: usize> Permutations<N> {
    /// Start from the identity ordering of `elements`.
    pub fn new(elements: [u32; N]) -> Self {
        Self {
            elements,
            counters: std::array::from_fn(|i| i),
            fixed: 0,
            state: State::Running,
            drained: false,
        }
    }

    /// Enumerate only the permutations whose first counters are `prefix`.
    ///
    /// The remaining counters start in ascending order, so the first
    /// permutation emitted is the smallest one with this prefix.
    pub fn with_prefix(elements: [u32; N], prefix: &[usize]) -> Result<Self, ShardError> {
        if prefix.len() > N {
            return Err(ShardError::PrefixTooLong {
                length: prefix.len(),
                positions: N,
            });
        }
        let mut used = [false; N];
        for &counter in prefix {
            if counter >= N {
                return Err(ShardError::CounterOutOfRange {
                    counter,
                    positions: N,
                });
            }
            if std::mem::replace(&mut used[counter], true) {
                return Err(ShardError::RepeatedCounter { counter });
            }
        }

        let mut counters = [0; N];
        counters[..prefix.len()].copy_from_slice(prefix);
        let free = (0..N).filter(|&c| !used[c]);
        for (slot, counter) in counters[prefix.len()..].iter_mut().zip(free) {
            *slot = counter;
        }

        Ok(Self {
            elements,
            counters,
            fixed: prefix.len(),
            state: State::Running,
            drained: false,
        })
    }

    /// Current counter state.
    pub fn counters(&self) -> &[usize; N] {
        &self.counters
    }

    /// True once no permutation follows the current one.
    pub fn is_exhausted(&self) -> bool {
        self.state == State::Exhausted
    }

    /// Write the current permutation into `out`, then advance.
    ///
    /// Returns `false` when the permutation just written was the last one.
    /// Calls after that keep writing the last permutation and returning
    /// `false`.
    pub fn next_into(&mut self, out: &mut Arrangement<N>) -> bool {
        for (slot, &counter) in out.values_mut().iter_mut().zip(self.counters.iter()) {
            *slot = self.elements[counter];
        }

        if self.state == State::Exhausted {
            return false;
        }
        match advance(&self.counters, self.fixed) {
            Some(next) => {
                self.counters = next;
                true
            }
            None => {
                self.state = State::Exhausted;
                false
            }
        }
    }
}

impl<const N: usize> Iterator for Permutations<N> {
    type Item = Arrangement<N>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.drained {
            return None;
        }
        let mut out = Arrangement::new(self.elements);
        if !self.next_into(&mut out) {
            self.drained = true;
        }
        Some(out)
    }
}

/// The counters following `counters` in lexicographic order, leaving
/// positions `0..fixed` untouched, or `None` if there are none.
///
/// # Panics
///
/// Panics if the pool bookkeeping becomes inconsistent. That can only happen
/// when `counters` holds repeated values, and means the enumeration can no
/// longer be trusted.
pub fn advance<const N: usize>(counters: &[usize; N], fixed: usize) -> Option<[usize; N]> {
    if N < 2 {
        return None;
    }

    let mut pool = [0usize; N];
    let mut pooled = 1;
    pool[0] = counters[N - 1];
    let mut max = counters[N - 1];

    for i in (fixed..N - 1).rev() {
        let current = counters[i];
        pool[pooled] = current;
        pooled += 1;

        if current >= max {
            // Everything from here on is descending: carry to the left.
            max = current;
            continue;
        }

        let Some(bigger) = next_bigger(counters, i) else {
            panic!(
                "permutation generator failed to find a successor for counter {} at position {} in {:?}",
                current, i, counters
            );
        };

        let mut next = *counters;
        next[i] = bigger;

        let taken = pool[..pooled]
            .iter()
            .position(|&c| c == bigger)
            .unwrap_or_else(|| panic!("counter {} missing from the free pool {:?}", bigger, &pool[..pooled]));
        pool.copy_within(taken + 1..pooled, taken);
        pooled -= 1;

        let free = &mut pool[..pooled];
        free.sort_unstable();
        if free.len() != N - i - 1 {
            panic!(
                "free pool holds {} counters but {} positions follow the pivot at {}",
                free.len(),
                N - i - 1,
                i
            );
        }
        next[i + 1..].copy_from_slice(free);
        return Some(next);
    }
    None
}

/// Smallest counter after `start` that is larger than the counter at `start`.
fn next_bigger<const N: usize>(counters: &[usize; N], start: usize) -> Option<usize> {
    let pivot = counters[start];
    counters[start + 1..]
        .iter()
        .copied()
        .filter(|&c| c > pivot)
        .min()
}
