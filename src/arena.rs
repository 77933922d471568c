//! A pool of preallocated big-integer slots, reused across the deeply
//! recursive routines in this crate instead of letting every `gcd`/`mul`
//! temporary hit the global allocator.
//!
//! An `Arena` is owned by one caller at a time and passed down as `&mut`;
//! the borrow checker makes "never shared across workers" a compile-time
//! guarantee rather than a convention a caller has to uphold by hand.
//! See `DESIGN.md` for why this replaces a pointer threaded by every call.

use crate::backend::BigIntBackend;

/// A reusable pool of big-integer slots. Never `Clone`, never `Sync` —
/// exactly one worker owns an `Arena` at a time.
#[derive(Default)]
pub struct Arena<N: BigIntBackend> {
    free: Vec<N>,
}

impl<N: BigIntBackend> Arena<N> {
    /// An empty arena; the first `acquire` will allocate.
    pub fn new() -> Self {
        Arena { free: Vec::new() }
    }

    /// Takes ownership of a zero-valued slot, allocating one if the pool is
    /// empty.
    pub fn acquire(&mut self) -> N {
        self.free.pop().unwrap_or_else(|| N::from_u64(0))
    }

    /// Returns a slot to the pool for reuse. The value is dropped in place;
    /// only the slot's backing storage is retained.
    pub fn release(&mut self, slot: N) {
        self.free.push(slot);
    }

    /// Number of slots currently available without allocating.
    pub fn len(&self) -> usize {
        self.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.free.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use num_bigint::BigUint;

    #[test]
    fn acquire_allocates_when_empty() {
        let mut arena: Arena<BigUint> = Arena::new();
        assert!(arena.is_empty());
        let slot = arena.acquire();
        assert!(BigIntBackend::is_zero(&slot));
    }

    #[test]
    fn release_makes_slot_available_again() {
        let mut arena: Arena<BigUint> = Arena::new();
        let slot = arena.acquire();
        arena.release(slot);
        assert_eq!(arena.len(), 1);
        let _ = arena.acquire();
        assert_eq!(arena.len(), 0);
    }
}
