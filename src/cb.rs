//! Algorithms 16.2, 17.3 and 18.1: extending a coprime base by one value,
//! merging two coprime bases, and building a coprime base for a whole
//! multiset via divide-and-conquer — optionally splitting the two halves
//! across `rayon` workers.

use crate::append_cb::append_cb;
use crate::arena::Arena;
use crate::backend::BigIntBackend;
use crate::errors::Error;
use crate::ppi_ppo::ppi_ppo;
use crate::prod_split::{prod, split};

/// Algorithm 16.2. Produces `cb(P ∪ {b})`, assuming `P` is already
/// pairwise coprime.
///
/// Appending `b` for the empty-`P` case and then falling through into the
/// rest of the routine would double-count `b` (it would get appended again
/// as `ppo(b, 1) = b`); the empty case returns immediately instead.
pub fn cbextend<N: BigIntBackend>(arena: &mut Arena<N>, p: &[N], b: N) -> Vec<N> {
    let mut out = Vec::new();
    if p.is_empty() {
        if !b.is_one() {
            out.push(b);
        }
        return out;
    }

    let x = prod(arena, p);
    let (a, r) = ppi_ppo(arena, &b, &x);
    arena.release(x);
    if !r.is_one() {
        out.push(r.clone());
    }
    arena.release(r);

    let mut s = Vec::new();
    split(arena, &mut s, &a, p).expect("cbextend: split length invariant (programmer error)");
    arena.release(a);

    for (pi, si) in p.iter().zip(s.into_iter()) {
        append_cb(arena, &mut out, pi.clone(), si);
    }
    out
}

/// Bit `i` of `k` (least-significant bit is bit 0).
fn bit(i: u32, k: usize) -> bool {
    (k >> i) & 1 == 1
}

/// Algorithm 17.3. Produces `cb(P ∪ Q)`, assuming `P` and `Q` are each
/// already pairwise coprime. `Q` must be non-empty — `cb` never calls this
/// with a degenerate side; a direct caller that does gets
/// [`Error::EmptyCbMergeSide`].
pub fn cbmerge<N: BigIntBackend>(arena: &mut Arena<N>, p: &[N], q: &[N]) -> Result<Vec<N>, Error> {
    if q.is_empty() {
        return Err(Error::EmptyCbMergeSide);
    }
    let n = q.len();

    // Smallest b >= 1 with 2^b >= n.
    let mut b = 0u32;
    loop {
        b += 1;
        if (1usize << b) >= n {
            break;
        }
    }

    let mut s: Vec<N> = p.to_vec();
    for i in 0..b {
        let r0: Vec<N> = (0..n)
            .filter(|&k| !bit(i, k))
            .map(|k| q[k].clone())
            .collect();
        let x0 = prod(arena, &r0);
        let t = cbextend(arena, &s, x0);

        let r1: Vec<N> = (0..n)
            .filter(|&k| bit(i, k))
            .map(|k| q[k].clone())
            .collect();
        let x1 = prod(arena, &r1);
        s = cbextend(arena, &t, x1);
    }
    Ok(s)
}

/// Algorithm 18.1. Builds the coprime base for a finite multiset via
/// balanced divide-and-conquer. A `0` anywhere in `s` is a caller error,
/// logged and skipped; a `1` is silently skipped (it is the identity under
/// the coprime-base product).
pub fn cb<N: BigIntBackend>(arena: &mut Arena<N>, s: &[N]) -> Vec<N> {
    if s.is_empty() {
        return Vec::new();
    }
    cb_range(arena, s, 0, s.len() - 1)
}

fn cb_range<N: BigIntBackend>(arena: &mut Arena<N>, s: &[N], from: usize, to: usize) -> Vec<N> {
    let n = to - from;
    if n == 0 {
        let v = &s[from];
        if v.is_zero() {
            log::warn!("cb: input contains 0 at index {from}; skipping (caller error)");
            return Vec::new();
        }
        if v.is_one() {
            return Vec::new();
        }
        return vec![v.clone()];
    }

    let mid = to - n / 2 - 1;
    let (p, q) = cb_halves(arena, s, from, mid, mid + 1, to);

    match (p.is_empty(), q.is_empty()) {
        (false, false) => cbmerge(arena, &p, &q)
            .expect("cb: cbmerge invoked with a non-empty side by construction"),
        (true, false) => {
            log::warn!("cb: left half degenerate (all-zero/one inputs), forwarding right half");
            q
        }
        (false, true) => {
            log::warn!("cb: right half degenerate (all-zero/one inputs), forwarding left half");
            p
        }
        (true, true) => Vec::new(),
    }
}

#[cfg(feature = "parallel")]
fn cb_halves<N: BigIntBackend>(
    arena: &mut Arena<N>,
    s: &[N],
    left_from: usize,
    left_to: usize,
    right_from: usize,
    right_to: usize,
) -> (Vec<N>, Vec<N>) {
    // The parent worker reuses its own arena for the left half; the right
    // half gets a fresh arena of its own, since each half needs the
    // exclusive arena ownership of whichever worker it runs on.
    let mut right_arena = Arena::new();
    rayon::join(
        || cb_range(arena, s, left_from, left_to),
        || cb_range(&mut right_arena, s, right_from, right_to),
    )
}

#[cfg(not(feature = "parallel"))]
fn cb_halves<N: BigIntBackend>(
    arena: &mut Arena<N>,
    s: &[N],
    left_from: usize,
    left_to: usize,
    right_from: usize,
    right_to: usize,
) -> (Vec<N>, Vec<N>) {
    let p = cb_range(arena, s, left_from, left_to);
    let q = cb_range(arena, s, right_from, right_to);
    (p, q)
}
