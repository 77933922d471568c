//! Algorithms 20.1 and 21.2: expressing a value as a product of powers of
//! base elements, and restricting the base to what's relevant for a whole
//! multiset before doing so per element.

use crate::arena::Arena;
use crate::backend::BigIntBackend;
use crate::errors::Error;
use crate::ppi_ppo::{ppi, ppi_ppo};
use crate::prod_split::{prod, prod_range, split};

/// A non-trivial factorization discovered while walking `find_factor`:
/// `value = factor * cofactor` and `factor` is a base element.
pub type Triple<N> = (N, N, N);

/// Algorithm 20.1. Attempts to factor `a` as a product of powers of
/// `p[from..=to]`. Returns `true` iff no non-trivial split of `a0` was
/// discovered along the way — this conflates "failure" with "discovery",
/// so callers of [`find_factors`] should read the *triples pushed to
/// `out`*, not this return value, as the signal of interest.
fn find_factor_range<N: BigIntBackend>(
    arena: &mut Arena<N>,
    out: &mut Vec<Triple<N>>,
    a0: &N,
    a: &N,
    p: &[N],
    from: usize,
    to: usize,
) -> bool {
    let n = to - from;
    if n == 0 {
        let (_, c) = crate::reduce::reduce(arena, &p[from], a);
        if !c.is_one() {
            return false;
        }
        if a0 != &p[from] {
            let mut cofactor = arena.acquire();
            N::floor_div_q(&mut cofactor, a0, &p[from]);
            out.push((a0.clone(), p[from].clone(), cofactor));
            return false;
        }
        return true;
    }

    let mid = to - n / 2 - 1;
    let y = prod_range(arena, p, from, mid);
    let (b, c) = ppi_ppo(arena, a, &y);
    arena.release(y);

    // Short-circuits like an `else if`: the right half is only explored
    // once the left half has succeeded cleanly.
    let left_ok = find_factor_range(arena, out, a0, &b, p, from, mid);
    arena.release(b);
    if !left_ok {
        arena.release(c);
        return false;
    }
    let right_ok = find_factor_range(arena, out, a0, &c, p, mid + 1, to);
    arena.release(c);
    right_ok
}

/// Top-level entry point for algorithm 20.1: attempts to factor `a` over
/// the whole of `p`.
pub fn find_factor<N: BigIntBackend>(
    arena: &mut Arena<N>,
    out: &mut Vec<Triple<N>>,
    a: &N,
    p: &[N],
) -> bool {
    if p.is_empty() {
        log::warn!("find_factor: empty base");
        return false;
    }
    find_factor_range(arena, out, a, a, p, 0, p.len() - 1)
}

/// Algorithm 21.2. For each element of `s`, restricts `p` to the base
/// elements relevant to that element before calling [`find_factor`].
pub fn find_factors<N: BigIntBackend>(
    arena: &mut Arena<N>,
    s: &[N],
    p: &[N],
) -> Result<Vec<Triple<N>>, Error> {
    let mut out = Vec::new();
    if s.is_empty() {
        return Ok(out);
    }
    find_factors_range(arena, &mut out, s, 0, s.len() - 1, p)?;
    Ok(out)
}

fn find_factors_range<N: BigIntBackend>(
    arena: &mut Arena<N>,
    out: &mut Vec<Triple<N>>,
    s: &[N],
    from: usize,
    to: usize,
    p: &[N],
) -> Result<(), Error> {
    let x = prod(arena, p);
    let y = prod_range(arena, s, from, to);
    let z = ppi(arena, &x, &y);
    arena.release(x);

    let mut d = Vec::new();
    split(arena, &mut d, &z, p)?;
    arena.release(z);

    let live: Vec<N> = p
        .iter()
        .zip(d.iter())
        .filter(|(pi, di)| *pi == *di)
        .map(|(pi, _)| pi.clone())
        .collect();

    let n = to - from;
    if n == 0 {
        find_factor(arena, out, &y, &live);
    } else {
        let mid = to - n / 2 - 1;
        find_factors_range(arena, out, s, from, mid, &live)?;
        find_factors_range(arena, out, s, mid + 1, to, &live)?;
    }
    arena.release(y);
    Ok(())
}
