//! Algorithms 14.1 and 15.3: balanced divide-and-conquer product, and
//! partitioning a value across a factor list in 1-to-1 correspondence.

use crate::arena::Arena;
use crate::backend::BigIntBackend;
use crate::errors::Error;
use crate::ppi_ppo::ppi;

/// Midpoint used by both `prod` and `split`: the left half is
/// `[from, mid]`, the right half `[mid + 1, to]`.
fn midpoint(from: usize, to: usize) -> usize {
    let n = to - from;
    to - n / 2 - 1
}

/// Algorithm 14.1. The product of `arr`; `1` for an empty slice.
pub fn prod<N: BigIntBackend>(arena: &mut Arena<N>, arr: &[N]) -> N {
    if arr.is_empty() {
        return N::from_u64(1);
    }
    prod_range(arena, arr, 0, arr.len() - 1)
}

pub(crate) fn prod_range<N: BigIntBackend>(
    arena: &mut Arena<N>,
    arr: &[N],
    from: usize,
    to: usize,
) -> N {
    let n = to - from;
    if n == 0 {
        return arr[from].clone();
    }
    let mid = midpoint(from, to);
    let left = prod_range(arena, arr, from, mid);
    let right = prod_range(arena, arr, mid + 1, to);
    let mut out = arena.acquire();
    N::mul(&mut out, &left, &right);
    arena.release(left);
    arena.release(right);
    out
}

/// Algorithm 15.3. Appends `|p|` values to `out`, positionally
/// corresponding to `p`: `out[i]` is built only from primes of `p[i]`, and
/// `prod(out) = ppi(a, prod(p))`.
///
/// `out` is extended, never cleared, so callers that want a fresh result
/// must pass an empty `Vec`.
pub fn split<N: BigIntBackend>(
    arena: &mut Arena<N>,
    out: &mut Vec<N>,
    a: &N,
    p: &[N],
) -> Result<(), Error> {
    if p.is_empty() {
        return Ok(());
    }
    split_range(arena, out, a, p, 0, p.len() - 1);
    if out.len() != p.len() {
        return Err(Error::SplitLengthMismatch {
            expected: p.len(),
            actual: out.len(),
        });
    }
    Ok(())
}

fn split_range<N: BigIntBackend>(
    arena: &mut Arena<N>,
    out: &mut Vec<N>,
    a: &N,
    p: &[N],
    from: usize,
    to: usize,
) {
    let x = prod_range(arena, p, from, to);
    let b = ppi(arena, a, &x);
    arena.release(x);

    if from == to {
        out.push(b);
        return;
    }
    let mid = midpoint(from, to);
    split_range(arena, out, &b, p, from, mid);
    split_range(arena, out, &b, p, mid + 1, to);
    arena.release(b);
}
