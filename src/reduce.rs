//! Algorithm 19.2: the exponent of `p` in `a` and the cofactor `a / p^i`,
//! computed via squarings of `p` rather than sequential trial division —
//! the source of this whole approach's "essentially linear time" bound.

use crate::arena::Arena;
use crate::backend::BigIntBackend;

/// Returns `(i, c)` with `p^i * c = a` and `p` does not divide `c`.
pub fn reduce<N: BigIntBackend>(arena: &mut Arena<N>, p: &N, a: &N) -> (u64, N) {
    let mut r = arena.acquire();
    N::floor_div_r(&mut r, a, p);
    let p_divides_a = r.is_zero();
    arena.release(r);

    if !p_divides_a {
        return (0, a.clone());
    }

    let mut p2 = arena.acquire();
    N::mul(&mut p2, p, p);
    let mut a2 = arena.acquire();
    N::floor_div_q(&mut a2, a, p);

    let (j, b) = reduce(arena, &p2, &a2);
    arena.release(p2);
    arena.release(a2);

    let mut r2 = arena.acquire();
    N::floor_div_r(&mut r2, &b, p);
    let p_divides_b = r2.is_zero();
    arena.release(r2);

    if p_divides_b {
        let mut quotient = arena.acquire();
        N::floor_div_q(&mut quotient, &b, p);
        (2 * j + 2, quotient)
    } else {
        (2 * j + 1, b)
    }
}
