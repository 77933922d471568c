//! Algorithms 11.3 and 11.4: splitting `a` with respect to `b` into a
//! "primes inside / primes outside" pair, in both directions.

use crate::arena::Arena;
use crate::backend::BigIntBackend;

/// Algorithm 11.3. Returns `(gcd(a, b), ppi(a, b), ppo(a, b))` where `ppi`
/// is the largest divisor of `a` built only from primes of `b`, and
/// `ppo = a / ppi`.
pub fn gcd_ppi_ppo<N: BigIntBackend>(arena: &mut Arena<N>, a: &N, b: &N) -> (N, N, N) {
    let mut ppi = arena.acquire();
    N::gcd(&mut ppi, a, b);
    let gcd = ppi.clone();
    let mut ppo = arena.acquire();
    N::floor_div_q(&mut ppo, a, &ppi);

    loop {
        let mut h = arena.acquire();
        N::gcd(&mut h, &ppi, &ppo);
        if h.is_one() {
            arena.release(h);
            break;
        }
        let mut next_ppi = arena.acquire();
        N::mul(&mut next_ppi, &ppi, &h);
        arena.release(std::mem::replace(&mut ppi, next_ppi));

        let mut next_ppo = arena.acquire();
        N::floor_div_q(&mut next_ppo, &ppo, &h);
        arena.release(std::mem::replace(&mut ppo, next_ppo));

        arena.release(h);
    }

    (gcd, ppi, ppo)
}

/// Shortcut: `(ppi(a, b), ppo(a, b))`, discarding the gcd.
pub fn ppi_ppo<N: BigIntBackend>(arena: &mut Arena<N>, a: &N, b: &N) -> (N, N) {
    let (gcd, ppi, ppo) = gcd_ppi_ppo(arena, a, b);
    arena.release(gcd);
    (ppi, ppo)
}

/// Shortcut: `ppi(a, b)` alone.
pub fn ppi<N: BigIntBackend>(arena: &mut Arena<N>, a: &N, b: &N) -> N {
    let (gcd, ppi, ppo) = gcd_ppi_ppo(arena, a, b);
    arena.release(gcd);
    arena.release(ppo);
    ppi
}

/// Algorithm 11.4, the "greater / less-equal" counterpart of
/// [`gcd_ppi_ppo`]. Returns `(gcd(a, b), ppg(a, b), pple(a, b))`: `ppg`
/// collects the primes of `a` whose multiplicity strictly exceeds their
/// multiplicity in `b`, `pple = a / ppg`.
pub fn gcd_ppg_pple<N: BigIntBackend>(arena: &mut Arena<N>, a: &N, b: &N) -> (N, N, N) {
    let mut pple = arena.acquire();
    N::gcd(&mut pple, a, b);
    let gcd = pple.clone();
    let mut ppg = arena.acquire();
    N::floor_div_q(&mut ppg, a, &pple);

    loop {
        let mut h = arena.acquire();
        N::gcd(&mut h, &ppg, &pple);
        if h.is_one() {
            arena.release(h);
            break;
        }
        let mut next_ppg = arena.acquire();
        N::mul(&mut next_ppg, &ppg, &h);
        arena.release(std::mem::replace(&mut ppg, next_ppg));

        let mut next_pple = arena.acquire();
        N::floor_div_q(&mut next_pple, &pple, &h);
        arena.release(std::mem::replace(&mut pple, next_pple));

        arena.release(h);
    }

    (gcd, ppg, pple)
}
