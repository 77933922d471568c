//! Algorithm 13.2: append the coprime base of `{a, b}` to an accumulator,
//! given that `a` is already coprime to everything already in the
//! accumulator.

use crate::arena::Arena;
use crate::backend::BigIntBackend;
use crate::ppi_ppo::{gcd_ppg_pple, ppi_ppo};
use crate::powers::two_power;

/// Appends `cb({a, b})` to `out`.
///
/// The loop's exit check sits after the recursive call in step 3 below —
/// not before it — because the recursive call must run once even on the
/// final iteration (it consumes `c / y` against `d`, which step 4 hasn't
/// accounted for yet). Moving the check earlier silently drops a factor.
pub fn append_cb<N: BigIntBackend>(arena: &mut Arena<N>, out: &mut Vec<N>, a: N, b: N) {
    if b.is_one() {
        if !a.is_one() {
            out.push(a);
        }
        return;
    }

    let (a1, r) = ppi_ppo(arena, &a, &b);
    if !r.is_one() {
        out.push(r.clone());
    }
    arena.release(r);

    let (mut g, mut h, mut c) = gcd_ppg_pple(arena, &a1, &b);
    arena.release(a1);
    let c0 = c.clone();
    let mut x = c.clone();
    let mut n: u32 = 1;

    loop {
        // Step 1: (g, h, c) <- gcd_ppg_pple(h, g^2).
        let mut g_sq = arena.acquire();
        N::mul(&mut g_sq, &g, &g);
        let (next_g, next_h, next_c) = gcd_ppg_pple(arena, &h, &g_sq);
        arena.release(g_sq);
        arena.release(g);
        arena.release(h);
        arena.release(c);
        g = next_g;
        h = next_h;
        c = next_c;

        // Step 2: d <- gcd(c, b); x <- x * d; y <- d^(2^(n-1)).
        let mut d = arena.acquire();
        N::gcd(&mut d, &c, &b);
        let mut next_x = arena.acquire();
        N::mul(&mut next_x, &x, &d);
        arena.release(std::mem::replace(&mut x, next_x));

        let mut y = d.clone();
        two_power(arena, &mut y, n - 1);

        // Step 3: recurse on (c / y, d).
        let mut quotient = arena.acquire();
        N::floor_div_q(&mut quotient, &c, &y);
        arena.release(y);
        append_cb(arena, out, quotient, d.clone());

        if h.is_one() {
            arena.release(d);
            break;
        }
        arena.release(d);
        n += 1;
    }

    let mut last = arena.acquire();
    N::floor_div_q(&mut last, &b, &x);
    arena.release(x);
    arena.release(g);
    arena.release(h);
    arena.release(c);
    append_cb(arena, out, last.clone(), c0);
    arena.release(last);
}

#[cfg(test)]
mod test {
    use super::*;
    use num_bigint::BigUint;
    use num_integer::Integer;

    fn bu(n: u64) -> BigUint {
        BigUint::from(n)
    }

    fn assert_pairwise_coprime(out: &[BigUint]) {
        for i in 0..out.len() {
            for j in (i + 1)..out.len() {
                assert_eq!(out[i].gcd(&out[j]), bu(1), "{:?} vs {:?}", out[i], out[j]);
            }
        }
    }

    #[test]
    fn b_equal_one_appends_a_only() {
        let mut arena = Arena::new();
        let mut out = Vec::new();
        append_cb(&mut arena, &mut out, bu(7), bu(1));
        assert_eq!(out, vec![bu(7)]);
    }

    #[test]
    fn b_equal_one_and_a_equal_one_appends_nothing() {
        let mut arena = Arena::new();
        let mut out = Vec::new();
        append_cb(&mut arena, &mut out, bu(1), bu(1));
        assert!(out.is_empty());
    }

    #[test]
    fn shared_prime_factor_splits_cleanly() {
        // a = 6 = 2*3, b = 10 = 2*5: shared factor 2.
        let mut arena = Arena::new();
        let mut out = Vec::new();
        append_cb(&mut arena, &mut out, bu(6), bu(10));
        assert_pairwise_coprime(&out);

        let prod_out = out.iter().fold(bu(1), |acc, x| &acc * x);
        // Every element of out divides a*b, and a*b has no prime factor
        // outside out: ppi(a*b, prod(out)) recovers a*b exactly.
        let ab = &bu(6) * &bu(10);
        let inside = crate::ppi_ppo::ppi(&mut arena, &ab, &prod_out);
        assert_eq!(inside, ab);
    }
}
