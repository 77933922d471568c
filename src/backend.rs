//! The narrow interface through which every routine in this crate consumes
//! an arbitrary-precision-integer backend.
//!
//! The backend itself — multiplication, floor division, gcd — is explicitly
//! out of scope here; [`num_bigint::BigUint`] supplies it. The trait exists
//! so the recursive algorithms in [`crate::append_cb`], [`crate::cb`], etc.
//! are written once against `BigIntBackend` and never against `BigUint`
//! directly — every integer is addressed only through `mpz_*`-style
//! operations, never through GMP internals.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};

/// Operations a big-integer backend must provide. Mirrors the GMP-style
/// destination-first calling convention (`mpz_mul(dst, a, b)` and friends)
/// so that [`crate::arena::Arena`] slots
/// can be reused as destinations instead of allocating a fresh integer per
/// call.
pub trait BigIntBackend: Clone + Eq + std::fmt::Debug + Send + Sync + 'static {
    /// Constructs a value from a small unsigned integer.
    fn from_u64(n: u64) -> Self;

    /// `true` iff `self == 0`.
    fn is_zero(&self) -> bool;

    /// `true` iff `self == 1`.
    fn is_one(&self) -> bool;

    /// `dst <- a * b`.
    fn mul(dst: &mut Self, a: &Self, b: &Self);

    /// `dst <- floor(a / b)`.
    fn floor_div_q(dst: &mut Self, a: &Self, b: &Self);

    /// `dst <- a - b * floor(a / b)`.
    fn floor_div_r(dst: &mut Self, a: &Self, b: &Self);

    /// `dst <- gcd(a, b)`.
    fn gcd(dst: &mut Self, a: &Self, b: &Self);

    /// `dst <- base_ui ^ exp_ui`.
    fn pow_ui(dst: &mut Self, base_ui: u64, exp_ui: u32);

    /// `dst <- src`.
    fn set(dst: &mut Self, src: &Self) {
        dst.clone_from(src);
    }
}

impl BigIntBackend for BigUint {
    fn from_u64(n: u64) -> Self {
        BigUint::from(n)
    }

    fn is_zero(&self) -> bool {
        Zero::is_zero(self)
    }

    fn is_one(&self) -> bool {
        One::is_one(self)
    }

    fn mul(dst: &mut Self, a: &Self, b: &Self) {
        *dst = a * b;
    }

    fn floor_div_q(dst: &mut Self, a: &Self, b: &Self) {
        *dst = a / b;
    }

    fn floor_div_r(dst: &mut Self, a: &Self, b: &Self) {
        *dst = a % b;
    }

    fn gcd(dst: &mut Self, a: &Self, b: &Self) {
        *dst = a.gcd(b);
    }

    fn pow_ui(dst: &mut Self, base_ui: u64, exp_ui: u32) {
        *dst = BigUint::from(base_ui).pow(exp_ui);
    }
}
