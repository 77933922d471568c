//! Natural coprime bases of finite multisets of positive integers, and
//! factoring values over such bases — an implementation of Bernstein's
//! *"Factoring into coprimes in essentially linear time"* (algorithms 10.1,
//! 11.3, 11.4, 13.2, 14.1, 15.3, 16.2, 17.3, 18.1, 19.2, 20.1, 21.2).
//!
//! The entry points most callers want are [`cb`] (build a coprime base from
//! a multiset) and [`find_factors`] (recover shared prime factors across a
//! corpus, e.g. RSA moduli that were not generated independently). The rest
//! of this crate's modules are the recursive substrate those two are built
//! from, and are exposed for callers who need to drive the algorithm by
//! hand (`append_cb`, `cbextend`, `cbmerge`, `split`, `prod`, `reduce`,
//! `find_factor`).
//!
//! The crate is generic over the big-integer backend through
//! [`backend::BigIntBackend`]; [`num_bigint::BigUint`] is the only backend
//! implemented here. Every routine takes an [`arena::Arena`] so that
//! temporaries acquired deep in the recursion are reused rather than
//! reallocated; see `DESIGN.md` for why.

pub mod append_cb;
pub mod arena;
pub mod backend;
pub mod cb;
pub mod errors;
pub mod find_factor;
pub mod powers;
pub mod ppi_ppo;
pub mod prod_split;
pub mod reduce;

pub use arena::Arena;
pub use backend::BigIntBackend;
pub use errors::Error;

pub use append_cb::append_cb;
pub use cb::{cb, cbextend, cbmerge};
pub use find_factor::{find_factor, find_factors, Triple};
pub use powers::two_power;
pub use ppi_ppo::{gcd_ppg_pple, gcd_ppi_ppo, ppi, ppi_ppo};
pub use prod_split::{prod, split};
pub use reduce::reduce;
