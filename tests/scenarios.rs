//! End-to-end scenarios: concrete coprime bases and shared-factor recovery
//! across small RSA-style moduli.

use coprime_base::{cb, find_factors};
use num_bigint::BigUint;

fn bu(n: u64) -> BigUint {
    BigUint::from(n)
}

fn sorted(mut v: Vec<BigUint>) -> Vec<BigUint> {
    v.sort();
    v
}

#[test]
fn cb_of_6_10_15_is_2_3_5() {
    let mut arena = coprime_base::Arena::new();
    let s = vec![bu(6), bu(10), bu(15)];
    assert_eq!(sorted(cb(&mut arena, &s)), vec![bu(2), bu(3), bu(5)]);
}

#[test]
fn cb_of_9_15_25_is_3_5() {
    let mut arena = coprime_base::Arena::new();
    let s = vec![bu(9), bu(15), bu(25)];
    assert_eq!(sorted(cb(&mut arena, &s)), vec![bu(3), bu(5)]);
}

#[test]
fn cb_of_chained_shared_factors_is_all_five_primes() {
    let mut arena = coprime_base::Arena::new();
    let s = vec![bu(2 * 3 * 5 * 7), bu(2 * 11), bu(3 * 11)];
    assert_eq!(
        sorted(cb(&mut arena, &s)),
        vec![bu(2), bu(3), bu(5), bu(7), bu(11)]
    );
}

#[test]
fn shared_factor_rsa_moduli_emit_both_triples() {
    // N1 = 101 * 103, N2 = 101 * 107 share the factor 101.
    let mut arena = coprime_base::Arena::new();
    let n1 = bu(101 * 103);
    let n2 = bu(101 * 107);
    let s = vec![n1.clone(), n2.clone()];

    let base = cb(&mut arena, &s);
    assert_eq!(sorted(base.clone()), vec![bu(101), bu(103), bu(107)]);

    let triples = find_factors(&mut arena, &s, &base).unwrap();
    assert_eq!(triples.len(), 2);
    assert!(triples.contains(&(n1, bu(101), bu(103))));
    assert!(triples.contains(&(n2, bu(101), bu(107))));
}

#[test]
fn disjoint_moduli_produce_base_of_themselves_and_no_triples() {
    // N1 = 11*13, N2 = 17*19 share no factor: the base is the moduli
    // themselves and no split is ever discovered.
    let mut arena = coprime_base::Arena::new();
    let n1 = bu(11 * 13);
    let n2 = bu(17 * 19);
    let s = vec![n1.clone(), n2.clone()];

    let base = cb(&mut arena, &s);
    assert_eq!(sorted(base.clone()), vec![n1, n2]);

    let triples = find_factors(&mut arena, &s, &base).unwrap();
    assert!(triples.is_empty());
}

#[test]
fn reduce_108_by_3_is_exponent_3_and_cofactor_4() {
    let mut arena = coprime_base::Arena::new();
    let (i, c) = coprime_base::reduce(&mut arena, &bu(3), &bu(108));
    assert_eq!(i, 3);
    assert_eq!(c, bu(4));
}

#[test]
fn corpus_of_several_moduli_recovers_every_shared_factor() {
    // A small corpus where three moduli pairwise share one factor each with
    // a fourth, unrelated modulus thrown in.
    let p = bu(101);
    let q1 = bu(103);
    let q2 = bu(107);
    let q3 = bu(109);
    let unrelated = bu(11 * 13);

    let n1 = &p * &q1;
    let n2 = &p * &q2;
    let n3 = &p * &q3;
    let s = vec![n1.clone(), n2.clone(), n3.clone(), unrelated.clone()];

    let mut arena = coprime_base::Arena::new();
    let base = cb(&mut arena, &s);
    let triples = find_factors(&mut arena, &s, &base).unwrap();

    assert!(triples.contains(&(n1, p.clone(), q1)));
    assert!(triples.contains(&(n2, p.clone(), q2)));
    assert!(triples.contains(&(n3, p, q3)));
    assert!(!triples.iter().any(|(a, _, _)| *a == unrelated));
}
