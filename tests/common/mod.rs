//! Common functionality shared between tests.

// Different tests may use only a subset of the available functionality
#![allow(dead_code)]

use divappr::{Limb, Word};
use num_bigint::BigUint;

/// Limb slice to `num_bigint::BigUint`
pub fn to_biguint(limbs: &[Limb]) -> BigUint {
    let mut bytes = Vec::with_capacity(limbs.len() * Limb::BYTES);

    for limb in limbs {
        bytes.extend_from_slice(&limb.0.to_le_bytes());
    }

    BigUint::from_bytes_le(&bytes)
}

/// `num_bigint::BigUint` to a zero-padded limb vector of length `len`
pub fn to_limbs(big_uint: &BigUint, len: usize) -> Vec<Limb> {
    let bytes = big_uint.to_bytes_le();
    assert!(bytes.len() <= len.max(1) * Limb::BYTES, "value does not fit");

    let mut limbs = vec![Limb::ZERO; len];
    for (limb, chunk) in limbs.iter_mut().zip(bytes.chunks(Limb::BYTES)) {
        let mut buf = [0u8; Limb::BYTES];
        buf[..chunk.len()].copy_from_slice(chunk);
        *limb = Limb(Word::from_le_bytes(buf));
    }
    limbs
}

/// `β = 2^Limb::BITS`
pub fn base() -> BigUint {
    BigUint::from(1u8) << Limb::BITS
}

/// Value of the full approximate quotient `qh·β^qn + q`
pub fn full_quotient(qh: Limb, quotient: &[Limb]) -> BigUint {
    let mut limbs = quotient.to_vec();
    limbs.push(qh);
    to_biguint(&limbs)
}
