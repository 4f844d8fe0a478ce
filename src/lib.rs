//! Pure Rust implementation of approximate schoolbook division of multi-precision integers.
//!
//! # About
//! [`div_appr_q`] divides an `nn`-limb dividend by a normalized `dn`-limb divisor
//! (`dn > 2`) using the 3/2 reciprocal of the divisor's two leading limbs, as described in
//! "Improved Division by Invariant Integers" by Niels Möller and Torbjorn Granlund. The
//! quotient it produces is either exact or one too large, which lets the final `dn - 2`
//! digits be computed against a progressively truncated divisor.
//!
//! Exact division, remainders and algorithm selection are left to the caller: the typical
//! consumer is a Newton or divide-and-conquer division that corrects the last unit itself.
//!
//! # Usage
//! ```
//! use divappr::{Limb, Reciprocal, Word, div_appr_q};
//!
//! // 1000·2^(3W-4) / 13·2^(3W-4)
//! let divisor = [Limb::ZERO, Limb::ZERO, Limb(0xD << (Word::BITS - 4))];
//! let mut dividend = [
//!     Limb::ZERO,
//!     Limb::ZERO,
//!     Limb(0x8 << (Word::BITS - 4)),
//!     Limb(0x3E),
//!     Limb::ZERO,
//! ];
//! let mut quotient = [Limb::ZERO; 2];
//!
//! let reciprocal = Reciprocal::from_divisor(&divisor).unwrap();
//! let qh = div_appr_q(&mut quotient, &mut dividend, &divisor, &reciprocal);
//!
//! assert_eq!(qh, Limb::ZERO);
//! assert!(quotient[0] == Limb::from_u8(76) || quotient[0] == Limb::from_u8(77));
//! ```
//!
//! # Features
//! - `alloc`: [`div_appr`], which accepts unnormalized operands.
//! - `rand_core`: [`Random`] for [`Limb`].
//! - `zeroize`: [`zeroize::DefaultIsZeroes`] for [`Limb`].

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(unsafe_code, clippy::unwrap_used)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unused_qualifications
)]

#[cfg(feature = "alloc")]
extern crate alloc;

mod div_appr;
mod limb;
mod primitives;
mod reciprocal;
mod traits;
mod uint_ref;
mod word;

pub use crate::{
    div_appr::{
        DigitCounter, DigitPath, DigitStep, DivApprObserver, Phase, div_appr_q,
        div_appr_q_observed,
    },
    limb::Limb,
    reciprocal::{Reciprocal, div2by1, div3by2, reciprocal_2by1},
    uint_ref::UintRef,
    word::{WideWord, Word},
};
pub use subtle;

#[cfg(feature = "alloc")]
pub use crate::div_appr::div_appr;

#[cfg(feature = "rand_core")]
pub use {crate::traits::Random, rand_core};

#[cfg(feature = "zeroize")]
pub use zeroize;
