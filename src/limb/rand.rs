//! Random number generator support

use super::Limb;
use crate::Random;
use rand_core::RngCore;

#[cfg_attr(docsrs, doc(cfg(feature = "rand_core")))]
impl Random for Limb {
    #[cfg(target_pointer_width = "32")]
    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        Self(rng.next_u32())
    }

    #[cfg(target_pointer_width = "64")]
    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        Self(rng.next_u64())
    }
}

impl Limb {
    /// Generate a random limb with its most significant bit set, suitable as the leading limb
    /// of a division kernel divisor.
    #[cfg_attr(docsrs, doc(cfg(feature = "rand_core")))]
    pub fn random_normalized<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        let limb = Self::random(rng);
        Limb(limb.0 | Limb::ONE.shl(Limb::HI_BIT).0)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Limb, Random};
    use rand_chacha::ChaCha8Rng;
    use rand_core::SeedableRng;

    #[test]
    fn random_normalized() {
        let mut rng = ChaCha8Rng::from_seed([7u8; 32]);
        for _ in 0..64 {
            assert!(Limb::random_normalized(&mut rng).is_normalized());
        }
        assert_ne!(Limb::random(&mut rng), Limb::random(&mut rng));
    }
}
