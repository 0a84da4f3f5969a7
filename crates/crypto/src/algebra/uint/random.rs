use rand::Rng;

use super::Uint;

impl<const LIMBS: usize> Uint<LIMBS> {
    /// Uniformly random integer over the full width
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let mut r = [0u64; LIMBS];
        r.iter_mut().for_each(|l| *l = rng.gen::<u64>());
        Uint(r)
    }

    /// Try to sample an integer below `bound`, masked to the bound's bit
    /// length so at least half of the attempts succeed.
    fn sample_below<R: Rng>(rng: &mut R, bound: &Self) -> Option<Self> {
        let bits = bound.bits();
        let s = Self::random(rng);
        let s = if bits == 0 {
            Self::ZERO
        } else {
            s.shr(Self::BITS - bits)
        };
        s.const_lt(bound).then_some(s)
    }

    /// Rejection sample an integer in `[0, bound)`, `None` for a zero bound.
    pub fn random_below<R: Rng>(rng: &mut R, bound: &Self) -> Option<Self> {
        if bound.is_zero() {
            return None;
        }
        loop {
            if let Some(s) = Self::sample_below(rng, bound) {
                return Some(s);
            }
        }
    }
}
