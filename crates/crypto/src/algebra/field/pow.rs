use super::Field;
use crate::algebra::uint::Uint;
use crate::ArithmeticError;

/// One instruction of a decoded fixed-window exponentiation: square the
/// accumulator `squarings` times, then multiply by the tabulated odd power
/// `a^(2 * odd_power + 1)` if present.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowStep {
    pub squarings: u32,
    pub odd_power: Option<usize>,
}

/// Computes `a^e` scanning the exponent from its most significant bit.
pub(crate) fn double_and_add<F, const LIMBS: usize>(
    field: &F,
    a: &Uint<LIMBS>,
    e: &Uint<LIMBS>,
) -> Uint<LIMBS>
where
    F: Field<LIMBS> + ?Sized,
{
    let bits = e.into_le_bits();
    let mut res = field.one();
    for b in bits[..e.bits() as usize].iter().rev() {
        res = field.square(&res);
        if *b {
            res = field.mul(&res, a);
        }
    }
    res
}

/// Decodes `e` into windows of at most `window` bits, each ending in a set
/// bit, with the zero runs between them folded into the squaring counts.
/// `window` must lie in `1..=8`.
pub fn decode_exponent<const LIMBS: usize>(
    e: &Uint<LIMBS>,
    window: u32,
) -> Result<Vec<WindowStep>, ArithmeticError> {
    if !(1..=8).contains(&window) {
        return Err(ArithmeticError::InvalidWindow(window));
    }

    let mut steps = Vec::new();
    let mut pending = 0u32;
    let mut top = e.bits();

    while top > 0 {
        let i = top - 1;
        if !e.bit(i) {
            pending += 1;
            top -= 1;
            continue;
        }

        let mut j = i.saturating_sub(window - 1);
        while !e.bit(j) {
            j += 1;
        }
        let odd = (j..=i)
            .rev()
            .fold(0usize, |acc, b| (acc << 1) | e.bit(b) as usize);

        steps.push(WindowStep {
            squarings: pending + (i - j + 1),
            odd_power: Some(odd >> 1),
        });
        pending = 0;
        top = j;
    }

    if pending > 0 {
        steps.push(WindowStep {
            squarings: pending,
            odd_power: None,
        });
    }
    Ok(steps)
}

/// Computes `a^e` with a precomputed table of the odd powers
/// `a, a^3, ..., a^(2^window - 1)`.
pub(crate) fn sliding_window<F, const LIMBS: usize>(
    field: &F,
    a: &Uint<LIMBS>,
    e: &Uint<LIMBS>,
    window: u32,
) -> Result<Uint<LIMBS>, ArithmeticError>
where
    F: Field<LIMBS> + ?Sized,
{
    let steps = decode_exponent(e, window)?;

    let a2 = field.square(a);
    let mut table = Vec::with_capacity(1 << (window - 1));
    table.push(*a);
    for i in 1..1usize << (window - 1) {
        table.push(field.mul(&table[i - 1], &a2));
    }

    let mut res = field.one();
    for step in steps {
        for _ in 0..step.squarings {
            res = field.square(&res);
        }
        if let Some(k) = step.odd_power {
            res = field.mul(&res, &table[k]);
        }
    }
    Ok(res)
}
