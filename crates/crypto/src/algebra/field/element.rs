use super::derive::{derive_op, derive_op_assign};
use super::Field;
use crate::algebra::uint::Uint;
use crate::ArithmeticError;

/// An element of a prime field, holding its value in the field's internal
/// representation together with a reference to the field.
///
/// Both operands of a binary operation must come from the same field
/// instance. This is only checked by debug assertions.
pub struct FieldElement<'f, F: Field<LIMBS>, const LIMBS: usize> {
    value: Uint<LIMBS>,
    field: &'f F,
}

impl<'f, F: Field<LIMBS>, const LIMBS: usize> Clone for FieldElement<'f, F, LIMBS> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'f, F: Field<LIMBS>, const LIMBS: usize> Copy for FieldElement<'f, F, LIMBS> {}

impl<'f, F: Field<LIMBS>, const LIMBS: usize> FieldElement<'f, F, LIMBS> {
    /// Create an element from a canonical integer below the modulus
    pub fn new(field: &'f F, v: &Uint<LIMBS>) -> Result<Self, ArithmeticError> {
        Ok(Self {
            value: field.to_internal(v)?,
            field,
        })
    }

    /// Wrap a value that is already in the internal representation
    pub fn from_internal(field: &'f F, value: Uint<LIMBS>) -> Self {
        debug_assert!(value < *field.modulus());
        Self { value, field }
    }

    pub fn zero(field: &'f F) -> Self {
        Self::from_internal(field, field.zero())
    }

    pub fn one(field: &'f F) -> Self {
        Self::from_internal(field, field.one())
    }

    pub fn field(&self) -> &'f F {
        self.field
    }

    /// The value in the internal representation
    pub fn value(&self) -> &Uint<LIMBS> {
        &self.value
    }

    pub fn to_canonical(&self) -> Uint<LIMBS> {
        self.field.from_internal(&self.value)
    }

    /// Big-endian encoding of the canonical value
    pub fn to_be_bytes(&self) -> Vec<u8> {
        self.to_canonical().to_be_bytes()
    }

    pub fn is_zero(&self) -> bool {
        self.field.is_zero(&self.value)
    }

    pub fn is_one(&self) -> bool {
        self.value == self.field.one()
    }

    pub fn square(&self) -> Self {
        self.map(self.field.square(&self.value))
    }

    pub fn double(&self) -> Self {
        self.map(self.field.double(&self.value))
    }

    pub fn inv(&self) -> Result<Self, ArithmeticError> {
        Ok(self.map(self.field.inv(&self.value)?))
    }

    pub fn pow(&self, e: &Uint<LIMBS>) -> Self {
        self.map(self.field.pow(&self.value, e))
    }

    pub fn pow_sliding_window(&self, e: &Uint<LIMBS>, window: u32) -> Result<Self, ArithmeticError> {
        Ok(self.map(self.field.pow_sliding_window(&self.value, e, window)?))
    }

    pub fn sqrt(&self) -> Result<Option<Self>, ArithmeticError> {
        Ok(self.field.sqrt(&self.value)?.map(|v| self.map(v)))
    }

    fn map(&self, value: Uint<LIMBS>) -> Self {
        Self {
            value,
            field: self.field,
        }
    }

    fn combine(
        &self,
        rhs: &Self,
        op: impl Fn(&F, &Uint<LIMBS>, &Uint<LIMBS>) -> Uint<LIMBS>,
    ) -> Self {
        debug_assert!(
            std::ptr::eq(self.field, rhs.field),
            "field elements from different field instances"
        );
        self.map(op(self.field, &self.value, &rhs.value))
    }
}

derive_op!(Add, add, add);
derive_op!(Sub, sub, sub);
derive_op!(Mul, mul, mul);
derive_op_assign!(AddAssign, add_assign, add);
derive_op_assign!(SubAssign, sub_assign, sub);
derive_op_assign!(MulAssign, mul_assign, mul);

impl<'f, F: Field<LIMBS>, const LIMBS: usize> std::ops::Neg for FieldElement<'f, F, LIMBS> {
    type Output = Self;
    fn neg(self) -> Self::Output {
        self.map(self.field.neg(&self.value))
    }
}

impl<'f, F: Field<LIMBS>, const LIMBS: usize> PartialEq for FieldElement<'f, F, LIMBS> {
    fn eq(&self, other: &Self) -> bool {
        debug_assert!(std::ptr::eq(self.field, other.field));
        self.value == other.value
    }
}

impl<'f, F: Field<LIMBS>, const LIMBS: usize> Eq for FieldElement<'f, F, LIMBS> {}

impl<'f, F: Field<LIMBS>, const LIMBS: usize> std::fmt::Debug for FieldElement<'f, F, LIMBS> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // debug prints the canonical value, not the internal representation
        write!(f, "FieldElement({})", self.to_canonical())
    }
}

impl<'f, F: Field<LIMBS>, const LIMBS: usize> std::fmt::Display for FieldElement<'f, F, LIMBS> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_canonical())
    }
}
