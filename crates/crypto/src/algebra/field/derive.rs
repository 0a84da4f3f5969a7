/// Implements a binary operator for owned and borrowed [FieldElement]
/// operands by delegating to the [Field] method `$method`.
///
/// [FieldElement]: super::FieldElement
/// [Field]: super::Field
macro_rules! derive_op {
    ($iface:ident, $fun:ident, $method:ident) => {
        impl<'f, F: Field<LIMBS>, const LIMBS: usize> std::ops::$iface<Self>
            for FieldElement<'f, F, LIMBS>
        {
            type Output = Self;
            fn $fun(self, rhs: Self) -> Self::Output {
                self.combine(&rhs, <F as Field<LIMBS>>::$method)
            }
        }
        impl<'f, F: Field<LIMBS>, const LIMBS: usize> std::ops::$iface<&Self>
            for FieldElement<'f, F, LIMBS>
        {
            type Output = Self;
            fn $fun(self, rhs: &Self) -> Self::Output {
                self.combine(rhs, <F as Field<LIMBS>>::$method)
            }
        }
        impl<'f, F: Field<LIMBS>, const LIMBS: usize> std::ops::$iface<FieldElement<'f, F, LIMBS>>
            for &FieldElement<'f, F, LIMBS>
        {
            type Output = FieldElement<'f, F, LIMBS>;
            fn $fun(self, rhs: FieldElement<'f, F, LIMBS>) -> Self::Output {
                self.combine(&rhs, <F as Field<LIMBS>>::$method)
            }
        }
        impl<'f, F: Field<LIMBS>, const LIMBS: usize> std::ops::$iface<&FieldElement<'f, F, LIMBS>>
            for &FieldElement<'f, F, LIMBS>
        {
            type Output = FieldElement<'f, F, LIMBS>;
            fn $fun(self, rhs: &FieldElement<'f, F, LIMBS>) -> Self::Output {
                self.combine(rhs, <F as Field<LIMBS>>::$method)
            }
        }
    };
}
pub(crate) use derive_op;

macro_rules! derive_op_assign {
    ($iface:ident, $fun:ident, $method:ident) => {
        impl<'f, F: Field<LIMBS>, const LIMBS: usize> std::ops::$iface<Self>
            for FieldElement<'f, F, LIMBS>
        {
            fn $fun(&mut self, rhs: Self) {
                *self = self.combine(&rhs, <F as Field<LIMBS>>::$method);
            }
        }
        impl<'f, F: Field<LIMBS>, const LIMBS: usize> std::ops::$iface<&Self>
            for FieldElement<'f, F, LIMBS>
        {
            fn $fun(&mut self, rhs: &Self) {
                *self = self.combine(rhs, <F as Field<LIMBS>>::$method);
            }
        }
    };
}
pub(crate) use derive_op_assign;
