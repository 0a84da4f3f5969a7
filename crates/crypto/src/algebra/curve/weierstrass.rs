use super::{internal, AffinePoint, Curve, ProjectivePoint};
use crate::algebra::field::Field;
use crate::algebra::uint::Uint;
use crate::CurveError;

/// Short Weierstrass curve `y² = x³ + a·x + b` in Jacobian coordinates.
#[derive(Clone, Debug)]
pub struct WeierstrassCurve<F: Field<LIMBS>, const LIMBS: usize> {
    name: String,
    field: F,
    order: Uint<LIMBS>,
    a: Uint<LIMBS>,
    b: Uint<LIMBS>,
    generator: AffinePoint<LIMBS>,
}

impl<F: Field<LIMBS>, const LIMBS: usize> WeierstrassCurve<F, LIMBS> {
    /// Create a curve from canonical coefficients and generator coordinates.
    ///
    /// The field modulus must be prime. Fails unless the generator lies on
    /// the curve and `order·G` is the point at infinity.
    pub fn new(
        name: impl Into<String>,
        field: F,
        order: Uint<LIMBS>,
        a: &Uint<LIMBS>,
        b: &Uint<LIMBS>,
        gx: &Uint<LIMBS>,
        gy: &Uint<LIMBS>,
    ) -> Result<Self, CurveError> {
        let [a, b, x, y] = internal(&field, [a, b, gx, gy])?;
        let curve = Self {
            name: name.into(),
            field,
            order,
            a,
            b,
            generator: AffinePoint::new(x, y),
        };
        curve.test_generator(&curve.generator)?;

        tracing::debug!(curve = %curve.name, bits = Uint::<LIMBS>::BITS, "Weierstrass curve constructed");
        Ok(curve)
    }

    /// Coefficient `a` in the field's internal representation
    pub fn a(&self) -> &Uint<LIMBS> {
        &self.a
    }

    /// Coefficient `b` in the field's internal representation
    pub fn b(&self) -> &Uint<LIMBS> {
        &self.b
    }

    /// `x³ + a·x + b`
    fn rhs(&self, x: &Uint<LIMBS>) -> Uint<LIMBS> {
        let f = &self.field;
        let x3 = f.mul(&f.square(x), x);
        let ax = f.mul(&self.a, x);
        f.add(&f.add(&x3, &ax), &self.b)
    }
}

impl<F: Field<LIMBS>, const LIMBS: usize> Curve<LIMBS> for WeierstrassCurve<F, LIMBS> {
    type Field = F;

    fn name(&self) -> &str {
        &self.name
    }

    fn field(&self) -> &F {
        &self.field
    }

    fn order(&self) -> &Uint<LIMBS> {
        &self.order
    }

    fn generator(&self) -> &AffinePoint<LIMBS> {
        &self.generator
    }

    fn identity(&self) -> ProjectivePoint<LIMBS> {
        let one = self.field.one();
        ProjectivePoint::new(one, one, Uint::ZERO)
    }

    fn is_identity(&self, p: &ProjectivePoint<LIMBS>) -> bool {
        p.z.is_zero()
    }

    fn is_on_curve(&self, p: &AffinePoint<LIMBS>) -> bool {
        !p.infinity && self.field.square(&p.y) == self.rhs(&p.x)
    }

    fn to_projective(&self, p: &AffinePoint<LIMBS>) -> ProjectivePoint<LIMBS> {
        if p.infinity {
            return self.identity();
        }
        ProjectivePoint::new(p.x, p.y, self.field.one())
    }

    fn to_affine(&self, p: &ProjectivePoint<LIMBS>) -> AffinePoint<LIMBS> {
        if self.is_identity(p) {
            return AffinePoint::identity();
        }
        let f = &self.field;
        let z_inv = f
            .inv(&p.z)
            .expect("non-zero z is invertible modulo a prime");
        let z2_inv = f.square(&z_inv);
        let z3_inv = f.mul(&z2_inv, &z_inv);
        AffinePoint::new(f.mul(&p.x, &z2_inv), f.mul(&p.y, &z3_inv))
    }

    fn add(&self, p: &ProjectivePoint<LIMBS>, q: &ProjectivePoint<LIMBS>) -> ProjectivePoint<LIMBS> {
        if self.is_identity(p) {
            return *q;
        }
        if self.is_identity(q) {
            return *p;
        }
        let f = &self.field;

        let z1z1 = f.square(&p.z);
        let z2z2 = f.square(&q.z);
        let u1 = f.mul(&p.x, &z2z2);
        let u2 = f.mul(&q.x, &z1z1);
        let s1 = f.mul(&f.mul(&p.y, &q.z), &z2z2);
        let s2 = f.mul(&f.mul(&q.y, &p.z), &z1z1);

        if u1 == u2 {
            if s1 != s2 {
                return self.identity();
            }
            return self.double(p);
        }

        let h = f.sub(&u2, &u1);
        let r = f.sub(&s2, &s1);
        let h2 = f.square(&h);
        let h3 = f.mul(&h, &h2);
        let u1h2 = f.mul(&u1, &h2);

        let x = f.sub(&f.sub(&f.square(&r), &h3), &f.double(&u1h2));
        let y = f.sub(&f.mul(&r, &f.sub(&u1h2, &x)), &f.mul(&s1, &h3));
        let z = f.mul(&f.mul(&h, &p.z), &q.z);
        ProjectivePoint::new(x, y, z)
    }

    fn double(&self, p: &ProjectivePoint<LIMBS>) -> ProjectivePoint<LIMBS> {
        if self.is_identity(p) || p.y.is_zero() {
            return self.identity();
        }
        let f = &self.field;

        let xx = f.square(&p.x);
        let yy = f.square(&p.y);
        let yyyy = f.square(&yy);
        let s = f.double(&f.double(&f.mul(&p.x, &yy)));

        // m = 3x² + a·z⁴
        let mut m = f.add(&f.double(&xx), &xx);
        if !self.a.is_zero() {
            let zz = f.square(&p.z);
            m = f.add(&m, &f.mul(&self.a, &f.square(&zz)));
        }

        let x = f.sub(&f.square(&m), &f.double(&s));
        let yyyy8 = f.double(&f.double(&f.double(&yyyy)));
        let y = f.sub(&f.mul(&m, &f.sub(&s, &x)), &yyyy8);
        let z = f.double(&f.mul(&p.y, &p.z));
        ProjectivePoint::new(x, y, z)
    }

    fn mixed_add(&self, p: &ProjectivePoint<LIMBS>, q: &AffinePoint<LIMBS>) -> ProjectivePoint<LIMBS> {
        if q.infinity {
            return *p;
        }
        if self.is_identity(p) {
            return self.to_projective(q);
        }
        let f = &self.field;

        let z1z1 = f.square(&p.z);
        let u1 = p.x;
        let u2 = f.mul(&q.x, &z1z1);
        let s1 = p.y;
        let s2 = f.mul(&f.mul(&q.y, &p.z), &z1z1);

        if u1 == u2 {
            if s1 != s2 {
                return self.identity();
            }
            return self.double(p);
        }

        let h = f.sub(&u2, &u1);
        let r = f.sub(&s2, &s1);
        let h2 = f.square(&h);
        let h3 = f.mul(&h, &h2);
        let u1h2 = f.mul(&u1, &h2);

        let x = f.sub(&f.sub(&f.square(&r), &h3), &f.double(&u1h2));
        let y = f.sub(&f.mul(&r, &f.sub(&u1h2, &x)), &f.mul(&s1, &h3));
        let z = f.mul(&h, &p.z);
        ProjectivePoint::new(x, y, z)
    }

    fn neg(&self, p: &ProjectivePoint<LIMBS>) -> ProjectivePoint<LIMBS> {
        ProjectivePoint::new(p.x, self.field.neg(&p.y), p.z)
    }

    fn neg_affine(&self, p: &AffinePoint<LIMBS>) -> AffinePoint<LIMBS> {
        if p.infinity {
            return *p;
        }
        AffinePoint::new(p.x, self.field.neg(&p.y))
    }

    fn lift_x(&self, x: &Uint<LIMBS>, odd: bool) -> Result<AffinePoint<LIMBS>, CurveError> {
        let f = &self.field;
        let x = f.to_internal(x)?;
        let y = f.sqrt(&self.rhs(&x))?.ok_or(CurveError::NotOnCurve)?;
        let y = if f.from_internal(&y).is_odd() == odd {
            y
        } else if y.is_zero() {
            return Err(CurveError::NotOnCurve);
        } else {
            f.neg(&y)
        };
        Ok(AffinePoint::new(x, y))
    }
}
