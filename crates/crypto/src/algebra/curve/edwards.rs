use super::{internal, AffinePoint, Curve, ProjectivePoint};
use crate::algebra::field::Field;
use crate::algebra::uint::Uint;
use crate::CurveError;

/// Twisted Edwards curve `a·x² + y² = 1 + d·x²·y²` in homogeneous
/// projective coordinates.
///
/// The unified addition law needs no special cases, so [Curve::add],
/// [Curve::mixed_add] and [Curve::double] never branch on their inputs. The
/// law is complete only for a square `a` and a non-square `d`, which
/// [EdwardsCurve::new] enforces. The neutral element is `(0, 1)`, reported
/// by [Curve::to_affine] and [Curve::point] as the point at infinity.
#[derive(Clone, Debug)]
pub struct EdwardsCurve<F: Field<LIMBS>, const LIMBS: usize> {
    name: String,
    field: F,
    order: Uint<LIMBS>,
    a: Uint<LIMBS>,
    d: Uint<LIMBS>,
    generator: AffinePoint<LIMBS>,
}

impl<F: Field<LIMBS>, const LIMBS: usize> EdwardsCurve<F, LIMBS> {
    /// Create a curve from canonical coefficients and generator coordinates.
    ///
    /// The field modulus must be prime. Fails with
    /// [CurveError::IncompleteCurve] unless `a` is a non-zero square and `d`
    /// a non-square, and with [CurveError::InvalidGenerator] like
    /// [WeierstrassCurve::new](super::WeierstrassCurve::new).
    pub fn new(
        name: impl Into<String>,
        field: F,
        order: Uint<LIMBS>,
        a: &Uint<LIMBS>,
        d: &Uint<LIMBS>,
        gx: &Uint<LIMBS>,
        gy: &Uint<LIMBS>,
    ) -> Result<Self, CurveError> {
        let [a, d, x, y] = internal(&field, [a, d, gx, gy])?;
        if a.is_zero() || !is_square(&field, &a) || d.is_zero() || is_square(&field, &d) {
            return Err(CurveError::IncompleteCurve);
        }
        let curve = Self {
            name: name.into(),
            field,
            order,
            a,
            d,
            generator: AffinePoint::new(x, y),
        };
        curve.test_generator(&curve.generator)?;

        tracing::debug!(curve = %curve.name, bits = Uint::<LIMBS>::BITS, "Edwards curve constructed");
        Ok(curve)
    }

    pub fn a(&self) -> &Uint<LIMBS> {
        &self.a
    }

    pub fn d(&self) -> &Uint<LIMBS> {
        &self.d
    }

    /// Hashing arbitrary bytes onto the curve is not supported.
    pub fn hash_into(&self, _bytes: &[u8]) -> Result<AffinePoint<LIMBS>, CurveError> {
        Err(CurveError::Unsupported("hashing into an Edwards curve"))
    }

    /// add-2008-bbjlp with `a = z1·z2` passed in, so the mixed variant can
    /// skip that multiplication.
    fn add_with(
        &self,
        p: &ProjectivePoint<LIMBS>,
        qx: &Uint<LIMBS>,
        qy: &Uint<LIMBS>,
        zz: Uint<LIMBS>,
    ) -> ProjectivePoint<LIMBS> {
        let f = &self.field;

        let b = f.square(&zz);
        let c = f.mul(&p.x, qx);
        let d = f.mul(&p.y, qy);
        let e = f.mul(&f.mul(&self.d, &c), &d);
        let ff = f.sub(&b, &e);
        let g = f.add(&b, &e);

        let sums = f.mul(&f.add(&p.x, &p.y), &f.add(qx, qy));
        let x = f.mul(&f.mul(&zz, &ff), &f.sub(&f.sub(&sums, &c), &d));
        let y = f.mul(&f.mul(&zz, &g), &f.sub(&d, &f.mul(&self.a, &c)));
        let z = f.mul(&ff, &g);
        ProjectivePoint::new(x, y, z)
    }
}

/// Euler's criterion for a non-zero `x`
fn is_square<F: Field<LIMBS>, const LIMBS: usize>(field: &F, x: &Uint<LIMBS>) -> bool {
    let half = field.modulus().shr(1);
    field.pow(x, &half) == field.one()
}

impl<F: Field<LIMBS>, const LIMBS: usize> Curve<LIMBS> for EdwardsCurve<F, LIMBS> {
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
        ProjectivePoint::new(Uint::ZERO, one, one)
    }

    fn is_identity(&self, p: &ProjectivePoint<LIMBS>) -> bool {
        p.x.is_zero() && !p.z.is_zero() && p.y == p.z
    }

    fn is_on_curve(&self, p: &AffinePoint<LIMBS>) -> bool {
        if p.infinity {
            return false;
        }
        let f = &self.field;
        let x2 = f.square(&p.x);
        let y2 = f.square(&p.y);
        let lhs = f.add(&f.mul(&self.a, &x2), &y2);
        let rhs = f.add(&f.one(), &f.mul(&self.d, &f.mul(&x2, &y2)));
        lhs == rhs
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
            .expect("z never vanishes on a complete Edwards curve");
        AffinePoint::new(f.mul(&p.x, &z_inv), f.mul(&p.y, &z_inv))
    }

    fn add(&self, p: &ProjectivePoint<LIMBS>, q: &ProjectivePoint<LIMBS>) -> ProjectivePoint<LIMBS> {
        let zz = self.field.mul(&p.z, &q.z);
        self.add_with(p, &q.x, &q.y, zz)
    }

    /// dbl-2008-bbjlp
    fn double(&self, p: &ProjectivePoint<LIMBS>) -> ProjectivePoint<LIMBS> {
        let f = &self.field;

        let b = f.square(&f.add(&p.x, &p.y));
        let c = f.square(&p.x);
        let d = f.square(&p.y);
        let e = f.mul(&self.a, &c);
        let ff = f.add(&e, &d);
        let h = f.square(&p.z);
        let j = f.sub(&ff, &f.double(&h));

        let x = f.mul(&f.sub(&f.sub(&b, &c), &d), &j);
        let y = f.mul(&ff, &f.sub(&e, &d));
        let z = f.mul(&ff, &j);
        ProjectivePoint::new(x, y, z)
    }

    fn mixed_add(&self, p: &ProjectivePoint<LIMBS>, q: &AffinePoint<LIMBS>) -> ProjectivePoint<LIMBS> {
        if q.infinity {
            return *p;
        }
        self.add_with(p, &q.x, &q.y, p.z)
    }

    fn neg(&self, p: &ProjectivePoint<LIMBS>) -> ProjectivePoint<LIMBS> {
        ProjectivePoint::new(self.field.neg(&p.x), p.y, p.z)
    }

    fn neg_affine(&self, p: &AffinePoint<LIMBS>) -> AffinePoint<LIMBS> {
        if p.infinity {
            return *p;
        }
        AffinePoint::new(self.field.neg(&p.x), p.y)
    }
}
