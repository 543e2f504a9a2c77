//! Point arithmetic on the SM2 recommended curve y^2 = x^3 + ax + b over GF(p).
//!
//! Field and scalar elements are `num` big integers. Points are kept in
//! Jacobian coordinates so that only the final conversion to affine form
//! needs an inversion.

use num::{BigUint, One, Zero};

use super::U256;

pub(crate) const P: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFE, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
];
pub(crate) const A: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFE, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFC,
];
pub(crate) const B: [u8; 32] = [
    0x28, 0xE9, 0xFA, 0x9E, 0x9D, 0x9F, 0x5E, 0x34, 0x4D, 0x5A, 0x9E, 0x4B, 0xCF, 0x65, 0x09, 0xA7,
    0xF3, 0x97, 0x89, 0xF5, 0x15, 0xAB, 0x8F, 0x92, 0xDD, 0xBC, 0xBD, 0x41, 0x4D, 0x94, 0x0E, 0x93,
];
pub(crate) const N: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFE, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0x72, 0x03, 0xDF, 0x6B, 0x21, 0xC6, 0x05, 0x2B, 0x53, 0xBB, 0xF4, 0x09, 0x39, 0xD5, 0x41, 0x23,
];
pub(crate) const GX: [u8; 32] = [
    0x32, 0xC4, 0xAE, 0x2C, 0x1F, 0x19, 0x81, 0x19, 0x5F, 0x99, 0x04, 0x46, 0x6A, 0x39, 0xC9, 0x94,
    0x8F, 0xE3, 0x0B, 0xBF, 0xF2, 0x66, 0x0B, 0xE1, 0x71, 0x5A, 0x45, 0x89, 0x33, 0x4C, 0x74, 0xC7,
];
pub(crate) const GY: [u8; 32] = [
    0xBC, 0x37, 0x36, 0xA2, 0xF4, 0xF6, 0x77, 0x9C, 0x59, 0xBD, 0xCE, 0xE3, 0x6B, 0x69, 0x21, 0x53,
    0xD0, 0xA9, 0x87, 0x7C, 0xC6, 0x2A, 0x47, 0x40, 0x02, 0xDF, 0x32, 0xE5, 0x21, 0x39, 0xF0, 0xA0,
];

// a, b < m.
#[inline]
pub(crate) fn add_mod(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    (a + b) % m
}

// a, b < m.
#[inline]
pub(crate) fn sub_mod(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    (a + m - b) % m
}

#[inline]
pub(crate) fn mul_mod(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    (a * b) % m
}

// m must be prime.
#[inline]
pub(crate) fn inv_mod(a: &BigUint, m: &BigUint) -> BigUint {
    let e = m - BigUint::from(2u32);
    a.modpow(&e, m)
}

/// (x, y, z) stands for the affine point (x/z^2, y/z^3). z = 0 is the point
/// at infinity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct JacobianPoint {
    pub x: BigUint,
    pub y: BigUint,
    pub z: BigUint,
}

impl JacobianPoint {
    pub fn infinity() -> Self {
        JacobianPoint { x: BigUint::zero(), y: BigUint::one(), z: BigUint::zero() }
    }

    pub fn from_affine(x: &U256, y: &U256) -> Self {
        JacobianPoint { x: x.to_biguint(), y: y.to_biguint(), z: BigUint::one() }
    }

    #[inline]
    pub fn is_infinity(&self) -> bool {
        self.z.is_zero()
    }
}

pub(crate) struct Curve {
    pub p: BigUint,
    pub a: BigUint,
    pub b: BigUint,
    pub n: BigUint,
    pub g: JacobianPoint,
}

impl Curve {
    pub fn sm2() -> Curve {
        Curve {
            p: BigUint::from_bytes_be(&P),
            a: BigUint::from_bytes_be(&A),
            b: BigUint::from_bytes_be(&B),
            n: BigUint::from_bytes_be(&N),
            g: JacobianPoint { x: BigUint::from_bytes_be(&GX), y: BigUint::from_bytes_be(&GY), z: BigUint::one() },
        }
    }

    /// Reports whether (x, y) is a point of the curve with both coordinates
    /// reduced mod p.
    pub fn is_on_curve(&self, x: &BigUint, y: &BigUint) -> bool {
        let p = &self.p;
        if x >= p || y >= p {
            return false;
        }
        let y2 = mul_mod(y, y, p);
        let x3 = mul_mod(&mul_mod(x, x, p), x, p);
        let rhs = add_mod(&add_mod(&x3, &mul_mod(&self.a, x, p), p), &self.b, p);
        y2 == rhs
    }

    pub fn double(&self, q: &JacobianPoint) -> JacobianPoint {
        if q.is_infinity() || q.y.is_zero() {
            return JacobianPoint::infinity();
        }
        let p = &self.p;
        // s = 4xy^2, m = 3x^2 + az^4
        let yy = mul_mod(&q.y, &q.y, p);
        let s = mul_mod(&BigUint::from(4u32), &mul_mod(&q.x, &yy, p), p);
        let zz = mul_mod(&q.z, &q.z, p);
        let xx3 = mul_mod(&BigUint::from(3u32), &mul_mod(&q.x, &q.x, p), p);
        let m = add_mod(&xx3, &mul_mod(&self.a, &mul_mod(&zz, &zz, p), p), p);

        // x' = m^2 - 2s, y' = m(s - x') - 8y^4, z' = 2yz
        let x = sub_mod(&mul_mod(&m, &m, p), &add_mod(&s, &s, p), p);
        let yyyy8 = mul_mod(&BigUint::from(8u32), &mul_mod(&yy, &yy, p), p);
        let y = sub_mod(&mul_mod(&m, &sub_mod(&s, &x, p), p), &yyyy8, p);
        let z = mul_mod(&BigUint::from(2u32), &mul_mod(&q.y, &q.z, p), p);
        JacobianPoint { x, y, z }
    }

    pub fn add(&self, q1: &JacobianPoint, q2: &JacobianPoint) -> JacobianPoint {
        if q1.is_infinity() {
            return q2.clone();
        }
        if q2.is_infinity() {
            return q1.clone();
        }
        let p = &self.p;
        let z1z1 = mul_mod(&q1.z, &q1.z, p);
        let z2z2 = mul_mod(&q2.z, &q2.z, p);
        let u1 = mul_mod(&q1.x, &z2z2, p);
        let u2 = mul_mod(&q2.x, &z1z1, p);
        let s1 = mul_mod(&q1.y, &mul_mod(&q2.z, &z2z2, p), p);
        let s2 = mul_mod(&q2.y, &mul_mod(&q1.z, &z1z1, p), p);

        if u1 == u2 {
            if s1 == s2 {
                return self.double(q1);
            }
            // q2 = -q1
            return JacobianPoint::infinity();
        }

        let h = sub_mod(&u2, &u1, p);
        let r = sub_mod(&s2, &s1, p);
        let hh = mul_mod(&h, &h, p);
        let hhh = mul_mod(&h, &hh, p);
        let v = mul_mod(&u1, &hh, p);

        // x' = r^2 - h^3 - 2v, y' = r(v - x') - s1 h^3, z' = z1 z2 h
        let x = sub_mod(&sub_mod(&mul_mod(&r, &r, p), &hhh, p), &add_mod(&v, &v, p), p);
        let y = sub_mod(&mul_mod(&r, &sub_mod(&v, &x, p), p), &mul_mod(&s1, &hhh, p), p);
        let z = mul_mod(&mul_mod(&q1.z, &q2.z, p), &h, p);
        JacobianPoint { x, y, z }
    }

    // Double-and-add from the most significant bit.
    pub fn scalar_mul(&self, k: &BigUint, q: &JacobianPoint) -> JacobianPoint {
        let mut res = JacobianPoint::infinity();
        for i in (0..k.bits()).rev() {
            res = self.double(&res);
            if k.bit(i) {
                res = self.add(&res, q);
            }
        }
        res
    }

    #[inline]
    pub fn scalar_base_mul(&self, k: &BigUint) -> JacobianPoint {
        self.scalar_mul(k, &self.g)
    }

    /// Returns the affine coordinates, or None for the point at infinity.
    pub fn to_affine(&self, q: &JacobianPoint) -> Option<(BigUint, BigUint)> {
        if q.is_infinity() {
            return None;
        }
        let p = &self.p;
        let zinv = inv_mod(&q.z, p);
        let zinv2 = mul_mod(&zinv, &zinv, p);
        let x = mul_mod(&q.x, &zinv2, p);
        let y = mul_mod(&q.y, &mul_mod(&zinv2, &zinv, p), p);
        Some((x, y))
    }
}
