//! SM2 digital signatures, GB/T 32918.2-2016, over the recommended 256 bits
//! curve. Message digests are SM3.

use core::fmt;

use num::{BigUint, Zero};
use rand::RngCore;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{Error, Input, Result, check_len};
use ec::Curve;

mod ec;
pub mod sign;

pub use sign::*;

/// A 256 bits unsigned integer as four little-endian u64 limbs.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Zeroize)]
pub struct U256 {
    pub v: [u64; 4],
}

impl U256 {
    pub fn from_be_bytes(b: &[u8; 32]) -> Self {
        let mut v = [0u64; 4];
        for (limb, chunk) in v.iter_mut().zip(b.rchunks_exact(8)) {
            let mut w = [0u8; 8];
            w.copy_from_slice(chunk);
            *limb = u64::from_be_bytes(w);
        }
        U256 { v }
    }

    pub fn from_be_slice(b: &[u8]) -> Option<Self> {
        let b: &[u8; 32] = b.try_into().ok()?;
        Some(Self::from_be_bytes(b))
    }

    // U256 to big-endian 32 bytes.
    pub fn to_be_bytes(&self) -> [u8; 32] {
        let mut res = [0; 32];
        for (chunk, limb) in res.rchunks_exact_mut(8).zip(self.v.iter()) {
            chunk.copy_from_slice(&limb.to_be_bytes());
        }
        res
    }

    pub(crate) fn to_biguint(self) -> BigUint {
        BigUint::from_bytes_be(&self.to_be_bytes())
    }

    // v < 2^256.
    pub(crate) fn from_biguint(v: &BigUint) -> Self {
        let bytes = v.to_bytes_be();
        let mut be = [0u8; 32];
        be[32 - bytes.len()..].copy_from_slice(&bytes);
        Self::from_be_bytes(&be)
    }
}

// Uniform in [1, upper).
pub(crate) fn random_scalar<R: RngCore + ?Sized>(upper: &BigUint, rnd: &mut R) -> BigUint {
    let mut buf = [0u8; 32];
    loop {
        rnd.fill_bytes(&mut buf);
        let k = BigUint::from_bytes_be(&buf);
        if !k.is_zero() && &k < upper {
            buf.zeroize();
            return k;
        }
    }
}

/// An SM2 public key, the affine point (x, y).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    pub x: U256,
    pub y: U256,
}

impl PublicKey {
    /// Parses `04 || x || y` (65 bytes) or `x || y` (64 bytes). The point
    /// must lie on the curve.
    pub fn from_bytes(b: &[u8]) -> Result<Self> {
        let xy = match b.len() {
            65 if b[0] == 0x04 => &b[1..],
            65 => {
                tracing::debug!(prefix = b[0], "rejected SM2 public key encoding");
                return Err(Error::InvalidPoint);
            }
            64 => b,
            n => {
                tracing::debug!(actual = n, "rejected SM2 public key length");
                return Err(Error::InvalidLength { input: Input::PublicKey, expected: 65, actual: n as u64 });
            }
        };
        let pk = PublicKey {
            x: U256::from_be_slice(&xy[..32]).ok_or(Error::InvalidPoint)?,
            y: U256::from_be_slice(&xy[32..]).ok_or(Error::InvalidPoint)?,
        };
        if !pk.is_valid() {
            tracing::debug!("rejected SM2 public key off the curve");
            return Err(Error::InvalidPoint);
        }
        Ok(pk)
    }

    /// The uncompressed encoding `04 || x || y`.
    pub fn to_bytes(&self) -> [u8; 65] {
        let mut res = [0u8; 65];
        res[0] = 0x04;
        res[1..33].copy_from_slice(&self.x.to_be_bytes());
        res[33..].copy_from_slice(&self.y.to_be_bytes());
        res
    }

    /// Reports whether the key is a point of the curve. The curve has
    /// cofactor 1, so every such point has order n.
    pub fn is_valid(&self) -> bool {
        Curve::sm2().is_on_curve(&self.x.to_biguint(), &self.y.to_biguint())
    }
}

/// An SM2 private key d in [1, n-2], with its public key. d is zeroed on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey {
    d: U256,
    #[zeroize(skip)]
    public_key: PublicKey,
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey(..)")
    }
}

impl PrivateKey {
    pub fn new<R: RngCore + ?Sized>(rnd: &mut R) -> Self {
        let curve = Curve::sm2();
        // 1+d must be invertible mod n, so d stops at n-2.
        let upper = &curve.n - 1u32;
        loop {
            let d = random_scalar(&upper, rnd);
            if let Ok(sk) = Self::from_scalar(&curve, &d) {
                return sk;
            }
        }
    }

    /// Reads d from 32 big-endian bytes.
    pub fn from_bytes(b: &[u8]) -> Result<Self> {
        check_len(Input::PrivateKey, 32, b.len())?;
        let curve = Curve::sm2();
        let d = BigUint::from_bytes_be(b);
        if d.is_zero() || d >= &curve.n - 1u32 {
            tracing::debug!("rejected SM2 private key out of range");
            return Err(Error::InvalidPrivateKey);
        }
        Self::from_scalar(&curve, &d)
    }

    fn from_scalar(curve: &Curve, d: &BigUint) -> Result<Self> {
        let (x, y) = curve.to_affine(&curve.scalar_base_mul(d)).ok_or(Error::InvalidPrivateKey)?;
        Ok(PrivateKey {
            d: U256::from_biguint(d),
            public_key: PublicKey { x: U256::from_biguint(&x), y: U256::from_biguint(&y) },
        })
    }

    pub fn to_bytes(&self) -> [u8; 32] {
        self.d.to_be_bytes()
    }

    /// returns the public key.
    pub fn public(&self) -> PublicKey {
        self.public_key.clone()
    }

    pub(crate) fn scalar(&self) -> BigUint {
        self.d.to_biguint()
    }
}
