use num::{BigUint, One, Zero};
use rand::RngCore;
use subtle::ConstantTimeEq;

use super::ec::{self, Curve, JacobianPoint, add_mod, inv_mod, mul_mod, sub_mod};
use super::*;
use crate::sm3;

/// The signer id used when none is given.
pub const DEFAULT_ID: &[u8] = b"1234567812345678";

/// ENTL holds the id length in bits as 16 bits.
pub const MAX_ID_LEN: usize = 0xffff / 8;

#[derive(Copy, Clone, Default, Debug, PartialEq, Eq)]
pub struct Signature {
    pub r: U256,
    pub s: U256,
}

impl Signature {
    /// Parses `r || s`, 64 bytes.
    pub fn from_bytes(b: &[u8]) -> Result<Self> {
        check_len(Input::Signature, 64, b.len())?;
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&b[..32]);
        s.copy_from_slice(&b[32..]);
        Ok(Signature { r: U256::from_be_bytes(&r), s: U256::from_be_bytes(&s) })
    }

    pub fn to_bytes(&self) -> [u8; 64] {
        let mut res = [0u8; 64];
        res[..32].copy_from_slice(&self.r.to_be_bytes());
        res[32..].copy_from_slice(&self.s.to_be_bytes());
        res
    }
}

/// Signs the 32 bytes digest `e`, drawing nonces from `rnd` until one gives a
/// valid signature.
pub fn sign<T: RngCore + ?Sized>(e: &[u8; 32], d: &PrivateKey, rnd: &mut T) -> Signature {
    let curve = Curve::sm2();
    loop {
        let k = random_scalar(&curve.n, rnd);
        if let Some(sig) = sign_inner(&curve, e, d, &k) {
            return sig;
        }
        tracing::trace!("sm2 nonce rejected");
    }
}

// k in [1, n-1]. None when k has to be redrawn.
fn sign_inner(curve: &Curve, e: &[u8; 32], d: &PrivateKey, k: &BigUint) -> Option<Signature> {
    let n = &curve.n;
    let (x1, _) = curve.to_affine(&curve.scalar_base_mul(k))?;

    // r = e + x1 mod n
    let r = add_mod(&BigUint::from_bytes_be(e), &x1, n);
    if r.is_zero() || &(&r + k) == n {
        return None;
    }

    // s = (1+d)^-1 (k - rd) mod n
    let d = d.scalar();
    let d1inv = inv_mod(&(&d + BigUint::one()), n);
    let s = mul_mod(&d1inv, &sub_mod(k, &mul_mod(&r, &d, n), n), n);
    if s.is_zero() {
        return None;
    }
    Some(Signature { r: U256::from_biguint(&r), s: U256::from_biguint(&s) })
}

/// Reports whether `sig` is a signature of the digest `e` under `pk`.
pub fn verify(e: &[u8; 32], pk: &PublicKey, sig: &Signature) -> bool {
    let curve = Curve::sm2();
    let n = &curve.n;
    let r = sig.r.to_biguint();
    let s = sig.s.to_biguint();
    if r.is_zero() || &r >= n || s.is_zero() || &s >= n {
        tracing::debug!("rejected SM2 signature out of range");
        return false;
    }
    if !pk.is_valid() {
        tracing::debug!("rejected SM2 public key off the curve");
        return false;
    }

    // t = r + s mod n
    let t = add_mod(&r, &s, n);
    if t.is_zero() {
        return false;
    }

    // (x1, y1) = [s]G + [t]PK
    let p = curve.add(&curve.scalar_base_mul(&s), &curve.scalar_mul(&t, &JacobianPoint::from_affine(&pk.x, &pk.y)));
    let Some((x1, _)) = curve.to_affine(&p) else {
        return false;
    };

    let v = U256::from_biguint(&add_mod(&BigUint::from_bytes_be(e), &x1, n));
    v.to_be_bytes().ct_eq(&sig.r.to_be_bytes()).into()
}

/// The SM3 digest of `msg`, the `e` that [`sign_message`] signs.
pub fn hash_message(msg: &[u8]) -> Result<[u8; 32]> {
    let mut d = sm3::Digest::new();
    d.write(msg)?;
    Ok(d.sum())
}

/// Signs SM3(msg).
pub fn sign_message<T: RngCore + ?Sized>(msg: &[u8], d: &PrivateKey, rnd: &mut T) -> Result<Signature> {
    let e = hash_message(msg)?;
    Ok(sign(&e, d, rnd))
}

/// Verifies a signature made by [`sign_message`].
pub fn verify_message(msg: &[u8], pk: &PublicKey, sig: &Signature) -> bool {
    match hash_message(msg) {
        Ok(e) => verify(&e, pk, sig),
        Err(_) => false,
    }
}

/// Z_A = SM3(ENTL || id || a || b || Gx || Gy || x || y), binding the signer
/// id and public key. `None` means [`DEFAULT_ID`].
pub fn precompute_with_id_public_key(id: Option<&[u8]>, pk: &PublicKey) -> Result<[u8; 32]> {
    let id = id.unwrap_or(DEFAULT_ID);
    if id.len() > MAX_ID_LEN {
        tracing::debug!(actual = id.len(), max = MAX_ID_LEN, "rejected SM2 signer id length");
        return Err(Error::InvalidLength { input: Input::Id, expected: MAX_ID_LEN as u64, actual: id.len() as u64 });
    }
    let entl = (id.len() as u16) << 3;
    let mut d = sm3::Digest::new();
    d.write(&entl.to_be_bytes())?
        .write(id)?
        .write(&ec::A)?
        .write(&ec::B)?
        .write(&ec::GX)?
        .write(&ec::GY)?
        .write(&pk.x.to_be_bytes())?
        .write(&pk.y.to_be_bytes())?;
    Ok(d.sum())
}

/// e = SM3(Z_A || msg), the digest signed under the GB/T 32918.2 scheme.
pub fn precompute_with_id_public_key_msg(id: Option<&[u8]>, pk: &PublicKey, msg: &[u8]) -> Result<[u8; 32]> {
    let z = precompute_with_id_public_key(id, pk)?;
    let mut d = sm3::Digest::new();
    d.write(&z)?.write(msg)?;
    Ok(d.sum())
}
