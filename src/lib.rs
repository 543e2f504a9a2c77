#![no_std]
#![warn(clippy::std_instead_of_alloc, clippy::std_instead_of_core)]

//! The GM/T core primitives: the SM4 block cipher (GB/T 32907-2016), the
//! SM3 hash (GB/T 32905-2016) and SM2 signatures (GB/T 32918.2-2016).
//!
//! The crate exposes five entry points:
//!
//! - [`init_sm4_tables`]: materialize the SM4 T-tables (idempotent, optional).
//! - [`sm4_key_schedule`]: expand a 16 bytes key into 32 round keys.
//! - [`sm4_transform`]: encrypt or decrypt one 16 bytes block.
//! - [`sm4_encrypt_x4`]: encrypt four independent blocks lane by lane.
//! - [`sm3()`]: the one-shot SM3 digest.
//!
//! [`sm2`] signs and verifies SM3 digests with the recommended curve.

pub mod error;
pub mod sm2;
pub mod sm4;
#[macro_use]
pub mod sm3;
pub mod traits;

mod internal;

#[allow(unused_imports)]
#[macro_use]
extern crate alloc;

#[cfg(any(feature = "std", test))]
#[macro_use]
extern crate std;

pub use error::{Error, Input, Result};
pub use internal::rotl;
pub use sm3::sm3;
pub use sm4::{Direction, RoundKeys, init_sm4_tables, sm4_encrypt_x4, sm4_key_schedule, sm4_transform};
