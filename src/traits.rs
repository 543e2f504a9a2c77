use crate::error::Result;
use crate::{sm3, sm4};

pub trait Hash<const DIGEST_SIZE: usize> {
    fn reset(&mut self);

    fn write(&mut self, data: &[u8]) -> Result<()>;

    /// Writes the digest of the data so far into `digest[..DIGEST_SIZE]`
    /// without changing the state.
    ///
    /// # Panics
    ///
    /// Panics if `digest` is shorter than `DIGEST_SIZE` bytes.
    fn sum_into(&self, digest: &mut [u8]);

    fn sum(&self) -> [u8; DIGEST_SIZE] {
        let mut digest = [0; DIGEST_SIZE];
        self.sum_into(&mut digest);
        digest
    }

    // The block size of the input for the Hash, used in HMAC.
    // For SM3, it's 64.
    // The self is not necessarily, but we need it for a dyn Hash.
    fn block_size(&self) -> usize;
}

impl Hash<32> for sm3::Digest {
    fn reset(&mut self) {
        sm3::Digest::reset(self);
    }

    fn write(&mut self, data: &[u8]) -> Result<()> {
        sm3::Digest::write(self, data).map(|_| ())
    }

    fn sum_into(&self, digest: &mut [u8]) {
        sm3::Digest::sum_into(self, digest);
    }

    fn sum(&self) -> [u8; 32] {
        sm3::Digest::sum(self)
    }

    fn block_size(&self) -> usize {
        sm3::BLOCK_SIZE
    }
}

pub trait Block {
    fn block_size(&self) -> usize;

    // Encrypt as many blocks as possible from src to dst.
    // More precisely, encrypt min(dst.len()/BLOCK_SIZE, src.len()/BLOCK_SIZE) blocks.
    // Returns the number of bytes encrypted.
    fn encrypt(&self, dst: &mut [u8], src: &[u8]) -> usize;
    fn decrypt(&self, dst: &mut [u8], src: &[u8]) -> usize;

    fn encrypt_inplace(&self, in_out: &mut [u8]) -> usize;
    fn decrypt_inplace(&self, in_out: &mut [u8]) -> usize;
}

impl Block for sm4::Cipher {
    // encrypt blocks into dst. returns the bytes encrypted.
    fn encrypt(&self, dst: &mut [u8], src: &[u8]) -> usize {
        sm4::Cipher::encrypt(self, dst, src)
    }

    // decrypt blocks into dst. returns the bytes decrypted.
    fn decrypt(&self, dst: &mut [u8], src: &[u8]) -> usize {
        sm4::Cipher::decrypt(self, dst, src)
    }

    fn encrypt_inplace(&self, in_out: &mut [u8]) -> usize {
        sm4::Cipher::encrypt_inplace(self, in_out)
    }

    fn decrypt_inplace(&self, in_out: &mut [u8]) -> usize {
        sm4::Cipher::decrypt_inplace(self, in_out)
    }

    fn block_size(&self) -> usize {
        sm4::BLOCK_SIZE
    }
}
