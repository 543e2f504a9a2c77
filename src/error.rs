use core::fmt;

/// Names the argument whose length was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Key,
    Block,
    Blocks,
    Message,
    PrivateKey,
    PublicKey,
    Signature,
    Id,
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Input::Key => "SM4 key",
            Input::Block => "SM4 block",
            Input::Blocks => "SM4 four-way input",
            Input::Message => "SM3 message",
            Input::PrivateKey => "SM2 private key",
            Input::PublicKey => "SM2 public key",
            Input::Signature => "SM2 signature",
            Input::Id => "SM2 signer id",
        };
        f.write_str(s)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // For Input::Message and Input::Id, expected is the largest accepted length.
    #[error("invalid {input} length, want {expected}, got {actual}")]
    InvalidLength { input: Input, expected: u64, actual: u64 },

    #[error("invalid SM2 private key")]
    InvalidPrivateKey,

    #[error("invalid point")]
    InvalidPoint,
}

pub type Result<T> = core::result::Result<T, Error>;

#[inline]
pub(crate) fn check_len(input: Input, expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        tracing::debug!(%input, expected, actual, "rejected input length");
        return Err(Error::InvalidLength { input, expected: expected as u64, actual: actual as u64 });
    }
    Ok(())
}
