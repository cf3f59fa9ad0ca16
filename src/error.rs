// Error taxonomy for the toolkit
// Every error is a deterministic function of its inputs; prime and
// exponent searches loop instead of failing.

use thiserror::Error;

/// Errors produced by key generation, the block scheme and the hybrid scheme.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    #[error("modular inverse does not exist (arguments are not coprime)")]
    NoInverse,

    #[error("no prime exists in [{lo}, {hi}]")]
    NoPrimeInRange { lo: u64, hi: u64 },

    #[error("no candidate public exponent is coprime with phi(n)")]
    NoValidExponent,

    #[error("modulus must be greater than 255 for the per-byte block scheme")]
    ModulusTooSmall,

    #[error("modulus does not fit the fixed 4-byte block width")]
    ModulusTooLarge,

    #[error("decrypted block is not a byte value")]
    InvalidBlock,

    #[error("symmetric ciphertext has invalid padding")]
    Padding,

    #[error("recovered symmetric key has invalid length {0}")]
    Decryption(usize),
}
