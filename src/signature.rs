// RSA digital signatures over SHA-256 digests
// Deterministic raw-RSA exponentiation of the digest; no timestamping,
// nonce or replay protection.

use std::fmt;

use num_bigint::BigUint;

use crate::digest::{digest_to_uint, sha256};
use crate::keygen::{PrivateKey, PublicKey};
use crate::modmath::mod_pow;

/// A signature value: the digest raised to the private exponent mod `n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature(pub BigUint);

impl Signature {
    /// Lowercase hex rendering of the big-endian signature bytes.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0.to_bytes_be())
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Sign a message: `s = hash(message)^d mod n`.
///
/// The digest must be numerically smaller than `n` for verification to
/// succeed, so the modulus should exceed 256 bits. That is size guidance
/// for the caller, not an enforced check.
pub fn sign(message: &[u8], key: &PrivateKey) -> Signature {
    let h = digest_to_uint(&sha256(message));
    Signature(mod_pow(&h, &key.d, &key.n))
}

/// Verify a signature: recompute the digest and compare it with
/// `s^e mod n`. Pure function of the message and key pair.
pub fn verify(message: &[u8], signature: &Signature, key: &PublicKey) -> bool {
    let h = digest_to_uint(&sha256(message));
    mod_pow(&signature.0, &key.e, &key.n) == h
}
