//! Textbook public-key toolkit: primality testing, RSA key generation,
//! hybrid RSA + AES-128-CBC encryption and RSA/SHA-256 signatures.
//!
//! Everything here is demonstration-grade cryptography. In particular the
//! per-byte raw RSA block scheme in [`hybrid`] is deterministic per byte
//! value and leaks plaintext frequency patterns like a substitution
//! cipher; there is no OAEP/PSS padding anywhere. Do not use this crate to
//! protect real data.
//!
//! Key generation loops until a suitable prime or exponent is found. The
//! loops are unbounded but terminate quickly in expectation; callers that
//! need cancellation must wrap the call with an external deadline (there
//! is no partial state to clean up).

pub mod digest;
pub mod error;
pub mod hybrid;
pub mod keygen;
pub mod modmath;
pub mod prime;
pub mod signature;

pub use digest::{sha256, xor_block_hash};
pub use error::CryptoError;
pub use hybrid::{
    hybrid_decrypt, hybrid_encrypt, rsa_decrypt_bytes, rsa_encrypt_bytes, HybridCiphertext,
};
pub use keygen::{generate_keypair, generate_toy_keypair, KeyPair, PrivateKey, PublicKey};
pub use prime::{generate_prime, is_prime_large, is_prime_small, prime_in_range};
pub use signature::{sign, verify, Signature};
