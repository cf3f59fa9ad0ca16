// Hash helpers: SHA-256 for signatures, plus a toy XOR block checksum.

use num_bigint::BigUint;
use sha2::{Digest, Sha256};

/// SHA-256 digest of a message.
pub fn sha256(message: &[u8]) -> [u8; 32] {
    Sha256::digest(message).into()
}

/// Reinterpret a digest as an unsigned big-endian integer.
pub fn digest_to_uint(digest: &[u8]) -> BigUint {
    BigUint::from_bytes_be(digest)
}

/// XOR-fold checksum: zero-pad the message to a multiple of `block_size`
/// bytes and XOR all blocks together. `block_size` must be nonzero.
///
/// An integrity demo only; trivially collidable (any byte permutation
/// within a column preserves the value).
pub fn xor_block_hash(message: &[u8], block_size: usize) -> Vec<u8> {
    let mut acc = vec![0u8; block_size];
    for chunk in message.chunks(block_size) {
        for (slot, &byte) in acc.iter_mut().zip(chunk) {
            *slot ^= byte;
        }
    }
    acc
}
