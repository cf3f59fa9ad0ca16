// Hybrid encryption: per-byte raw RSA for the key, AES-128-CBC for the body
//
// The per-byte block scheme is the textbook construction: deterministic per
// byte value, so it leaks frequency patterns like a substitution cipher.
// It is reproduced here for demonstration, not for protecting real data.

use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use num_bigint::BigUint;
use rand::{thread_rng, Rng};

use crate::error::CryptoError;
use crate::keygen::{PrivateKey, PublicKey};
use crate::modmath::mod_pow;

type Aes128CbcEnc = cbc::Encryptor<aes::Aes128>;
type Aes128CbcDec = cbc::Decryptor<aes::Aes128>;

/// Symmetric key length in bytes (AES-128).
pub const SYMMETRIC_KEY_LEN: usize = 16;
/// Initialization vector length in bytes (one AES block).
pub const IV_LEN: usize = 16;
/// Serialized width of one encrypted byte: a 4-byte big-endian residue.
pub const BLOCK_WIDTH: usize = 4;

/// Result of a hybrid encryption: the symmetric key protected by the
/// recipient's RSA public key, plus the IV and the AES-encrypted body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HybridCiphertext {
    pub encrypted_key: Vec<u8>,
    pub iv: [u8; IV_LEN],
    pub body: Vec<u8>,
}

/// Encrypt a message byte-by-byte with raw RSA.
///
/// Each byte is raised to `e mod n` and packed into a fixed 4-byte
/// big-endian block. Requires `255 < n < 2^32`: below, a byte value does
/// not embed into the group; above, a residue may not fit the block.
pub fn rsa_encrypt_bytes(message: &[u8], key: &PublicKey) -> Result<Vec<u8>, CryptoError> {
    if key.n <= BigUint::from(u8::MAX) {
        return Err(CryptoError::ModulusTooSmall);
    }
    if key.n.bits() > 32 {
        return Err(CryptoError::ModulusTooLarge);
    }

    let mut blocks = Vec::with_capacity(message.len() * BLOCK_WIDTH);
    for &byte in message {
        let c = mod_pow(&BigUint::from(byte), &key.e, &key.n);
        let digits = c.to_bytes_be();
        let mut word = [0u8; BLOCK_WIDTH];
        word[BLOCK_WIDTH - digits.len()..].copy_from_slice(&digits);
        blocks.extend_from_slice(&word);
    }

    Ok(blocks)
}

/// Invert [`rsa_encrypt_bytes`]: unpack each 4-byte block, raise it to
/// `d mod n` and reassemble the byte. A residue above 255 means the block
/// was not produced under the matching public key.
pub fn rsa_decrypt_bytes(blocks: &[u8], key: &PrivateKey) -> Result<Vec<u8>, CryptoError> {
    let byte_max = BigUint::from(u8::MAX);

    let mut message = Vec::with_capacity(blocks.len() / BLOCK_WIDTH);
    for chunk in blocks.chunks(BLOCK_WIDTH) {
        let c = BigUint::from_bytes_be(chunk);
        let m = mod_pow(&c, &key.d, &key.n);
        if m > byte_max {
            return Err(CryptoError::InvalidBlock);
        }
        message.push(m.to_bytes_be()[0]);
    }

    Ok(message)
}

fn symmetric_encrypt(key: &[u8; SYMMETRIC_KEY_LEN], iv: &[u8; IV_LEN], plaintext: &[u8]) -> Vec<u8> {
    Aes128CbcEnc::new(key.into(), iv.into()).encrypt_padded_vec_mut::<Pkcs7>(plaintext)
}

fn symmetric_decrypt(
    key: &[u8; SYMMETRIC_KEY_LEN],
    iv: &[u8; IV_LEN],
    ciphertext: &[u8],
) -> Result<Vec<u8>, CryptoError> {
    Aes128CbcDec::new(key.into(), iv.into())
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| CryptoError::Padding)
}

/// Protect `message` for the holder of `recipient`'s private key.
///
/// A fresh 16-byte AES key and IV are drawn per call; the body is encrypted
/// with AES-128-CBC/PKCS#7 and the key with the per-byte RSA scheme.
pub fn hybrid_encrypt(message: &[u8], recipient: &PublicKey) -> Result<HybridCiphertext, CryptoError> {
    let mut rng = thread_rng();
    let mut key = [0u8; SYMMETRIC_KEY_LEN];
    let mut iv = [0u8; IV_LEN];
    rng.fill(&mut key);
    rng.fill(&mut iv);

    let body = symmetric_encrypt(&key, &iv, message);
    let encrypted_key = rsa_encrypt_bytes(&key, recipient)?;

    Ok(HybridCiphertext { encrypted_key, iv, body })
}

/// Invert [`hybrid_encrypt`]: recover the symmetric key with the private
/// exponent, then decrypt the body.
pub fn hybrid_decrypt(
    ciphertext: &HybridCiphertext,
    recipient: &PrivateKey,
) -> Result<Vec<u8>, CryptoError> {
    let recovered = rsa_decrypt_bytes(&ciphertext.encrypted_key, recipient)?;
    if recovered.len() != SYMMETRIC_KEY_LEN {
        return Err(CryptoError::Decryption(recovered.len()));
    }

    let mut key = [0u8; SYMMETRIC_KEY_LEN];
    key.copy_from_slice(&recovered);
    symmetric_decrypt(&key, &ciphertext.iv, &ciphertext.body)
}
