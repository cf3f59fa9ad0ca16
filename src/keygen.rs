// RSA key pair construction
// Realistic bit-length keys and small "toy" keys for demonstration.

use num_bigint::{BigUint, RandBigInt};
use num_traits::One;
use rand::thread_rng;

use crate::error::CryptoError;
use crate::modmath::{gcd, mod_inverse};
use crate::prime::{generate_prime, prime_in_range};

/// Public exponent preference order, tried first to last.
const EXPONENT_CANDIDATES: [u32; 5] = [65537, 257, 17, 5, 3];

/// RSA public half: `(e, n)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    pub e: BigUint,
    pub n: BigUint,
}

/// RSA private half: `(d, n)`. `d` must stay confidential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrivateKey {
    pub d: BigUint,
    pub n: BigUint,
}

/// An RSA key pair. Immutable once generated; the primes and the totient
/// are transient inside generation and never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPair {
    pub public: PublicKey,
    pub private: PrivateKey,
}

fn assemble(e: BigUint, d: BigUint, n: BigUint) -> KeyPair {
    KeyPair {
        public: PublicKey { e, n: n.clone() },
        private: PrivateKey { d, n },
    }
}

/// Generate an RSA key pair with a modulus of roughly `bits` bits.
///
/// Draws two distinct `bits/2`-bit primes, then picks the first exponent
/// from the preference list `[65537, 257, 17, 5, 3]` that is coprime with
/// `phi(n)`. Fails with [`CryptoError::NoValidExponent`] when none is.
pub fn generate_keypair(bits: u64) -> Result<KeyPair, CryptoError> {
    let half_bits = bits / 2;

    let p = generate_prime(half_bits);
    let mut q = generate_prime(half_bits);
    while q == p {
        q = generate_prime(half_bits);
    }

    let n = &p * &q;
    let one = BigUint::one();
    let phi = (&p - &one) * (&q - &one);

    let e = EXPONENT_CANDIDATES
        .iter()
        .map(|&c| BigUint::from(c))
        .find(|c| gcd(c, &phi).is_one())
        .ok_or(CryptoError::NoValidExponent)?;
    let d = mod_inverse(&e, &phi)?;

    Ok(assemble(e, d, n))
}

/// Generate a small, human-inspectable key pair from primes in `[lo, hi]`.
///
/// The exponent is drawn uniformly from `[2, phi)` and redrawn until it is
/// coprime with `phi`. Callers of the per-byte raw block scheme must still
/// ensure `n > 255`; the check lives at encryption time since the pair may
/// be valid for signing regardless.
pub fn generate_toy_keypair(lo: u64, hi: u64) -> Result<KeyPair, CryptoError> {
    let one = BigUint::one();
    let two = BigUint::from(2u8);

    let (n, phi) = loop {
        let p = prime_in_range(lo, hi)?;
        let mut q = prime_in_range(lo, hi)?;
        while q == p {
            q = prime_in_range(lo, hi)?;
        }

        let p = BigUint::from(p);
        let q = BigUint::from(q);
        let n = &p * &q;
        let phi = (&p - &one) * (&q - &one);

        // {2, 3} gives phi = 2, leaving no exponent with 1 < e < phi
        if phi > two {
            break (n, phi);
        }
    };

    let mut rng = thread_rng();
    let mut e = rng.gen_biguint_range(&two, &phi);
    while !gcd(&e, &phi).is_one() {
        e = rng.gen_biguint_range(&two, &phi);
    }
    let d = mod_inverse(&e, &phi)?;

    Ok(assemble(e, d, n))
}
