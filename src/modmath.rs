// Modular arithmetic primitives
// Thin layer over num-bigint: gcd, extended Euclid, modular inverse and
// square-and-multiply exponentiation.

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::error::CryptoError;

/// Greatest common divisor. `gcd(a, 0) = a`.
pub fn gcd(a: &BigUint, b: &BigUint) -> BigUint {
    a.gcd(b)
}

/// Extended Euclidean algorithm.
/// Returns `(g, x, y)` such that `a*x + b*y = g = gcd(a, b)`.
///
/// Iterative, so key-sized inputs never touch the call stack.
pub fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    let (mut old_r, mut r) = (a.clone(), b.clone());
    let (mut old_x, mut x) = (BigInt::one(), BigInt::zero());
    let (mut old_y, mut y) = (BigInt::zero(), BigInt::one());

    while !r.is_zero() {
        let q = &old_r / &r;
        let next_r = &old_r - &q * &r;
        old_r = std::mem::replace(&mut r, next_r);
        let next_x = &old_x - &q * &x;
        old_x = std::mem::replace(&mut x, next_x);
        let next_y = &old_y - &q * &y;
        old_y = std::mem::replace(&mut y, next_y);
    }

    (old_r, old_x, old_y)
}

/// Modular inverse: the `x` in `[0, m)` with `e*x ≡ 1 (mod m)`.
/// Fails with [`CryptoError::NoInverse`] when `gcd(e, m) != 1`.
pub fn mod_inverse(e: &BigUint, m: &BigUint) -> Result<BigUint, CryptoError> {
    let m_int = BigInt::from(m.clone());
    let (g, x, _) = extended_gcd(&BigInt::from(e.clone()), &m_int);

    if !g.is_one() {
        return Err(CryptoError::NoInverse);
    }

    // Normalize the Bezout coefficient into [0, m).
    let x = ((x % &m_int) + &m_int) % &m_int;
    let (_, magnitude) = x.into_parts();
    Ok(magnitude)
}

/// Modular exponentiation: `base^exp mod modulus`.
/// Square-and-multiply, O(log exp) multiplications. `modulus = 1` yields 0.
pub fn mod_pow(base: &BigUint, exp: &BigUint, modulus: &BigUint) -> BigUint {
    if modulus.is_one() {
        return BigUint::zero();
    }

    let mut result = BigUint::one();
    let mut base = base % modulus;
    let mut exp = exp.clone();

    while !exp.is_zero() {
        if exp.is_odd() {
            result = (&result * &base) % modulus;
        }
        base = (&base * &base) % modulus;
        exp >>= 1;
    }

    result
}
