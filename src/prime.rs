// Primality testing and prime generation
// Deterministic trial division for small candidates, Miller-Rabin for
// key-sized ones.

use num_bigint::{BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::One;
use rand::{thread_rng, Rng};

use crate::error::CryptoError;
use crate::modmath::mod_pow;

/// Default Miller-Rabin round count; false-positive probability <= 4^-40.
pub const MILLER_RABIN_ROUNDS: u32 = 40;

/// Deterministic primality test for machine-word candidates.
/// Trial division by 2, 3 and then `6k ± 1` up to `sqrt(n)`.
pub fn is_prime_small(n: u64) -> bool {
    if n <= 1 {
        return false;
    }
    if n <= 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }

    let mut i = 5u64;
    while i <= n / i {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }

    true
}

/// Miller-Rabin probabilistic primality test.
/// Returns true if `n` passes `rounds` witness rounds (probably prime).
pub fn is_prime_large(n: &BigUint, rounds: u32) -> bool {
    let one = BigUint::one();
    let two = BigUint::from(2u8);
    let three = BigUint::from(3u8);

    if *n == two || *n == three {
        return true;
    }
    if *n <= one || n.is_even() {
        return false;
    }

    // Write n - 1 as 2^r * d with d odd
    let n_minus_one = n - &one;
    let mut d = n_minus_one.clone();
    let mut r = 0u32;
    while d.is_even() {
        d >>= 1;
        r += 1;
    }

    let mut rng = thread_rng();
    let n_minus_two = n - &two;

    'witness: for _ in 0..rounds {
        let a = rng.gen_biguint_range(&two, &n_minus_two);
        let mut x = mod_pow(&a, &d, n);

        if x.is_one() || x == n_minus_one {
            continue;
        }

        for _ in 1..r {
            x = mod_pow(&x, &two, n);
            if x == n_minus_one {
                continue 'witness;
            }
        }

        // No square reached n - 1: a witnesses compositeness
        return false;
    }

    true
}

/// Generate a random probable prime of exactly `bits` bits (`bits >= 2`).
///
/// Top and bottom bits are forced set so every candidate has the requested
/// bit length and is odd. Loops until a candidate passes Miller-Rabin;
/// expected attempts are O(bits) by prime density, with no iteration cap.
pub fn generate_prime(bits: u64) -> BigUint {
    let mut rng = thread_rng();
    let one = BigUint::one();

    loop {
        let mut candidate = rng.gen_biguint(bits);
        candidate |= &one << (bits - 1);
        candidate |= &one;

        if is_prime_large(&candidate, MILLER_RABIN_ROUNDS) {
            return candidate;
        }
    }
}

/// Pick a prime uniformly at random from `[lo, hi]`.
/// Fails with [`CryptoError::NoPrimeInRange`] when the range has none.
pub fn prime_in_range(lo: u64, hi: u64) -> Result<u64, CryptoError> {
    let primes: Vec<u64> = (lo..=hi).filter(|&n| is_prime_small(n)).collect();
    if primes.is_empty() {
        return Err(CryptoError::NoPrimeInRange { lo, hi });
    }

    let idx = thread_rng().gen_range(0..primes.len());
    Ok(primes[idx])
}

#[cfg(test)]
mod tests {
    use super::*;

    // Sieve of Eratosthenes, the reference for both testers.
    fn sieve(limit: usize) -> Vec<bool> {
        let mut prime = vec![true; limit + 1];
        prime[0] = false;
        if limit >= 1 {
            prime[1] = false;
        }
        let mut i = 2;
        while i * i <= limit {
            if prime[i] {
                let mut j = i * i;
                while j <= limit {
                    prime[j] = false;
                    j += i;
                }
            }
            i += 1;
        }
        prime
    }

    #[test]
    fn test_is_prime_small_basics() {
        assert!(!is_prime_small(0));
        assert!(!is_prime_small(1));
        assert!(is_prime_small(2));
        assert!(is_prime_small(3));
        assert!(!is_prime_small(4));
        assert!(is_prime_small(97));
        assert!(!is_prime_small(7919 * 7919));
        assert!(is_prime_small(7919));
    }

    #[test]
    fn test_testers_agree_with_sieve() {
        let reference = sieve(10_000);
        for n in 2u64..=10_000 {
            let expected = reference[n as usize];
            assert_eq!(is_prime_small(n), expected, "is_prime_small({n})");
            assert_eq!(
                is_prime_large(&BigUint::from(n), 20),
                expected,
                "is_prime_large({n})"
            );
        }
    }

    #[test]
    fn test_is_prime_large_rejects_carmichael() {
        // 561 = 3 * 11 * 17 fools the plain Fermat test
        assert!(!is_prime_large(&BigUint::from(561u32), MILLER_RABIN_ROUNDS));
        assert!(!is_prime_large(&BigUint::from(41041u32), MILLER_RABIN_ROUNDS));
    }

    #[test]
    fn test_generate_prime_16_bits() {
        for _ in 0..5 {
            let p = generate_prime(16);
            assert!(p >= BigUint::from(1u32 << 15));
            assert!(p < BigUint::from(1u32 << 16));
            assert!(p.is_odd());
            assert!(is_prime_large(&p, MILLER_RABIN_ROUNDS));
        }
    }

    #[test]
    fn test_prime_in_range() {
        for _ in 0..20 {
            let p = prime_in_range(2, 32).unwrap();
            assert!((2..=32).contains(&p));
            assert!(is_prime_small(p));
        }
        // Single-prime range is deterministic
        assert_eq!(prime_in_range(53, 53).unwrap(), 53);
    }

    #[test]
    fn test_prime_in_range_empty() {
        assert_eq!(
            prime_in_range(24, 28),
            Err(CryptoError::NoPrimeInRange { lo: 24, hi: 28 })
        );
        assert_eq!(
            prime_in_range(0, 1),
            Err(CryptoError::NoPrimeInRange { lo: 0, hi: 1 })
        );
    }
}
