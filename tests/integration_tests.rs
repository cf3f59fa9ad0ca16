// End-to-end flows across key generation, hybrid encryption and signing.

use num_bigint::BigUint;
use num_traits::ToPrimitive;
use rsa_hybrid::{
    generate_keypair, generate_toy_keypair, hybrid_decrypt, hybrid_encrypt, is_prime_small,
    rsa_decrypt_bytes, rsa_encrypt_bytes, sign, verify, CryptoError, KeyPair, PublicKey,
};

// Trial division over a small modulus recovers the generation primes.
fn factor(n: &BigUint) -> (u64, u64) {
    let n = n.to_u64().expect("modulus fits u64");
    let mut p = 2;
    while n % p != 0 {
        p += 1;
    }
    (p, n / p)
}

// Toy keys with n inside (255, 2^32), valid for the per-byte block scheme.
fn block_range_keypair() -> KeyPair {
    generate_toy_keypair(17, 251).unwrap()
}

#[test]
fn toy_keypair_yields_distinct_primes() {
    for _ in 0..10 {
        let pair = generate_toy_keypair(2, 32).unwrap();
        let (p, q) = factor(&pair.public.n);
        assert_ne!(p, q);
        assert!(is_prime_small(p) && is_prime_small(q));
    }
}

#[test]
fn raw_rsa_roundtrip_with_generated_keys() {
    let pair = block_range_keypair();
    for message in [&b""[..], b"a", b"Hello, RSA!", &[0u8, 255, 128, 7]] {
        let blocks = rsa_encrypt_bytes(message, &pair.public).unwrap();
        assert_eq!(rsa_decrypt_bytes(&blocks, &pair.private).unwrap(), message);
    }
}

#[test]
fn raw_rsa_rejects_small_modulus() {
    let key = PublicKey {
        e: BigUint::from(17u32),
        n: BigUint::from(200u32),
    };
    assert_eq!(
        rsa_encrypt_bytes(b"message", &key),
        Err(CryptoError::ModulusTooSmall)
    );
}

#[test]
fn hybrid_roundtrip_with_generated_keys() {
    let pair = block_range_keypair();
    let messages: [&[u8]; 4] = [
        b"",
        b"short",
        b"a message spanning multiple AES blocks, padded with PKCS#7",
        &[0u8; 1024],
    ];

    for message in messages {
        let ciphertext = hybrid_encrypt(message, &pair.public).unwrap();
        assert_eq!(hybrid_decrypt(&ciphertext, &pair.private).unwrap(), message);
    }
}

#[test]
fn hybrid_decrypt_with_wrong_key_does_not_recover() {
    let pair = block_range_keypair();
    let mut other = block_range_keypair();
    while other.public.n == pair.public.n {
        other = block_range_keypair();
    }

    let message = b"for the right recipient only";
    let ciphertext = hybrid_encrypt(message, &pair.public).unwrap();

    match hybrid_decrypt(&ciphertext, &other.private) {
        Ok(recovered) => assert_ne!(recovered, message),
        Err(
            CryptoError::Padding | CryptoError::InvalidBlock | CryptoError::Decryption(_),
        ) => {}
        Err(err) => panic!("unexpected error: {err}"),
    }
}

#[test]
fn signature_flow_with_realistic_key() {
    let pair = generate_keypair(512).unwrap();
    let message = b"document to be signed";

    let signature = sign(message, &pair.private);
    assert!(verify(message, &signature, &pair.public));

    // Re-signing reproduces the exact value
    assert_eq!(sign(message, &pair.private), signature);

    // Any single-byte change breaks verification
    let mut tampered = message.to_vec();
    tampered[7] ^= 0x20;
    assert!(!verify(&tampered, &signature, &pair.public));
}

#[test]
fn same_keypair_shape_serves_signing_and_toy_encryption() {
    // A toy pair too small for signing digests still encrypts bytes,
    // and a realistic pair too large for the 4-byte blocks still signs.
    let toy = block_range_keypair();
    let blocks = rsa_encrypt_bytes(b"dual use", &toy.public).unwrap();
    assert_eq!(rsa_decrypt_bytes(&blocks, &toy.private).unwrap(), b"dual use");

    let real = generate_keypair(320).unwrap();
    assert_eq!(
        rsa_encrypt_bytes(b"dual use", &real.public),
        Err(CryptoError::ModulusTooLarge)
    );
    let signature = sign(b"dual use", &real.private);
    assert!(verify(b"dual use", &signature, &real.public));
}
