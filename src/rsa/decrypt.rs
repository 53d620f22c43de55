// RSA Decryption Implementation
// Textbook RSA: m = c^d mod n

use super::bigint::{from_hex, mod_pow, to_decimal, RsaBigInt};
use super::error::RsaResult;
use super::keygen::RsaPrivateKey;

/// Decrypt a ciphertext integer using RSA private key.
///
/// Only fails for a zero modulus, which no generated key has.
pub fn decrypt(c: &RsaBigInt, private_key: &RsaPrivateKey) -> RsaResult<RsaBigInt> {
    mod_pow(c, &private_key.d, &private_key.n)
}

/// Decrypt a hex ciphertext; returns the plaintext integer in decimal
pub fn decrypt_str(ciphertext: &str, private_key: &RsaPrivateKey) -> RsaResult<String> {
    let c = from_hex(ciphertext)?;
    let m = decrypt(&c, private_key)?;
    Ok(to_decimal(&m))
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::bigint::from_u64;
    use super::super::error::RsaError;
    use super::super::keygen::generate_keypair;

    fn small_key() -> RsaPrivateKey {
        // d = 17^-1 mod 3120
        RsaPrivateKey {
            d: from_u64(2753),
            n: from_u64(3233),
        }
    }

    #[test]
    fn test_decrypt_textbook() {
        assert_eq!(decrypt(&from_u64(2790), &small_key()).unwrap(), from_u64(65));
    }

    #[test]
    fn test_decrypt_str() {
        assert_eq!(decrypt_str("ae6", &small_key()).unwrap(), "65");
        assert_eq!(decrypt_str("0xAE6", &small_key()).unwrap(), "65");
    }

    #[test]
    fn test_decrypt_str_rejects_garbage() {
        assert!(matches!(
            decrypt_str("not hex", &small_key()),
            Err(RsaError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_roundtrip_generated_key() {
        let keypair = generate_keypair(256).unwrap();
        for m in [0u64, 1, 2, 42, 20079, u64::MAX] {
            let m = from_u64(m);
            let c = keypair.public_key.encrypt(&m).unwrap();
            assert_eq!(keypair.private_key.decrypt(&c).unwrap(), m);
        }
    }

    #[test]
    fn test_decrypt_wrong_key() {
        let keypair1 = generate_keypair(128).unwrap();
        let keypair2 = generate_keypair(128).unwrap();

        let m = from_u64(0x5465_7374);
        let c = keypair1.public_key.encrypt(&m).unwrap();

        // Textbook RSA has no integrity check: a wrong key yields a different number
        let recovered = decrypt(&c, &keypair2.private_key).unwrap();
        assert_ne!(recovered, m);
    }
}
