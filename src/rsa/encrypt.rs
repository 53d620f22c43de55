// RSA Encryption Implementation
// Textbook RSA: c = m^e mod n, no padding

use super::bigint::{from_decimal, pow_mod, to_hex, RsaBigInt};
use super::error::{RsaError, RsaResult};
use super::keygen::RsaPublicKey;

/// Encrypt a message integer using RSA public key.
///
/// Rejects `m >= n` before doing any arithmetic; such a message would wrap
/// around the modulus and could not be recovered.
pub fn encrypt(m: &RsaBigInt, public_key: &RsaPublicKey) -> RsaResult<RsaBigInt> {
    if &public_key.n <= m {
        return Err(RsaError::MessageTooLarge {
            message_bits: m.bits(),
            modulus_bits: public_key.bit_length(),
        });
    }

    // n > m >= 0, so the modulus is non-zero here
    Ok(pow_mod(m, &public_key.e, &public_key.n))
}

/// Encrypt a decimal message integer; returns the ciphertext as hex
pub fn encrypt_str(message: &str, public_key: &RsaPublicKey) -> RsaResult<String> {
    let m = from_decimal(message)?;
    let c = encrypt(&m, public_key)?;
    Ok(to_hex(&c))
}
