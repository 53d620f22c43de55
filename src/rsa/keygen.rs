// RSA Key Generation
// Implements RSA key pair generation (public and private keys)

use std::fmt;

use num_integer::Integer;
use num_traits::One;

use super::bigint::{from_hex, from_u64, mod_inverse, to_hex, RsaBigInt};
use super::config::GenerationConfig;
use super::error::{RsaError, RsaResult};
use super::primes::generate_prime_with;

/// Smallest modulus size for which both prime factors have at least 2 bits
pub const MIN_MODULUS_BITS: u64 = 6;

/// Bit length used when the conventional exponent cannot be used
const FALLBACK_EXPONENT_BITS: u64 = 16;

/// RSA Public Key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPublicKey {
    pub e: RsaBigInt,  // Public exponent
    pub n: RsaBigInt,  // Modulus
}

/// RSA Private Key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPrivateKey {
    pub d: RsaBigInt,  // Private exponent
    pub n: RsaBigInt,  // Modulus (same as public)
}

/// RSA Key Pair (both public and private keys)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaKeyPair {
    pub public_key: RsaPublicKey,
    pub private_key: RsaPrivateKey,
}

/// Hex form of a key pair: `public = (e, n)`, `private = (d, n)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPairHex {
    pub public: (String, String),
    pub private: (String, String),
}

impl RsaPublicKey {
    pub fn from_hex(e: &str, n: &str) -> RsaResult<Self> {
        Ok(Self {
            e: from_hex(e)?,
            n: from_hex(n)?,
        })
    }

    /// (e, n) as lowercase hex
    pub fn to_hex(&self) -> (String, String) {
        (to_hex(&self.e), to_hex(&self.n))
    }

    /// Get the bit length of the modulus
    pub fn bit_length(&self) -> u64 {
        self.n.bits()
    }

    /// Encrypt a message integer using this public key
    pub fn encrypt(&self, m: &RsaBigInt) -> RsaResult<RsaBigInt> {
        super::encrypt::encrypt(m, self)
    }
}

impl RsaPrivateKey {
    pub fn from_hex(d: &str, n: &str) -> RsaResult<Self> {
        Ok(Self {
            d: from_hex(d)?,
            n: from_hex(n)?,
        })
    }

    /// (d, n) as lowercase hex
    pub fn to_hex(&self) -> (String, String) {
        (to_hex(&self.d), to_hex(&self.n))
    }

    /// Get the bit length of the modulus
    pub fn bit_length(&self) -> u64 {
        self.n.bits()
    }

    /// Decrypt a ciphertext integer using this private key
    pub fn decrypt(&self, c: &RsaBigInt) -> RsaResult<RsaBigInt> {
        super::decrypt::decrypt(c, self)
    }
}

impl RsaKeyPair {
    /// Get the bit length of the key
    pub fn bit_length(&self) -> u64 {
        self.public_key.bit_length()
    }

    pub fn to_hex(&self) -> KeyPairHex {
        KeyPairHex {
            public: self.public_key.to_hex(),
            private: self.private_key.to_hex(),
        }
    }
}

impl fmt::Display for RsaPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(e={:x}, n={:x})", self.e, self.n)
    }
}

impl fmt::Display for RsaPrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(d={:x}, n={:x})", self.d, self.n)
    }
}

/// Generate RSA key pair whose modulus has exactly `bits` bits, using the
/// default configuration (16 Miller-Rabin rounds, e = 65537 when possible)
pub fn generate_keypair(bits: u64) -> RsaResult<RsaKeyPair> {
    generate_keypair_with(bits, &GenerationConfig::default())
}

/// Generate RSA key pair with an explicit configuration
pub fn generate_keypair_with(bits: u64, config: &GenerationConfig) -> RsaResult<RsaKeyPair> {
    if bits < MIN_MODULUS_BITS {
        return Err(RsaError::invalid(format!(
            "modulus bit length must be at least {}, got {}",
            MIN_MODULUS_BITS, bits
        )));
    }

    // Step 1: p, q and n = p * q in range
    let (p, q, n) = generate_pqn(bits, config)?;

    // Step 2: Compute φ(n) = (p-1)(q-1)
    let phi = (&p - 1u8) * (&q - 1u8);

    // Step 3: Public exponent coprime to φ(n)
    let e = choose_public_exponent(&phi, config)?;

    // Step 4: Compute d = e^(-1) mod φ(n)
    let d = mod_inverse(&e, &phi)?;

    Ok(RsaKeyPair {
        public_key: RsaPublicKey { e, n: n.clone() },
        private_key: RsaPrivateKey { d, n },
    })
}

/// Draw p and q until 2^(bits-1) - 1 < n < 2^bits.
///
/// The factor lengths always differ, so p != q.
fn generate_pqn(bits: u64, config: &GenerationConfig) -> RsaResult<(RsaBigInt, RsaBigInt, RsaBigInt)> {
    let p_bits = bits / 2 - 1;
    let q_bits = bits - p_bits;

    let upper = RsaBigInt::one() << bits;
    let lower = (RsaBigInt::one() << (bits - 1)) - 1u8;

    loop {
        let p = generate_prime_with(p_bits, config)?;
        let q = generate_prime_with(q_bits, config)?;
        let n = &p * &q;

        if lower < n && n < upper {
            return Ok((p, q, n));
        }
    }
}

/// Prefer the configured exponent; otherwise draw random primes shorter
/// than φ until one does not divide it.
fn choose_public_exponent(phi: &RsaBigInt, config: &GenerationConfig) -> RsaResult<RsaBigInt> {
    let preferred = from_u64(config.public_exponent);
    if preferred > RsaBigInt::one() && &preferred < phi && preferred.gcd(phi).is_one() {
        return Ok(preferred);
    }

    // φ >= 20 for any accepted modulus size, so this is at least 4
    let bits = FALLBACK_EXPONENT_BITS.min(phi.bits() - 1);
    let mut attempts = 0u64;

    loop {
        if let Some(max) = config.max_prime_attempts {
            if attempts >= max {
                return Err(RsaError::GenerationTimeout { bits, attempts });
            }
        }
        attempts += 1;

        let e = generate_prime_with(bits, config)?;
        if e.gcd(phi).is_one() {
            return Ok(e);
        }
    }
}
