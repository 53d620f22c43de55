// Primality Testing and Prime Generation
// Miller-Rabin test and the random prime search built on it

use num_bigint::RandBigInt;
use num_integer::Integer;
use num_traits::One;
use rand::thread_rng;

use super::bigint::{from_u64, pow_mod, RsaBigInt};
use super::config::GenerationConfig;
use super::error::{RsaError, RsaResult};

/// Miller-Rabin primality test with `rounds` random witnesses.
///
/// Returns true if n is probably prime. A composite passes with probability
/// at most 4^-rounds. Witnesses are drawn from `thread_rng`, which is a CSPRNG.
pub fn is_probable_prime(n: &RsaBigInt, rounds: u32) -> bool {
    let two = from_u64(2);
    if n < &from_u64(3) || n.is_even() {
        return n == &two;
    }

    let one = RsaBigInt::one();
    let n_minus_one = n - 1u8;

    // n - 1 = u * 2^k with u odd
    let k = n_minus_one.trailing_zeros().unwrap_or(0);
    let u = &n_minus_one >> k;

    let mut rng = thread_rng();

    for _ in 0..rounds {
        // a in [2, n)
        let a = rng.gen_biguint_range(&two, n);
        let mut v = pow_mod(&a, &u, n);
        if v == one {
            continue;
        }

        let mut i = 0;
        while i < k {
            if v == n_minus_one {
                break;
            }
            v = (&v * &v) % n;
            i += 1;
        }

        // Either a^(n-1) != 1, or 1 has a square root other than +-1
        if i == k {
            return false;
        }
    }

    true
}

/// Generate a random prime of exactly `bits` bits with the default configuration
pub fn generate_prime(bits: u64) -> RsaResult<RsaBigInt> {
    generate_prime_with(bits, &GenerationConfig::default())
}

/// Generate a random prime of exactly `bits` bits (top and bottom bits forced).
///
/// Fails with `GenerationTimeout` once `config.max_prime_attempts` candidates
/// have been rejected.
pub fn generate_prime_with(bits: u64, config: &GenerationConfig) -> RsaResult<RsaBigInt> {
    if bits < 2 {
        return Err(RsaError::invalid(format!(
            "prime bit length must be at least 2, got {}",
            bits
        )));
    }
    if config.miller_rabin_rounds == 0 {
        return Err(RsaError::invalid("Miller-Rabin needs at least one round"));
    }

    let mut rng = thread_rng();
    let mut attempts = 0u64;

    loop {
        if let Some(max) = config.max_prime_attempts {
            if attempts >= max {
                return Err(RsaError::GenerationTimeout { bits, attempts });
            }
        }
        attempts += 1;

        let mut candidate = rng.gen_biguint(bits);
        candidate.set_bit(bits - 1, true);
        candidate.set_bit(0, true);

        if is_probable_prime(&candidate, config.miller_rabin_rounds) {
            return Ok(candidate);
        }
    }
}
