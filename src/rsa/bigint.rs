// RSA Big Integer Operations
// Wrapper around num-bigint for RSA-specific operations

use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use super::error::{RsaError, RsaResult};

/// RSA Big Integer type alias
pub type RsaBigInt = BigUint;

/// Create a big integer from u64
pub fn from_u64(n: u64) -> RsaBigInt {
    RsaBigInt::from(n)
}

/// Create a big integer from bytes (big-endian)
pub fn from_bytes(bytes: &[u8]) -> RsaBigInt {
    RsaBigInt::from_bytes_be(bytes)
}

/// Convert big integer to its minimal big-endian bytes; zero has no bytes
pub fn to_bytes(n: &RsaBigInt) -> Vec<u8> {
    if n.is_zero() {
        return Vec::new();
    }
    n.to_bytes_be()
}

/// Parse lowercase or uppercase hex, with or without a `0x` prefix
pub fn from_hex(text: &str) -> RsaResult<RsaBigInt> {
    let text = text.trim();
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    RsaBigInt::parse_bytes(digits.as_bytes(), 16)
        .ok_or_else(|| RsaError::invalid(format!("not a hexadecimal integer: {:?}", text)))
}

/// Lowercase hex without prefix
pub fn to_hex(n: &RsaBigInt) -> String {
    n.to_str_radix(16)
}

pub fn from_decimal(text: &str) -> RsaResult<RsaBigInt> {
    let text = text.trim();
    RsaBigInt::parse_bytes(text.as_bytes(), 10)
        .ok_or_else(|| RsaError::invalid(format!("not a decimal integer: {:?}", text)))
}

pub fn to_decimal(n: &RsaBigInt) -> String {
    n.to_str_radix(10)
}

/// Modular exponentiation: base^exp mod modulus
/// Fails with `InvalidArgument` on a zero modulus
pub fn mod_pow(base: &RsaBigInt, exp: &RsaBigInt, modulus: &RsaBigInt) -> RsaResult<RsaBigInt> {
    if modulus.is_zero() {
        return Err(RsaError::invalid("modulus must be positive"));
    }
    Ok(pow_mod(base, exp, modulus))
}

/// Square-and-multiply, least significant exponent bit first.
/// `modulus` must be non-zero.
pub(crate) fn pow_mod(base: &RsaBigInt, exp: &RsaBigInt, modulus: &RsaBigInt) -> RsaBigInt {
    let mut result = RsaBigInt::one() % modulus;
    let mut base = base % modulus;

    for i in 0..exp.bits() {
        if exp.bit(i) {
            result = (&result * &base) % modulus;
        }
        base = (&base * &base) % modulus;
    }

    result
}

/// Extended Euclidean Algorithm
/// Returns (gcd, x, y) such that a*x + b*y = gcd = gcd(a, b), with gcd >= 0
pub fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    let (mut old_r, mut r) = (a.clone(), b.clone());
    let (mut old_x, mut x) = (BigInt::one(), BigInt::zero());
    let (mut old_y, mut y) = (BigInt::zero(), BigInt::one());

    while !r.is_zero() {
        let q = old_r.div_floor(&r);

        let next_r = &old_r - &q * &r;
        old_r = std::mem::replace(&mut r, next_r);

        let next_x = &old_x - &q * &x;
        old_x = std::mem::replace(&mut x, next_x);

        let next_y = &old_y - &q * &y;
        old_y = std::mem::replace(&mut y, next_y);
    }

    if old_r.is_negative() {
        (-old_r, -old_x, -old_y)
    } else {
        (old_r, old_x, old_y)
    }
}

/// Compute modular inverse: a^(-1) mod m, normalized into [0, m)
/// Fails if m is zero or gcd(a, m) != 1
pub fn mod_inverse(a: &RsaBigInt, m: &RsaBigInt) -> RsaResult<RsaBigInt> {
    if m.is_zero() {
        return Err(RsaError::invalid("modulus must be positive"));
    }

    let m_signed = BigInt::from_biguint(Sign::Plus, m.clone());
    let (gcd, x, _) = extended_gcd(&BigInt::from_biguint(Sign::Plus, a.clone()), &m_signed);

    if !gcd.is_one() {
        return Err(RsaError::invalid(format!(
            "{} has no inverse modulo {}: gcd is {}",
            a, m, gcd
        )));
    }

    // mod_floor of a positive modulus is never negative
    Ok(x.mod_floor(&m_signed).magnitude().clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(n: i64) -> BigInt {
        BigInt::from(n)
    }

    #[test]
    fn test_mod_pow() {
        let cases = [(2u64, 10u64, 1000u64), (3, 5, 13), (42, 11, 567), (3, 19, 98)];
        for (b, e, m) in cases {
            let expected = from_u64(b).pow(e as u32) % from_u64(m);
            let result = mod_pow(&from_u64(b), &from_u64(e), &from_u64(m)).unwrap();
            assert_eq!(result, expected, "{}^{} mod {}", b, e, m);
        }
    }

    #[test]
    fn test_mod_pow_edges() {
        // x^0 = 1, reduced by the modulus
        assert_eq!(mod_pow(&from_u64(9), &from_u64(0), &from_u64(7)).unwrap(), from_u64(1));
        assert_eq!(mod_pow(&from_u64(9), &from_u64(0), &from_u64(1)).unwrap(), from_u64(0));
        // base larger than the modulus
        assert_eq!(mod_pow(&from_u64(100), &from_u64(3), &from_u64(7)).unwrap(), from_u64(1));
        assert_eq!(mod_pow(&from_u64(0), &from_u64(5), &from_u64(7)).unwrap(), from_u64(0));
    }

    #[test]
    fn test_mod_pow_zero_modulus() {
        let result = mod_pow(&from_u64(3), &from_u64(5), &from_u64(0));
        assert!(matches!(result, Err(RsaError::InvalidArgument(_))));
    }

    #[test]
    fn test_mod_pow_matches_modpow() {
        let base = from_hex("123456789abcdef0123456789abcdef").unwrap();
        let exp = from_hex("10001").unwrap();
        let modulus = from_hex("200376b73967fad6d618371a07ab").unwrap();
        assert_eq!(mod_pow(&base, &exp, &modulus).unwrap(), base.modpow(&exp, &modulus));
    }

    #[test]
    fn test_extended_gcd() {
        let (g, x, y) = extended_gcd(&big(35), &big(12));
        assert_eq!(g, big(1));
        assert_eq!(big(35) * x + big(12) * y, big(1));

        let (g, x, y) = extended_gcd(&big(48), &big(18));
        assert_eq!(g, big(6));
        assert_eq!(big(48) * x + big(18) * y, big(6));

        let (g, x, y) = extended_gcd(&big(17), &big(0));
        assert_eq!((g, x, y), (big(17), big(1), big(0)));

        let (g, x, y) = extended_gcd(&big(13), &big(13));
        assert_eq!(g, big(13));
        assert_eq!(big(13) * x + big(13) * y, big(13));
    }

    #[test]
    fn test_extended_gcd_negative_inputs() {
        let (g, x, y) = extended_gcd(&big(-48), &big(18));
        assert_eq!(g, big(6));
        assert_eq!(big(-48) * x + big(18) * y, big(6));

        let (g, x, y) = extended_gcd(&big(-5), &big(0));
        assert_eq!(g, big(5));
        assert_eq!(big(-5) * x + big(0) * y, big(5));
    }

    #[test]
    fn test_mod_inverse() {
        let cases = [(5u64, 14u64, 3u64), (79, 3337, 2281), (7, 101, 29), (5, 18, 11), (67, 119, 16)];
        for (a, m, expected) in cases {
            assert_eq!(mod_inverse(&from_u64(a), &from_u64(m)).unwrap(), from_u64(expected));
        }
    }

    #[test]
    fn test_mod_inverse_product_is_one() {
        for (a, m) in [(67u64, 65537u64), (65537, 123123123131)] {
            let a = from_u64(a);
            let m = from_u64(m);
            let inv = mod_inverse(&a, &m).unwrap();
            assert!(inv < m);
            assert_eq!((a * inv) % m, from_u64(1));
        }
    }

    #[test]
    fn test_mod_inverse_not_coprime() {
        assert!(mod_inverse(&from_u64(6), &from_u64(9)).is_err());
        assert!(mod_inverse(&from_u64(3), &from_u64(0)).is_err());
    }

    #[test]
    fn test_radix_conversions() {
        assert_eq!(from_hex("10001").unwrap(), from_u64(65537));
        assert_eq!(from_hex("0xFF").unwrap(), from_u64(255));
        assert_eq!(to_hex(&from_u64(65537)), "10001");
        assert_eq!(from_decimal(" 20079 ").unwrap(), from_u64(20079));
        assert_eq!(to_decimal(&from_u64(20079)), "20079");
        assert!(from_hex("xyz").is_err());
        assert!(from_hex("").is_err());
        assert!(from_decimal("12a").is_err());
    }

    #[test]
    fn test_to_bytes_minimal() {
        assert!(to_bytes(&from_u64(0)).is_empty());
        assert_eq!(to_bytes(&from_u64(0x4e6f)), vec![0x4e, 0x6f]);
        assert_eq!(from_bytes(&[0x00, 0x4e, 0x6f]), from_u64(20079));
    }
}
