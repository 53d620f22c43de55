//! Textbook RSA built on `num-bigint`: Miller-Rabin prime generation, key
//! generation and an unpadded text encrypt/decrypt pipeline.
//!
//! Not hardened: no padding and no constant-time arithmetic.

pub mod rsa;
