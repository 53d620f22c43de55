// RSA Module - Main module file
// Exports all RSA-related functionality

pub mod bigint;
pub mod config;
pub mod decrypt;
pub mod encoding;
pub mod encrypt;
pub mod error;
pub mod keygen;
pub mod pipeline;
pub mod primes;

pub use bigint::{extended_gcd, mod_inverse, mod_pow, RsaBigInt};
pub use config::GenerationConfig;
pub use decrypt::{decrypt, decrypt_str};
pub use encoding::{decode, encode};
pub use encrypt::{encrypt, encrypt_str};
pub use error::{RsaError, RsaResult};
pub use keygen::{generate_keypair, generate_keypair_with, KeyPairHex, RsaKeyPair, RsaPrivateKey, RsaPublicKey};
pub use pipeline::{rsa_pipeline, PipelineOutputs};
pub use primes::{generate_prime, generate_prime_with, is_probable_prime};
