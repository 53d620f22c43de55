// RSA Pipeline
// encode -> encrypt -> decrypt -> decode, keeping every intermediate value

use super::bigint::{from_decimal, to_decimal};
use super::decrypt::decrypt_str;
use super::encoding::{decode, encode};
use super::encrypt::encrypt_str;
use super::error::RsaResult;
use super::keygen::RsaKeyPair;

/// Intermediate values of one pipeline run, in display form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOutputs {
    /// Encoded plaintext, decimal
    pub message_as_number: String,
    /// Ciphertext, hex
    pub encrypted_message: String,
    /// Decrypted plaintext integer, decimal
    pub decrypted_message: String,
}

/// Run a message through encryption and decryption under `keypair`.
///
/// Returns the recovered text together with the intermediate values.
pub fn rsa_pipeline(message: &str, keypair: &RsaKeyPair) -> RsaResult<(String, PipelineOutputs)> {
    let message_as_number = to_decimal(&encode(message));
    let encrypted_message = encrypt_str(&message_as_number, &keypair.public_key)?;
    let decrypted_message = decrypt_str(&encrypted_message, &keypair.private_key)?;
    let text = decode(&from_decimal(&decrypted_message)?)?;

    Ok((
        text,
        PipelineOutputs {
            message_as_number,
            encrypted_message,
            decrypted_message,
        },
    ))
}
