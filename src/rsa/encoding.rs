// Message Encoding
// UTF-8 text <-> big-endian integer

use super::bigint::{from_bytes, to_bytes, RsaBigInt};
use super::error::{RsaError, RsaResult};

/// Interpret the UTF-8 bytes of `text` as a big-endian unsigned integer.
///
/// Leading NUL characters carry no magnitude and do not survive `decode`.
pub fn encode(text: &str) -> RsaBigInt {
    from_bytes(text.as_bytes())
}

/// Turn an integer back into text via its minimal big-endian bytes
/// (`ceil(bits / 8)` of them).
pub fn decode(m: &RsaBigInt) -> RsaResult<String> {
    let bytes = to_bytes(m);
    String::from_utf8(bytes).map_err(|source| RsaError::Decode {
        bytes: source.as_bytes().to_vec(),
        source,
    })
}
