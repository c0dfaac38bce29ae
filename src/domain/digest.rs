use sha2::{Digest, Sha512};

/// Separator between segments of a gateway hash sequence.
pub const SEPARATOR: &str = "|";

/// SHA-512 of `input`, as lowercase hex.
pub fn sha512_hex(input: &str) -> String {
    let mut hasher = Sha512::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}

/// Joins segments into the pipe-delimited string the gateway hashes.
pub fn hash_sequence<'a>(segments: impl IntoIterator<Item = &'a str>) -> String {
    segments.into_iter().collect::<Vec<_>>().join(SEPARATOR)
}
