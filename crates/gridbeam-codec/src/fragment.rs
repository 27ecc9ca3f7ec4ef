//! URL fragment pipeline
//!
//! A shared design travels as a URL fragment: a single format-version digit
//! followed by the deflate-compressed, URL-safe-base64 model bytes, with no
//! separator and no padding.

use std::io::{Read, Write};

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use flate2::Compression;
use flate2::read::DeflateDecoder;
use flate2::write::DeflateEncoder;
use gridbeam_core::Model;

use crate::error::FragmentError;
use crate::message::{decode_model, encode_model};

/// Current fragment format version digit
pub const FRAGMENT_VERSION: char = '1';

/// Encode a model into a shareable URL fragment
pub fn encode_fragment(model: &Model) -> Result<String, FragmentError> {
    let bytes = encode_model(model)?;

    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::best());
    encoder
        .write_all(&bytes)
        .map_err(FragmentError::Compression)?;
    let compressed = encoder.finish().map_err(FragmentError::Compression)?;

    let payload = URL_SAFE_NO_PAD.encode(&compressed);
    let mut fragment = String::with_capacity(payload.len() + 1);
    fragment.push(FRAGMENT_VERSION);
    fragment.push_str(&payload);
    Ok(fragment)
}

/// Decode a URL fragment back into a model.
///
/// Accepts the fragment with or without its leading `#`. Each pipeline
/// stage fails with its own [`FragmentError`] variant.
pub fn decode_fragment(fragment: &str) -> Result<Model, FragmentError> {
    let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
    let mut chars = fragment.chars();
    let version = chars.next().ok_or(FragmentError::Empty)?;
    if version != FRAGMENT_VERSION {
        return Err(FragmentError::UnexpectedVersion(version));
    }

    let compressed = URL_SAFE_NO_PAD.decode(chars.as_str())?;

    let mut bytes = Vec::new();
    DeflateDecoder::new(compressed.as_slice())
        .read_to_end(&mut bytes)
        .map_err(FragmentError::Decompression)?;

    Ok(decode_model(&bytes)?)
}
