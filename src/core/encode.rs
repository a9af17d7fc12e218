use crate::utils::error::{FetchError, Result};
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Escapes everything except unreserved characters and `/`.
const DOI_PATH: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'/');

pub fn encode_doi(doi: &str) -> String {
    utf8_percent_encode(doi, DOI_PATH).to_string()
}

pub fn decode_doi(encoded: &str) -> Result<String> {
    percent_decode_str(encoded)
        .decode_utf8()
        .map(|s| s.into_owned())
        .map_err(|e| FetchError::Decode {
            input: encoded.to_string(),
            reason: e.to_string(),
        })
}

/// Plain concatenation: `base` is expected to end where the DOI starts.
pub fn build_url(base: &str, doi: &str) -> String {
    format!("{}{}", base, encode_doi(doi))
}
