// nbt-perso/src/ndef/uri.rs

use crate::ndef::record::{NdefRecord, TNF_WELL_KNOWN};

/// RTD-URI abbreviation table, longest prefixes first so `http://www.`
/// wins over `http://`.
const URI_PREFIXES: &[(u8, &str)] = &[
    (0x02, "https://www."),
    (0x01, "http://www."),
    (0x04, "https://"),
    (0x03, "http://"),
    (0x05, "tel:"),
    (0x06, "mailto:"),
];

/// Build a well-known URI record, abbreviating the scheme per the RTD-URI
/// identifier table. Unknown schemes get identifier 0x00 (no
/// abbreviation).
pub fn uri_record(uri: &str) -> NdefRecord {
    let (code, rest) = URI_PREFIXES
        .iter()
        .find_map(|(code, prefix)| uri.strip_prefix(prefix).map(|rest| (*code, rest)))
        .unwrap_or((0x00, uri));

    let mut payload = Vec::with_capacity(rest.len() + 1);
    payload.push(code);
    payload.extend_from_slice(rest.as_bytes());
    NdefRecord::new(TNF_WELL_KNOWN, b"U".to_vec(), payload)
}
