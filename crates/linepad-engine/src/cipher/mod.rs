//! Byte-rotation (Caesar) cipher over whole text blobs.
//!
//! Stateless and independent of the editing model: callers pass in the
//! flattened document and get the transformed blob back.

use uuid::Uuid;

const ALPHABET_LEN: i64 = 26;

/// Rotate every ASCII letter forward by `key` places within its case
///
/// Any other byte, including every byte of a multi-byte UTF-8 sequence,
/// passes through unchanged, so the output is always valid UTF-8.
pub fn encrypt(text: &str, key: i32) -> String {
    let shift = i64::from(key).rem_euclid(ALPHABET_LEN) as u8;
    text.chars().map(|c| rotate(c, shift)).collect()
}

/// Undo `encrypt` with the same key
pub fn decrypt(text: &str, key: i32) -> String {
    let shift = (-i64::from(key)).rem_euclid(ALPHABET_LEN) as u8;
    text.chars().map(|c| rotate(c, shift)).collect()
}

/// Random key in `1..=25`, never the identity rotation
pub fn generate_key() -> i32 {
    let random = Uuid::new_v4().as_u128();
    (random % (ALPHABET_LEN as u128 - 1)) as i32 + 1
}

fn rotate(c: char, shift: u8) -> char {
    let base = match c {
        'a'..='z' => b'a',
        'A'..='Z' => b'A',
        _ => return c,
    };
    let offset = (c as u8 - base + shift) % ALPHABET_LEN as u8;
    (base + offset) as char
}
