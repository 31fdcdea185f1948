//! Hill-style block cipher over the fixed 30-symbol alphabet.
//!
//! Purpose
//! - Encode text with an embedded length header, transform it block by
//!   block with an invertible key matrix mod 30, and decode back.
//!
//! Model
//! - The first two codes carry the plaintext length as `(len/30, len%30)`,
//!   bounding supported lengths at 899 characters. Padding to a whole
//!   number of blocks uses the space code and is stripped on decode via
//!   the header, so round-trips are exact.

pub mod alphabet;

pub use crate::modmat::derive_key;
pub use alphabet::{char_of, code_of, MODULUS, SPACE_CODE};

use std::fmt;

use nalgebra::{DMatrix, DVector};

use crate::func::SelfMap;
use crate::modmat::{inverse_mod, matvec_mod};

/// Longest encodable plaintext: two base-30 header digits.
pub const MAX_TEXT_LEN: usize = 899;

/// Errors surfaced by the cipher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// Plaintext longer than the length header can express.
    TextTooLong { len: usize },
    /// Encrypt/decrypt called before a key was set.
    KeyNotSet,
    /// Ciphertext length is not a multiple of the block size.
    InvalidLength { len: usize, block: usize },
    /// The active key failed inversion. Key derivation guarantees
    /// invertibility, so observing this means an internal invariant was
    /// violated, not a user mistake.
    KeyNotInvertible,
}

impl fmt::Display for CipherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CipherError::TextTooLong { len } => {
                write!(f, "text of {len} characters exceeds the {MAX_TEXT_LEN} limit")
            }
            CipherError::KeyNotSet => write!(f, "no key set"),
            CipherError::InvalidLength { len, block } => {
                write!(f, "ciphertext of {len} codes is not a multiple of block size {block}")
            }
            CipherError::KeyNotInvertible => write!(f, "active key is not invertible mod {MODULUS}"),
        }
    }
}

impl std::error::Error for CipherError {}

/// Encode `text` into codes: two header digits, one code per character,
/// space padding up to a multiple of `block`.
pub fn encode(text: &str, block: usize) -> Result<Vec<i64>, CipherError> {
    let len = text.chars().count();
    if block == 0 {
        return Err(CipherError::InvalidLength { len, block });
    }
    if len > MAX_TEXT_LEN {
        return Err(CipherError::TextTooLong { len });
    }
    let mut codes = Vec::with_capacity(2 + len + block);
    codes.push((len / MODULUS as usize) as i64);
    codes.push((len % MODULUS as usize) as i64);
    codes.extend(text.chars().map(code_of));
    while codes.len() % block != 0 {
        codes.push(SPACE_CODE);
    }
    Ok(codes)
}

/// Decode codes back to text, honoring the length header and ignoring
/// trailing padding. Fewer than two codes decode to the empty string.
pub fn decode(codes: &[i64]) -> String {
    if codes.len() < 2 {
        return String::new();
    }
    let high = codes[0].rem_euclid(MODULUS);
    let low = codes[1].rem_euclid(MODULUS);
    let len = (high * MODULUS + low) as usize;
    codes[2..].iter().take(len).map(|&c| char_of(c)).collect()
}

/// Encrypt `plain` with `key`: encode, multiply each block, map back to
/// symbols.
pub fn encrypt_text(plain: &str, key: &DMatrix<i64>, block: usize) -> Result<String, CipherError> {
    let codes = encode(plain, block)?;
    let out = apply_blocks(key, &codes, block);
    Ok(out.iter().map(|&c| char_of(c)).collect())
}

/// Decrypt `cipher` with `key`; the code sequence must already be a whole
/// number of blocks.
pub fn decrypt_text(cipher: &str, key: &DMatrix<i64>, block: usize) -> Result<String, CipherError> {
    let codes: Vec<i64> = cipher.chars().map(code_of).collect();
    if block == 0 || codes.len() % block != 0 {
        return Err(CipherError::InvalidLength {
            len: codes.len(),
            block,
        });
    }
    let inv = inverse_mod(key, MODULUS).map_err(|_| CipherError::KeyNotInvertible)?;
    let out = apply_blocks(&inv, &codes, block);
    Ok(decode(&out))
}

fn apply_blocks(key: &DMatrix<i64>, codes: &[i64], block: usize) -> Vec<i64> {
    let mut out = Vec::with_capacity(codes.len());
    for chunk in codes.chunks(block) {
        let v = DVector::from_column_slice(chunk);
        out.extend(matvec_mod(key, &v, MODULUS).iter().copied());
    }
    out
}

/// One active key at a time, derived fresh from each function that is set.
///
/// Failed operations leave the active key and block size untouched.
#[derive(Clone, Debug, Default)]
pub struct CipherEngine {
    block: usize,
    key: Option<DMatrix<i64>>,
}

impl CipherEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn block(&self) -> usize {
        self.block
    }

    pub fn key(&self) -> Option<&DMatrix<i64>> {
        self.key.as_ref()
    }

    /// Derive and install the key for `f`; the block size becomes `f.n()`.
    pub fn set_key(&mut self, f: &SelfMap) {
        self.block = f.n();
        self.key = Some(derive_key(f, MODULUS));
    }

    pub fn clear_key(&mut self) {
        self.block = 0;
        self.key = None;
    }

    pub fn encrypt(&self, plaintext: &str) -> Result<String, CipherError> {
        let key = self.key.as_ref().ok_or(CipherError::KeyNotSet)?;
        encrypt_text(plaintext, key, self.block)
    }

    /// Decrypt, first padding short ciphertext with trailing spaces up to
    /// a whole number of blocks.
    pub fn decrypt(&self, ciphertext: &str) -> Result<String, CipherError> {
        let key = self.key.as_ref().ok_or(CipherError::KeyNotSet)?;
        let mut text = ciphertext.to_owned();
        let mut len = text.chars().count();
        while self.block > 0 && len % self.block != 0 {
            text.push(' ');
            len += 1;
        }
        decrypt_text(&text, key, self.block)
    }
}
