//! Lexical table: headwords grouped by shared pinyin.
//!
//! Each group is laid out as
//!
//! ```text
//! word_count:u16  pinyin_len:u16  pinyin_index:u16[pinyin_len / 2]
//! word_count × { word_len:u16  word:UTF-16LE[word_len]  ext:[u8; 12] }
//! ```
//!
//! `ext` holds `ext_len:u16` (10 in practice), `frequency:u16` and eight
//! reserved bytes.  Groups run back to back until end of file.

pub mod scanner;

use serde::Serialize;

pub use scanner::{scan, LexiconScan, ScanStop};

/// Size of the per-word extension block following each headword.
pub const WORD_EXT_LEN: usize = 12;

/// One (pronunciation, headword) pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct LexicalRecord {
    /// Space-separated syllables, e.g. `"ni hao"`.
    pub pinyin:    String,
    pub word:      String,
    /// Raw frequency field of the extension block.
    pub frequency: u16,
}

impl LexicalRecord {
    pub fn new(pinyin: impl Into<String>, word: impl Into<String>) -> Self {
        Self { pinyin: pinyin.into(), word: word.into(), frequency: 0 }
    }

    pub fn with_frequency(mut self, frequency: u16) -> Self {
        self.frequency = frequency;
        self
    }
}
