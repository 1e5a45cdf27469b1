use std::io;
use thiserror::Error;

/// Every fatal condition a cell-dictionary decode can surface.
///
/// The soft conditions (phonetic-table marker mismatch, unresolvable
/// phonetic index in the lexical table) are not errors; they shorten the
/// result instead and are reported through `tracing`.
#[derive(Error, Debug)]
pub enum ScelError {
    #[error("Not a cell dictionary (magic bytes {found})")]
    NotACellDictionary { found: String },
    #[error("Unsupported format variant: {0:#04x}")]
    UnsupportedVariant(u8),
    #[error("Out of data at offset {offset:#x}: needed {needed} bytes, {available} available")]
    OutOfData { offset: usize, needed: usize, available: usize },
    #[error("Invalid UTF-16LE text at offset {offset:#x}")]
    InvalidEncoding { offset: usize },
    #[error("Lexical table truncated in the group starting at offset {offset:#x}")]
    TruncatedLexicalTable { offset: usize },
    #[error("Odd phonetic index length {length} in the group starting at offset {offset:#x}")]
    OddPhoneticLength { offset: usize, length: u16 },
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, ScelError>;
