//! Cell dictionary header: magic check, format variant and text metadata.
//!
//! # Layout
//!
//! | Offset | Size | Field |
//! |--------|------|-------|
//! | 0x0000 | 12 | magic (`40 15 00 00 xx 43 53 01 01 00 00 00`) |
//! | 0x0004 | 1  | variant byte (the `xx` above) |
//! | 0x0130 | 0x208 | title, UTF-16LE, NUL padded |
//! | 0x0338 | 0x208 | category |
//! | 0x0540 | 0x800 | description |
//! | 0x0D40 | 0x800 | sample words |
//! | 0x1540 | ..   | phonetic table (see `pinyin`) |
//!
//! The variant byte sits inside the magic signature, so the signature is
//! compared with that one position masked out.

use byteorder::{ByteOrder, LittleEndian};
use serde::Serialize;
use std::ops::Range;
use tracing::debug;

use crate::cursor::ByteCursor;
use crate::error::{Result, ScelError};

pub const MAGIC: [u8; 12] = [0x40, 0x15, 0x00, 0x00, 0x44, 0x43, 0x53, 0x01, 0x01, 0x00, 0x00, 0x00];
pub const MAGIC_LEN: usize = MAGIC.len();
pub const VARIANT_OFFSET: usize = 0x04;

/// Absolute offset of the phonetic-table marker.
pub const PINYIN_TABLE_OFFSET: usize = 0x1540;

const TITLE_RANGE:       Range<usize> = 0x130..0x338;
const CATEGORY_RANGE:    Range<usize> = 0x338..0x540;
const DESCRIPTION_RANGE: Range<usize> = 0x540..0xd40;
const SAMPLES_RANGE:     Range<usize> = 0xd40..PINYIN_TABLE_OFFSET;

/// The two known header layouts.  They differ only in where the lexical
/// table begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FormatVariant {
    /// Variant byte `0x44`; lexical table at `0x2628`.
    V44,
    /// Variant byte `0x45`; lexical table at `0x26c4`.
    V45,
}

impl FormatVariant {
    pub fn from_byte(b: u8) -> Result<Self> {
        match b {
            0x44 => Ok(FormatVariant::V44),
            0x45 => Ok(FormatVariant::V45),
            other => Err(ScelError::UnsupportedVariant(other)),
        }
    }

    pub fn as_byte(self) -> u8 {
        match self {
            FormatVariant::V44 => 0x44,
            FormatVariant::V45 => 0x45,
        }
    }

    /// Absolute offset of the first lexical group.
    pub fn lexicon_offset(self) -> usize {
        match self {
            FormatVariant::V44 => 0x2628,
            FormatVariant::V45 => 0x26c4,
        }
    }
}

/// Validate the magic signature and resolve the format variant.
pub fn detect(buf: &[u8]) -> Result<FormatVariant> {
    let mut cursor = ByteCursor::new(buf);
    let magic = cursor.read_bytes(MAGIC_LEN).map_err(|_| ScelError::NotACellDictionary {
        found: hex::encode(buf),
    })?;

    let matches = magic
        .iter()
        .zip(MAGIC.iter())
        .enumerate()
        .all(|(i, (got, want))| i == VARIANT_OFFSET || got == want);
    if !matches {
        return Err(ScelError::NotACellDictionary { found: hex::encode(magic) });
    }

    let variant = FormatVariant::from_byte(magic[VARIANT_OFFSET])?;
    debug!(?variant, lexicon_offset = variant.lexicon_offset(), "detected cell dictionary");
    Ok(variant)
}

/// Descriptive text stored in the header block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DictInfo {
    pub title:       String,
    pub category:    String,
    pub description: String,
    pub samples:     String,
}

impl DictInfo {
    pub fn read(buf: &[u8]) -> Result<Self> {
        Ok(Self {
            title:       read_padded_text(buf, TITLE_RANGE)?,
            category:    read_padded_text(buf, CATEGORY_RANGE)?,
            description: read_padded_text(buf, DESCRIPTION_RANGE)?,
            samples:     read_padded_text(buf, SAMPLES_RANGE)?,
        })
    }
}

// Header text is informational only, so bad surrogates become U+FFFD
// instead of failing the whole file.
fn read_padded_text(buf: &[u8], range: Range<usize>) -> Result<String> {
    let mut cursor = ByteCursor::new(buf);
    cursor.seek(range.start);
    let bytes = cursor.read_bytes(range.len())?;
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(LittleEndian::read_u16)
        .take_while(|&u| u != 0)
        .collect();
    Ok(String::from_utf16_lossy(&units))
}
