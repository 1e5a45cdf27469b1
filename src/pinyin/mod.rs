//! Phonetic (pinyin) index table.
//!
//! The table occupies `[PINYIN_TABLE_OFFSET, lexicon_offset)`.  It opens
//! with the 4-byte marker `9D 01 00 00` and is followed by entries of
//!
//! ```text
//! index:u16  byte_len:u16  syllable:UTF-16LE[byte_len]
//! ```
//!
//! until the range is exhausted.  The range can end in bytes that are not
//! entries: fewer than four trailing bytes, an entry whose declared length
//! runs past the range, or an entry that is not valid UTF-16LE all mark the
//! start of padding.  Entries before that point are kept.

use std::collections::HashMap;
use tracing::{debug, warn};

use crate::cursor::ByteCursor;
use crate::error::{Result, ScelError};
use crate::header::PINYIN_TABLE_OFFSET;

pub const PINYIN_TABLE_MARKER: [u8; 4] = [0x9d, 0x01, 0x00, 0x00];

const ENTRY_HEADER_LEN: usize = 4;

/// Index → syllable lookup decoded once per file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PinyinTable {
    entries: HashMap<u16, String>,
}

impl PinyinTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert unless `index` is already present.  Returns whether the entry
    /// was kept.
    pub fn insert(&mut self, index: u16, syllable: String) -> bool {
        match self.entries.entry(index) {
            std::collections::hash_map::Entry::Occupied(_) => false,
            std::collections::hash_map::Entry::Vacant(slot) => {
                slot.insert(syllable);
                true
            }
        }
    }

    pub fn get(&self, index: u16) -> Option<&str> {
        self.entries.get(&index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(u16, String)> for PinyinTable {
    fn from_iter<I: IntoIterator<Item = (u16, String)>>(iter: I) -> Self {
        let mut table = PinyinTable::new();
        for (index, syllable) in iter {
            table.insert(index, syllable);
        }
        table
    }
}

/// Decode the phonetic table of `buf`, which ends where the lexical table
/// starts.
///
/// A marker mismatch is not an error: the table comes back empty and the
/// caller decides whether that is worth continuing with.
pub fn decode(buf: &[u8], lexicon_offset: usize) -> Result<PinyinTable> {
    let range = buf.get(PINYIN_TABLE_OFFSET..lexicon_offset).ok_or(ScelError::OutOfData {
        offset:    PINYIN_TABLE_OFFSET,
        needed:    lexicon_offset.saturating_sub(PINYIN_TABLE_OFFSET),
        available: buf.len().saturating_sub(PINYIN_TABLE_OFFSET),
    })?;
    let mut cursor = ByteCursor::with_origin(range, PINYIN_TABLE_OFFSET);
    let mut table = PinyinTable::new();

    let marker = cursor.read_bytes(PINYIN_TABLE_MARKER.len())?;
    if marker != PINYIN_TABLE_MARKER {
        warn!(marker = %hex::encode(marker), "unexpected phonetic table marker, skipping table");
        return Ok(table);
    }

    let mut duplicates = 0usize;
    while !cursor.at_end() {
        if cursor.remaining() < ENTRY_HEADER_LEN {
            debug!(trailing = cursor.remaining(), "phonetic table padding");
            break;
        }
        let entry_offset = cursor.offset();
        let index = cursor.read_u16()?;
        let byte_len = cursor.read_u16()? as usize;
        if byte_len > cursor.remaining() {
            warn!(
                offset = entry_offset,
                byte_len,
                remaining = cursor.remaining(),
                "phonetic entry overruns the table, treating the rest as padding"
            );
            break;
        }
        let syllable = match cursor.read_utf16_string(byte_len) {
            Ok(s) => s,
            Err(e) => {
                warn!(offset = entry_offset, index, error = %e, "undecodable phonetic entry, treating the rest as padding");
                break;
            }
        };
        if !table.insert(index, syllable) {
            duplicates += 1;
        }
    }

    debug!(entries = table.len(), duplicates, "decoded phonetic table");
    Ok(table)
}
