//! Forward scanner over the lexical table.
//!
//! # Stop conditions
//!
//! | Condition | Outcome |
//! |-----------|---------|
//! | cursor lands exactly on end of file | `ScanStop::EndOfFile` |
//! | a pinyin index is missing from the table | `ScanStop::UnresolvedIndex`, records so far are kept |
//! | a group's declared lengths run past end of file | `ScelError::TruncatedLexicalTable` |
//! | odd pinyin index byte length | `ScelError::OddPhoneticLength` |
//!
//! Some published dictionaries end their lexical table early and rely on
//! the unresolved-index stop, so it must stay a soft stop.

use byteorder::{ByteOrder, LittleEndian};
use serde::Serialize;
use tracing::{debug, trace, warn};

use super::{LexicalRecord, WORD_EXT_LEN};
use crate::cursor::ByteCursor;
use crate::error::{Result, ScelError};
use crate::pinyin::PinyinTable;

/// Why the scan ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScanStop {
    /// The last group ended exactly at end of file.
    EndOfFile,
    /// The group at `offset` referenced `index`, which the pinyin table
    /// does not contain.
    UnresolvedIndex { offset: usize, index: u16 },
}

/// Result of [`scan`].
#[derive(Debug, Clone)]
pub struct LexiconScan {
    pub records: Vec<LexicalRecord>,
    /// Number of groups fully consumed.
    pub groups:  usize,
    pub stop:    ScanStop,
}

enum Group {
    Done,
    Unresolved(u16),
}

/// Scan every group from `lexicon_offset` to end of `buf`.
pub fn scan(buf: &[u8], lexicon_offset: usize, table: &PinyinTable) -> Result<LexiconScan> {
    if lexicon_offset > buf.len() {
        return Err(ScelError::TruncatedLexicalTable { offset: lexicon_offset });
    }
    let mut cursor = ByteCursor::new(buf);
    cursor.seek(lexicon_offset);

    let mut records = Vec::new();
    let mut groups = 0usize;
    let mut stop = ScanStop::EndOfFile;

    while !cursor.at_end() {
        let offset = cursor.offset();
        match read_group(&mut cursor, table, &mut records).map_err(|e| truncated(e, offset))? {
            Group::Done => groups += 1,
            Group::Unresolved(index) => {
                warn!(offset, index, records = records.len(), "unresolved pinyin index, ending lexical table");
                stop = ScanStop::UnresolvedIndex { offset, index };
                break;
            }
        }
    }

    debug!(groups, records = records.len(), ?stop, "scanned lexical table");
    Ok(LexiconScan { records, groups, stop })
}

fn read_group(
    cursor:  &mut ByteCursor<'_>,
    table:   &PinyinTable,
    records: &mut Vec<LexicalRecord>,
) -> Result<Group> {
    let offset = cursor.offset();
    let word_count = cursor.read_u16()?;
    let pinyin_len = cursor.read_u16()?;
    if pinyin_len % 2 != 0 {
        return Err(ScelError::OddPhoneticLength { offset, length: pinyin_len });
    }

    let mut syllables = Vec::with_capacity(pinyin_len as usize / 2);
    for _ in 0..pinyin_len / 2 {
        let index = cursor.read_u16()?;
        match table.get(index) {
            Some(s) => syllables.push(s),
            None => return Ok(Group::Unresolved(index)),
        }
    }
    let pinyin = syllables.join(" ");
    trace!(offset, word_count, %pinyin, "lexical group");

    for _ in 0..word_count {
        let word_len = cursor.read_u16()? as usize;
        let word = cursor.read_utf16_string(word_len)?;
        let ext = cursor.read_bytes(WORD_EXT_LEN)?;
        let frequency = LittleEndian::read_u16(&ext[2..4]);
        records.push(LexicalRecord { pinyin: pinyin.clone(), word, frequency });
    }
    Ok(Group::Done)
}

// Running out of bytes inside a group means the table is cut short.
fn truncated(err: ScelError, offset: usize) -> ScelError {
    match err {
        ScelError::OutOfData { .. } => ScelError::TruncatedLexicalTable { offset },
        other => other,
    }
}
