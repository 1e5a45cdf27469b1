//! High-level decode entry points.
//!
//! ```no_run
//! let dict = scel::decode_file("网络流行新词.scel")?;
//! for record in dict.iter() {
//!     println!("{}\t{}", record.word, record.pinyin);
//! }
//! # Ok::<(), scel::ScelError>(())
//! ```
//!
//! Decoding is a pure function of the input bytes: no state is shared
//! between calls, so files can be decoded on as many threads as wanted.

use serde::Serialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

use crate::error::Result;
use crate::header::{self, DictInfo, FormatVariant};
use crate::lexicon::{self, LexicalRecord, ScanStop};
use crate::pinyin;

/// Everything recovered from one cell dictionary.
#[derive(Debug, Clone, Serialize)]
pub struct DecodedDictionary {
    pub variant:        FormatVariant,
    pub info:           DictInfo,
    /// Number of distinct entries in the pinyin table.
    pub pinyin_entries: usize,
    /// Number of lexical groups fully read.
    pub groups:         usize,
    pub stop:           ScanStop,
    /// Records in the order they appear in the file.
    pub records:        Vec<LexicalRecord>,
}

impl DecodedDictionary {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LexicalRecord> {
        self.records.iter()
    }

    pub fn into_records(self) -> Vec<LexicalRecord> {
        self.records
    }
}

impl<'a> IntoIterator for &'a DecodedDictionary {
    type Item = &'a LexicalRecord;
    type IntoIter = std::slice::Iter<'a, LexicalRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Decode an in-memory cell dictionary.
pub fn decode(buf: &[u8]) -> Result<DecodedDictionary> {
    let variant = header::detect(buf)?;
    let lexicon_offset = variant.lexicon_offset();

    let table = pinyin::decode(buf, lexicon_offset)?;
    if table.is_empty() {
        warn!("empty pinyin table, no records can be resolved");
    }
    let info = DictInfo::read(buf)?;

    let scan = lexicon::scan(buf, lexicon_offset, &table)?;
    debug!(title = %info.title, records = scan.records.len(), "decoded cell dictionary");

    Ok(DecodedDictionary {
        variant,
        info,
        pinyin_entries: table.len(),
        groups: scan.groups,
        stop: scan.stop,
        records: scan.records,
    })
}

/// Read `reader` to the end, then decode.
pub fn decode_reader<R: Read>(mut reader: R) -> Result<DecodedDictionary> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    decode(&buf)
}

/// Decode the cell dictionary at `path`.  The file is closed before
/// decoding starts.
pub fn decode_file(path: impl AsRef<Path>) -> Result<DecodedDictionary> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading cell dictionary");
    let buf = {
        let mut f = File::open(path)?;
        let mut buf = Vec::with_capacity(f.metadata().map(|m| m.len() as usize).unwrap_or(0));
        f.read_to_end(&mut buf)?;
        buf
    };
    decode(&buf)
}
