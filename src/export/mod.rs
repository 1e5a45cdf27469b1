//! Text output: per-file record lists and the merged Rime dictionary.
//!
//! Records are written as `word<TAB>pinyin`, one per line, with no trailing
//! newline.  The merged document prefixes every source's records with a
//! comment block naming the sources and the Rime YAML front matter.

use serde::{Deserialize, Serialize};
use std::io::{self, Write};

use crate::lexicon::LexicalRecord;

// ── RimeDictOptions ───────────────────────────────────────────────────────────

/// Front matter of the merged dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RimeDictOptions {
    pub name:                  String,
    pub version:               String,
    pub sort:                  String,
    pub use_preset_vocabulary: bool,
}

impl Default for RimeDictOptions {
    fn default() -> Self {
        Self {
            name:                  "luna_pinyin.sogou".into(),
            version:               "1.0".into(),
            sort:                  "by_weight".into(),
            use_preset_vocabulary: true,
        }
    }
}

impl RimeDictOptions {
    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    /// Output file name, e.g. `luna_pinyin.sogou.dict.yaml`.
    pub fn file_name(&self) -> String {
        format!("{}.dict.yaml", self.name)
    }
}

// ── Record lines ──────────────────────────────────────────────────────────────

pub fn record_line(record: &LexicalRecord) -> String {
    format!("{}\t{}", record.word, record.pinyin)
}

/// Write `records` as tab-separated lines joined by `\n`.
pub fn write_records<W: Write>(mut writer: W, records: &[LexicalRecord]) -> io::Result<()> {
    for (i, record) in records.iter().enumerate() {
        if i > 0 {
            writer.write_all(b"\n")?;
        }
        writer.write_all(record_line(record).as_bytes())?;
    }
    Ok(())
}

// ── RimeDict ──────────────────────────────────────────────────────────────────

/// Merged dictionary built from several decoded sources, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct RimeDict {
    pub options: RimeDictOptions,
    sources:     Vec<String>,
    records:     Vec<LexicalRecord>,
}

impl RimeDict {
    pub fn new(options: RimeDictOptions) -> Self {
        Self { options, sources: Vec::new(), records: Vec::new() }
    }

    /// Register a source by name (usually the file stem) with its records.
    pub fn add_source(&mut self, name: impl Into<String>, records: impl IntoIterator<Item = LexicalRecord>) {
        self.sources.push(name.into());
        self.records.extend(records);
    }

    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    pub fn records(&self) -> &[LexicalRecord] {
        &self.records
    }

    pub fn header(&self) -> String {
        let mut out = String::new();
        out.push_str("# Rime dictionary\n");
        out.push_str("# encoding: utf-8\n");
        out.push_str("#\n");
        out.push_str("# Sogou Pinyin Dict - 搜狗细胞词库\n");
        out.push_str("#\n");
        out.push_str("#   \n");
        out.push_str("#   https://pinyin.sogou.com/dict/\n");
        out.push_str("#\n");
        out.push_str("# 包括: \n");
        out.push_str("#\n");
        for source in &self.sources {
            out.push_str(&format!("# * {source}\n"));
        }
        out.push_str("#\n");
        out.push('\n');
        out.push_str("---\n");
        out.push_str(&format!("name: {}\n", self.options.name));
        out.push_str(&format!("version: \"{}\"\n", self.options.version));
        out.push_str(&format!("sort: {}\n", self.options.sort));
        out.push_str(&format!("use_preset_vocabulary: {}\n", self.options.use_preset_vocabulary));
        out.push_str("...\n");
        out
    }

    pub fn write<W: Write>(&self, mut writer: W) -> io::Result<()> {
        writer.write_all(self.header().as_bytes())?;
        if !self.records.is_empty() {
            writer.write_all(b"\n")?;
            write_records(&mut writer, &self.records)?;
        }
        Ok(())
    }
}
