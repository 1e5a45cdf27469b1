pub mod error;
pub mod cursor;
pub mod header;
pub mod pinyin;
pub mod lexicon;
pub mod decoder;
pub mod export;
pub mod batch;

pub use error::{Result, ScelError};
pub use header::{DictInfo, FormatVariant};
pub use pinyin::PinyinTable;
pub use lexicon::{LexicalRecord, ScanStop};
pub use decoder::{decode, decode_file, decode_reader, DecodedDictionary};
pub use export::{RimeDict, RimeDictOptions};
