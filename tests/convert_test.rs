mod common;

use common::{sample, Group};
use scel::batch::{collect_inputs, decode_files};
use scel::export::{write_records, RimeDict, RimeDictOptions};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_convert_directory_skips_bad_files() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("a_words.scel"),
        sample().group(Group::new(&[1, 2], &["你好"])).build(),
    )
    .unwrap();
    fs::write(
        dir.path().join("b_words.scel"),
        sample().variant(0x45).group(Group::new(&[3, 4], &["世界", "视界"])).build(),
    )
    .unwrap();
    fs::write(dir.path().join("c_broken.scel"), b"garbage").unwrap();

    let paths = collect_inputs(&[dir.path().to_path_buf()]).unwrap();
    assert_eq!(paths.len(), 3);

    let mut merged = RimeDict::new(RimeDictOptions::default());
    let mut per_file = Vec::new();
    for outcome in decode_files(&paths) {
        let stem = outcome.stem();
        if let Ok(dict) = outcome.result {
            let mut text = Vec::new();
            write_records(&mut text, &dict.records).unwrap();
            per_file.push((stem.clone(), String::from_utf8(text).unwrap()));
            merged.add_source(stem, dict.into_records());
        }
    }

    assert_eq!(
        per_file,
        vec![
            ("a_words".to_string(), "你好\tni hao".to_string()),
            ("b_words".to_string(), "世界\tshi jie\n视界\tshi jie".to_string()),
        ]
    );
    assert_eq!(merged.sources(), ["a_words".to_string(), "b_words".to_string()]);

    let mut doc = Vec::new();
    merged.write(&mut doc).unwrap();
    let doc = String::from_utf8(doc).unwrap();
    assert!(doc.contains("# * a_words\n# * b_words\n"));
    assert!(doc.ends_with("...\n\n你好\tni hao\n世界\tshi jie\n视界\tshi jie"));
}
