//! Builder for synthetic cell dictionaries.
#![allow(dead_code)]

pub const MAGIC: [u8; 12] = [0x40, 0x15, 0x00, 0x00, 0x44, 0x43, 0x53, 0x01, 0x01, 0x00, 0x00, 0x00];
pub const PINYIN_MARKER: [u8; 4] = [0x9d, 0x01, 0x00, 0x00];
pub const PINYIN_OFFSET: usize = 0x1540;
pub const TITLE_OFFSET: usize = 0x130;

pub fn utf16(s: &str) -> Vec<u8> {
    s.encode_utf16().flat_map(|u| u.to_le_bytes()).collect()
}

/// One lexical group: pinyin indices plus `(word, frequency)` homophones.
#[derive(Debug, Clone)]
pub struct Group {
    pub indices: Vec<u16>,
    pub words:   Vec<(String, u16)>,
}

impl Group {
    pub fn new(indices: &[u16], words: &[&str]) -> Self {
        Self {
            indices: indices.to_vec(),
            words:   words.iter().map(|w| (w.to_string(), 0)).collect(),
        }
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&(self.words.len() as u16).to_le_bytes());
        out.extend_from_slice(&((self.indices.len() * 2) as u16).to_le_bytes());
        for i in &self.indices {
            out.extend_from_slice(&i.to_le_bytes());
        }
        for (word, freq) in &self.words {
            let text = utf16(word);
            out.extend_from_slice(&(text.len() as u16).to_le_bytes());
            out.extend(text);
            out.extend_from_slice(&10u16.to_le_bytes());
            out.extend_from_slice(&freq.to_le_bytes());
            out.extend_from_slice(&[0u8; 8]);
        }
        out
    }
}

#[derive(Debug, Clone)]
pub struct ScelBuilder {
    pub variant: u8,
    pub title:   String,
    pub marker:  [u8; 4],
    pub pinyin:  Vec<(u16, String)>,
    pub groups:  Vec<Group>,
}

impl Default for ScelBuilder {
    fn default() -> Self {
        Self {
            variant: 0x44,
            title:   String::new(),
            marker:  PINYIN_MARKER,
            pinyin:  Vec::new(),
            groups:  Vec::new(),
        }
    }
}

impl ScelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variant(mut self, variant: u8) -> Self {
        self.variant = variant;
        self
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn marker(mut self, marker: [u8; 4]) -> Self {
        self.marker = marker;
        self
    }

    pub fn pinyin(mut self, index: u16, syllable: &str) -> Self {
        self.pinyin.push((index, syllable.to_string()));
        self
    }

    pub fn group(mut self, group: Group) -> Self {
        self.groups.push(group);
        self
    }

    pub fn lexicon_offset(&self) -> usize {
        match self.variant {
            0x45 => 0x26c4,
            _ => 0x2628,
        }
    }

    pub fn build(&self) -> Vec<u8> {
        let mut buf = vec![0u8; PINYIN_OFFSET];
        buf[..12].copy_from_slice(&MAGIC);
        buf[4] = self.variant;
        let title = utf16(&self.title);
        buf[TITLE_OFFSET..TITLE_OFFSET + title.len()].copy_from_slice(&title);

        buf.extend_from_slice(&self.marker);
        for (index, syllable) in &self.pinyin {
            let text = utf16(syllable);
            buf.extend_from_slice(&index.to_le_bytes());
            buf.extend_from_slice(&(text.len() as u16).to_le_bytes());
            buf.extend(text);
        }
        let base = self.lexicon_offset();
        assert!(buf.len() <= base, "pinyin table does not fit before the lexicon");
        buf.resize(base, 0);

        for group in &self.groups {
            buf.extend(group.encode());
        }
        buf
    }
}

/// A small dictionary with a handful of syllables.
pub fn sample() -> ScelBuilder {
    ScelBuilder::new()
        .title("测试词库")
        .pinyin(0, "a")
        .pinyin(1, "ni")
        .pinyin(2, "hao")
        .pinyin(3, "shi")
        .pinyin(4, "jie")
        .pinyin(5, "zuo")
}
