use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Marker used by the prefix template (`word3renamed.docx`)
pub const PREFIX_MARKER: &str = "renamed";

/// Marker used by the stem template (`renamed_word3_report.docx`)
pub const STEM_MARKER: &str = "renamed_";

/// File classification derived from the extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TypeTag {
    Word,
    Excel,
    Text,
    Image,
    File,
}

// Matched case-insensitively; anything else falls back to `File`.
const EXTENSION_TABLE: &[(&str, TypeTag)] = &[
    (".docx", TypeTag::Word),
    (".xlsx", TypeTag::Excel),
    (".txt", TypeTag::Text),
    (".png", TypeTag::Image),
];

impl TypeTag {
    pub fn from_extension(extension: &str) -> Self {
        EXTENSION_TABLE
            .iter()
            .find(|(ext, _)| ext.eq_ignore_ascii_case(extension))
            .map(|(_, tag)| *tag)
            .unwrap_or(TypeTag::File)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TypeTag::Word => "word",
            TypeTag::Excel => "excel",
            TypeTag::Text => "text",
            TypeTag::Image => "image",
            TypeTag::File => "file",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Layout of a renamed file name
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum NameTemplate {
    /// `<tag><n>renamed<ext>`, original stem dropped
    Prefix,
    /// `renamed_<tag><n>_<stem><ext>`
    #[default]
    Stem,
}

impl NameTemplate {
    pub fn marker(&self) -> &'static str {
        match self {
            NameTemplate::Prefix => PREFIX_MARKER,
            NameTemplate::Stem => STEM_MARKER,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            NameTemplate::Prefix => "<type><n>renamed<ext>",
            NameTemplate::Stem => "renamed_<type><n>_<stem><ext>",
        }
    }
}

/// Highest sequence number used per type within one directory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CounterTable {
    counters: HashMap<TypeTag, u32>,
}

impl CounterTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current counter for a type, 0 when none has been seen
    pub fn get(&self, tag: TypeTag) -> u32 {
        self.counters.get(&tag).copied().unwrap_or(0)
    }

    pub fn set(&mut self, tag: TypeTag, sequence: u32) {
        self.counters.insert(tag, sequence);
    }

    /// Raise the counter for `tag` to `sequence` if it is higher
    pub fn observe(&mut self, tag: TypeTag, sequence: u32) {
        let entry = self.counters.entry(tag).or_insert(0);
        *entry = (*entry).max(sequence);
    }

    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }

    pub fn len(&self) -> usize {
        self.counters.len()
    }
}
