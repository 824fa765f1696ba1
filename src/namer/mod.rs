mod types;

pub use types::*;

use once_cell::sync::Lazy;
use regex::Regex;

// Prefix template: <tag><sequence>renamed<extension>
// Example: "word3renamed.docx"
static PREFIX_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([a-z]+)([0-9]+)renamed(.*)$").unwrap());

// Stem template: renamed_<tag><sequence>_<stem><extension>
// Example: "renamed_word3_report.docx"
static STEM_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^renamed_([a-z]+)([0-9]+)_(.*)$").unwrap());

/// Everything from the last `.` (inclusive), or an empty string
pub fn extension_of(filename: &str) -> &str {
    match filename.rfind('.') {
        Some(idx) => &filename[idx..],
        None => "",
    }
}

pub fn name_without_extension(filename: &str) -> &str {
    let extension = extension_of(filename);
    &filename[..filename.len() - extension.len()]
}

pub fn classify(filename: &str) -> TypeTag {
    TypeTag::from_extension(extension_of(filename))
}

/// New name computed for an unrenamed file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedName {
    pub tag: TypeTag,
    pub sequence: u32,
    pub name: String,
}

/// Builds and parses renamed file names for one template
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Namer {
    template: NameTemplate,
}

impl Namer {
    pub fn new(template: NameTemplate) -> Self {
        Self { template }
    }

    /// Whether the name carries the marker anywhere.
    ///
    /// This is a substring test: an original file whose name happens to
    /// contain the marker is treated as already renamed and left alone.
    pub fn is_renamed(&self, filename: &str) -> bool {
        filename.contains(self.template.marker())
    }

    /// Parse the sequence number out of an already-renamed file name.
    ///
    /// Returns `None` unless the whole name matches the template for `tag`.
    pub fn recover_counter(&self, filename: &str, tag: TypeTag) -> Option<u32> {
        match self.template {
            NameTemplate::Prefix => {
                let captures = PREFIX_REGEX.captures(filename)?;
                if captures.get(1)?.as_str() != tag.as_str() {
                    return None;
                }
                if captures.get(3)?.as_str() != extension_of(filename) {
                    return None;
                }
                captures.get(2)?.as_str().parse().ok()
            }
            NameTemplate::Stem => {
                let captures = STEM_REGEX.captures(filename)?;
                if captures.get(1)?.as_str() != tag.as_str() {
                    return None;
                }
                captures.get(2)?.as_str().parse().ok()
            }
        }
    }

    /// Counter for `tag` plus one; the table is left untouched.
    ///
    /// `None` once the counter sits at `u32::MAX`.
    pub fn next_sequence(&self, tag: TypeTag, counters: &CounterTable) -> Option<u32> {
        counters.get(tag).checked_add(1)
    }

    pub fn format_renamed_name(
        &self,
        tag: TypeTag,
        sequence: u32,
        stem: &str,
        extension: &str,
    ) -> String {
        match self.template {
            NameTemplate::Prefix => format!("{}{}renamed{}", tag, sequence, extension),
            NameTemplate::Stem => format!("renamed_{}{}_{}{}", tag, sequence, stem, extension),
        }
    }

    /// Classify `filename` and compute its next name against `counters`.
    ///
    /// `None` when the type's sequence numbers are exhausted.
    pub fn plan(&self, filename: &str, counters: &CounterTable) -> Option<PlannedName> {
        let extension = extension_of(filename);
        let tag = TypeTag::from_extension(extension);
        let sequence = self.next_sequence(tag, counters)?;
        let name = self.format_renamed_name(
            tag,
            sequence,
            name_without_extension(filename),
            extension,
        );

        Some(PlannedName {
            tag,
            sequence,
            name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============ Name Helpers ============

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("report.docx"), ".docx");
        assert_eq!(extension_of("archive.tar.gz"), ".gz");
        assert_eq!(extension_of("Makefile"), "");
        assert_eq!(extension_of(".bashrc"), ".bashrc");
        assert_eq!(extension_of("trailing."), ".");
    }

    #[test]
    fn test_name_without_extension() {
        assert_eq!(name_without_extension("report.docx"), "report");
        assert_eq!(name_without_extension("archive.tar.gz"), "archive.tar");
        assert_eq!(name_without_extension("Makefile"), "Makefile");
        assert_eq!(name_without_extension(".bashrc"), "");
    }

    #[test]
    fn test_classify_known_extensions() {
        assert_eq!(classify("a.docx"), TypeTag::Word);
        assert_eq!(classify("a.xlsx"), TypeTag::Excel);
        assert_eq!(classify("a.txt"), TypeTag::Text);
        assert_eq!(classify("a.png"), TypeTag::Image);
    }

    #[test]
    fn test_classify_fallback() {
        assert_eq!(classify("a.pdf"), TypeTag::File);
        assert_eq!(classify("README"), TypeTag::File);
        assert_eq!(classify("docx"), TypeTag::File);
    }

    // ============ Prefix Template ============

    #[test]
    fn test_prefix_format() {
        let namer = Namer::new(NameTemplate::Prefix);
        assert_eq!(
            namer.format_renamed_name(TypeTag::Word, 4, "c", ".docx"),
            "word4renamed.docx"
        );
        assert_eq!(
            namer.format_renamed_name(TypeTag::File, 1, "Makefile", ""),
            "file1renamed"
        );
    }

    #[test]
    fn test_prefix_recover() {
        let namer = Namer::new(NameTemplate::Prefix);
        assert_eq!(namer.recover_counter("word3renamed.docx", TypeTag::Word), Some(3));
        assert_eq!(namer.recover_counter("file12renamed", TypeTag::File), Some(12));
        assert_eq!(namer.recover_counter("image07renamed.PNG", TypeTag::Image), Some(7));
    }

    #[test]
    fn test_prefix_recover_rejects_mismatches() {
        let namer = Namer::new(NameTemplate::Prefix);
        // type segment does not match the extension's tag
        assert_eq!(namer.recover_counter("excel3renamed.docx", TypeTag::Word), None);
        // non-digit sequence
        assert_eq!(namer.recover_counter("wordXrenamed.docx", TypeTag::Word), None);
        assert_eq!(namer.recover_counter("wordrenamed.docx", TypeTag::Word), None);
        // trailing junk between marker and extension
        assert_eq!(namer.recover_counter("word3renamed.old.docx", TypeTag::Word), None);
        // marker somewhere else entirely
        assert_eq!(namer.recover_counter("my renamed notes.docx", TypeTag::Word), None);
        // overflow
        assert_eq!(
            namer.recover_counter("word99999999999renamed.docx", TypeTag::Word),
            None
        );
    }

    // ============ Stem Template ============

    #[test]
    fn test_stem_format() {
        let namer = Namer::new(NameTemplate::Stem);
        assert_eq!(
            namer.format_renamed_name(TypeTag::Word, 4, "c", ".docx"),
            "renamed_word4_c.docx"
        );
        assert_eq!(
            namer.format_renamed_name(TypeTag::File, 2, "", ".bashrc"),
            "renamed_file2_.bashrc"
        );
    }

    #[test]
    fn test_stem_recover() {
        let namer = Namer::new(NameTemplate::Stem);
        assert_eq!(namer.recover_counter("renamed_word1_a.docx", TypeTag::Word), Some(1));
        assert_eq!(
            namer.recover_counter("renamed_text10_my_notes.txt", TypeTag::Text),
            Some(10)
        );
        assert_eq!(namer.recover_counter("renamed_file2_.bashrc", TypeTag::File), Some(2));
    }

    #[test]
    fn test_stem_recover_rejects_mismatches() {
        let namer = Namer::new(NameTemplate::Stem);
        assert_eq!(namer.recover_counter("renamed_excel1_a.docx", TypeTag::Word), None);
        assert_eq!(namer.recover_counter("renamed_word_a.docx", TypeTag::Word), None);
        assert_eq!(namer.recover_counter("renamed_word1.docx", TypeTag::Word), None);
        assert_eq!(namer.recover_counter("old_renamed_word1_a.docx", TypeTag::Word), None);
    }

    #[test]
    fn test_formatted_names_parse_back() {
        for template in [NameTemplate::Prefix, NameTemplate::Stem] {
            let namer = Namer::new(template);
            let name = namer.format_renamed_name(TypeTag::Excel, 42, "budget", ".xlsx");
            assert!(namer.is_renamed(&name));
            assert_eq!(namer.recover_counter(&name, classify(&name)), Some(42));
        }
    }

    // ============ Detection & Planning ============

    #[test]
    fn test_is_renamed_is_substring_match() {
        let prefix = Namer::new(NameTemplate::Prefix);
        assert!(prefix.is_renamed("word1renamed.docx"));
        assert!(prefix.is_renamed("unrenamed draft.docx"));
        assert!(!prefix.is_renamed("report.docx"));

        let stem = Namer::new(NameTemplate::Stem);
        assert!(stem.is_renamed("renamed_word1_a.docx"));
        assert!(stem.is_renamed("was_renamed_before.txt"));
        assert!(!stem.is_renamed("word1renamed.docx"));
    }

    #[test]
    fn test_next_sequence_does_not_mutate() {
        let namer = Namer::default();
        let mut counters = CounterTable::new();
        assert_eq!(namer.next_sequence(TypeTag::Word, &counters), Some(1));

        counters.set(TypeTag::Word, 3);
        assert_eq!(namer.next_sequence(TypeTag::Word, &counters), Some(4));
        assert_eq!(counters.get(TypeTag::Word), 3);
    }

    #[test]
    fn test_next_sequence_exhausted() {
        let namer = Namer::new(NameTemplate::Prefix);
        let mut counters = CounterTable::new();
        counters.set(TypeTag::Word, u32::MAX);

        assert_eq!(namer.next_sequence(TypeTag::Word, &counters), None);
        assert!(namer.plan("a.docx", &counters).is_none());
        assert_eq!(namer.next_sequence(TypeTag::Text, &counters), Some(1));
    }

    #[test]
    fn test_plan() {
        let namer = Namer::new(NameTemplate::Stem);
        let mut counters = CounterTable::new();
        counters.set(TypeTag::Image, 2);

        let planned = namer.plan("holiday.PNG", &counters).unwrap();

        assert_eq!(planned.tag, TypeTag::Image);
        assert_eq!(planned.sequence, 3);
        assert_eq!(planned.name, "renamed_image3_holiday.PNG");
    }
}
