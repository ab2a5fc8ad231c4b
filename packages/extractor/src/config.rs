//! Configuration constants for the extractor.

/// Maximum input HTML size in bytes (50 MB).
///
/// Matches the upstream juriscontent generation limit; anything larger
/// is rejected before parsing to avoid exhausting memory.
pub const MAX_INPUT_SIZE: u64 = 50 * 1024 * 1024;

/// Name of the upstream cleaned HTML artifact for a document.
pub const JURISCONTENT_FILENAME: &str = "juriscontent.html";

/// Folder under a document's key prefix where section artifacts live.
pub const SECTIONS_FOLDER: &str = "section-level-content";

/// Build the artifact filename for a section.
///
/// # Examples
/// ```
/// use juriscontent_extractor::config::section_filename;
///
/// assert_eq!(section_filename(1), "miniviewer_1.txt");
/// assert_eq!(section_filename(12), "miniviewer_12.txt");
/// ```
#[must_use]
pub fn section_filename(sequence_number: u32) -> String {
    format!("miniviewer_{sequence_number}.txt")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_filename() {
        assert_eq!(section_filename(1), "miniviewer_1.txt");
        assert_eq!(section_filename(42), "miniviewer_42.txt");
    }

    #[test]
    fn test_max_input_size() {
        assert_eq!(MAX_INPUT_SIZE, 52_428_800);
    }
}
