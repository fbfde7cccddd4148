use docforge_core::{is_blank, is_text_space, TextStats};

/// Counts whitespace-delimited words, characters and `\n`-delimited lines.
///
/// Blank text reports zero for every count, including lines.
pub fn text_statistics(text: &str) -> TextStats {
    if is_blank(text) {
        return TextStats::default();
    }

    TextStats {
        words: text.split(is_text_space).filter(|w| !w.is_empty()).count(),
        characters: text.chars().count(),
        lines: text.split('\n').count(),
    }
}
