use kamus_types::LookupResult;
use unicode_normalization::UnicodeNormalization;

/// Render a lookup result as the multi-line text block handed to the screen
/// reader. Deterministic; entries separated by one blank line, no trailing
/// blank line. Metaphors are carried in the model but not read out.
pub fn render(result: &LookupResult) -> String {
    let mut lines: Vec<String> = Vec::new();
    let total = result.entries.len();

    for (idx, entry) in result.entries.iter().enumerate() {
        let mut head = normalize(&entry.headword);
        if !entry.pronunciation.is_empty() {
            head.push_str(&format!("  /{}/", entry.pronunciation));
        }
        lines.push(head);

        if !entry.base_word.is_empty() {
            lines.push(format!("  Kata Dasar: {}", normalize(&entry.base_word)));
        }

        if !entry.definitions.is_empty() {
            lines.push("  Definisi:".to_string());
            for (i, definition) in entry.definitions.iter().enumerate() {
                let codes = definition
                    .labels
                    .iter()
                    .map(|label| label.code.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                let label_part = if codes.is_empty() {
                    String::new()
                } else {
                    format!("[{codes}] ")
                };

                lines.push(format!(
                    "    {}. {}{}",
                    i + 1,
                    label_part,
                    normalize(&definition.text)
                ));

                if !definition.usage_examples.is_empty() {
                    let examples = definition
                        .usage_examples
                        .iter()
                        .map(|ex| normalize(ex))
                        .collect::<Vec<_>>()
                        .join("; ");
                    lines.push(format!("       Contoh: {examples}"));
                }
            }
        }

        if !entry.derived_words.is_empty() {
            lines.push(format!("  Kata Turunan: {}", join_words(&entry.derived_words)));
        }

        if !entry.compound_words.is_empty() {
            lines.push(format!("  Gabungan Kata: {}", join_words(&entry.compound_words)));
        }

        if !entry.proverbs.is_empty() {
            lines.push(format!("  Peribahasa: {}", join_words(&entry.proverbs)));
        }

        if idx + 1 < total {
            lines.push(String::new());
        }
    }

    lines.join("\n")
}

/// NFKC, so visually identical but differently encoded text cannot trip up
/// screen-reader pronunciation.
fn normalize(text: &str) -> String {
    text.nfkc().collect()
}

fn join_words(words: &[String]) -> String {
    words
        .iter()
        .map(|w| normalize(w))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use kamus_types::{Definition, Entry, Label, LookupResult};

    use super::*;

    fn makan() -> LookupResult {
        LookupResult {
            lemma: "makan".to_string(),
            entries: vec![Entry {
                headword: "makan".to_string(),
                pronunciation: "ma·kan".to_string(),
                definitions: vec![Definition {
                    text: "memasukkan makanan".to_string(),
                    ..Definition::default()
                }],
                ..Entry::default()
            }],
        }
    }

    #[test]
    fn headword_line_carries_pronunciation() {
        let rendered = render(&makan());

        assert!(rendered.starts_with("makan  /ma·kan/"));
        assert!(rendered.contains("1. memasukkan makanan"));
    }

    #[test]
    fn label_codes_prefix_the_definition() {
        let mut result = makan();
        result.entries[0].definitions[0].labels = vec![
            Label {
                code: "n".to_string(),
                name: "nomina".to_string(),
                kind: "kelas kata".to_string(),
            },
            Label {
                code: "ki".to_string(),
                name: "kiasan".to_string(),
                kind: "ragam".to_string(),
            },
        ];
        result.entries[0].definitions[0].usage_examples =
            vec!["makan nasi".to_string(), "makan sirih".to_string()];

        let rendered = render(&result);

        assert!(rendered.contains("    1. [n, ki] memasukkan makanan"));
        assert!(rendered.contains("       Contoh: makan nasi; makan sirih"));
    }

    #[test]
    fn entries_are_separated_by_one_blank_line_without_trailing() {
        let mut result = makan();
        let mut second = result.entries[0].clone();
        second.headword = "makan-makan".to_string();
        second.pronunciation = String::new();
        result.entries.push(second);

        let rendered = render(&result);

        assert!(rendered.contains("\n\nmakan-makan"));
        assert!(!rendered.ends_with('\n'));
    }

    #[test]
    fn base_word_derived_and_compound_lines() {
        let mut result = makan();
        result.entries[0].base_word = "makan".to_string();
        result.entries[0].derived_words = vec!["makanan".to_string(), "pemakan".to_string()];
        result.entries[0].compound_words = vec!["makan angin".to_string()];
        result.entries[0].proverbs = vec!["besar pasak daripada tiang".to_string()];

        let rendered = render(&result);

        assert!(rendered.contains("  Kata Dasar: makan"));
        assert!(rendered.contains("  Kata Turunan: makanan, pemakan"));
        assert!(rendered.contains("  Gabungan Kata: makan angin"));
        assert!(rendered.contains("  Peribahasa: besar pasak daripada tiang"));
    }

    #[test]
    fn metaphors_are_not_rendered() {
        let mut result = makan();
        result.entries[0].metaphors = vec!["makan hati".to_string()];

        assert!(!render(&result).contains("makan hati"));
    }

    #[test]
    fn output_is_normalized_to_composed_form() {
        let mut result = makan();
        // "e" + combining acute, as some upstream entries arrive
        result.entries[0].headword = "pe\u{0301}rak".to_string();

        assert!(render(&result).starts_with("p\u{00e9}rak"));
    }

    #[test]
    fn render_is_pure() {
        let result = makan();
        assert_eq!(render(&result), render(&result));
    }

    #[test]
    fn zero_entries_render_to_empty_text() {
        let result = LookupResult {
            lemma: "xyzzy".to_string(),
            entries: vec![],
        };
        assert_eq!(render(&result), "");
    }
}
