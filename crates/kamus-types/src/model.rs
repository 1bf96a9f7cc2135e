use serde::{Deserialize, Deserializer, Serialize};

/// Usage label attached to a definition (register, field, dialect).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Label {
    pub code: String,
    pub name: String,
    pub kind: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Definition {
    #[serde(rename = "definition")]
    pub text: String,
    /// Empty when the definition is not a cross-reference.
    pub referenced_lemma: String,
    pub labels: Vec<Label>,
    pub usage_examples: Vec<String>,
}

/// One sense-cluster / homograph block for a lemma.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Entry {
    #[serde(rename = "entry")]
    pub headword: String,
    pub base_word: String,
    pub pronunciation: String,
    pub definitions: Vec<Definition>,
    #[serde(deserialize_with = "non_empty_words")]
    pub derived_words: Vec<String>,
    #[serde(deserialize_with = "non_empty_words")]
    pub compound_words: Vec<String>,
    #[serde(deserialize_with = "non_empty_words")]
    pub metaphors: Vec<String>,
    #[serde(deserialize_with = "non_empty_words")]
    pub proverbs: Vec<String>,
}

/// A complete lookup response. `lemma` is the canonical headword echoed by
/// the server and may differ from what the user typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupResult {
    pub lemma: String,
    pub entries: Vec<Entry>,
}

/// The upstream API sometimes leaves nulls or empty strings inside its word
/// arrays; drop them at the deserialization boundary.
fn non_empty_words<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Vec<Option<String>> = Vec::deserialize(deserializer)?;
    Ok(raw.into_iter().flatten().filter(|w| !w.is_empty()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nulls_and_empties_are_dropped_from_word_lists() {
        let entry: Entry = serde_json::from_value(serde_json::json!({
            "entry": "makan",
            "derivedWords": ["makanan", null, "", "pemakan"],
            "compoundWords": [null],
        }))
        .unwrap();

        assert_eq!(entry.derived_words, vec!["makanan", "pemakan"]);
        assert!(entry.compound_words.is_empty());
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let def: Definition = serde_json::from_value(serde_json::json!({
            "definition": "memasukkan makanan"
        }))
        .unwrap();

        assert_eq!(def.text, "memasukkan makanan");
        assert!(def.referenced_lemma.is_empty());
        assert!(def.labels.is_empty());
        assert!(def.usage_examples.is_empty());
    }
}
