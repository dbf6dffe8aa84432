//! Raw company record exchanged between the crawler and the cleaner

use serde::{Deserialize, Deserializer, Serialize};

/// A company as discovered in the directory and enriched with its detail lookup.
///
/// Decoding is lenient so hand-made or older artifacts load: every field may be
/// absent, the identifier is accepted as `company_id` or `id`, and `tags` may be
/// a list, a single string, or null.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCompanyRecord {
    #[serde(rename = "company_id", alias = "id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub profile_url: Option<String>,
    #[serde(default, deserialize_with = "deserialize_tags")]
    pub tags: Tags,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub careers_url: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
}

impl RawCompanyRecord {
    /// Create a record carrying only a display name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Tags as a single `|`-joined cell.
    ///
    /// List entries are trimmed and blanks dropped; a pre-joined string is
    /// passed through untouched.
    pub fn pipe_joined_tags(&self) -> String {
        match &self.tags {
            Tags::List(tags) => tags
                .iter()
                .map(|tag| tag.trim())
                .filter(|tag| !tag.is_empty())
                .collect::<Vec<_>>()
                .join("|"),
            Tags::Text(text) => text.clone(),
        }
    }
}

/// Industry tags as found in the artifact: a list, or one free-form string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Tags {
    List(Vec<String>),
    Text(String),
}

impl Tags {
    pub fn is_empty(&self) -> bool {
        match self {
            Tags::List(tags) => tags.is_empty(),
            Tags::Text(text) => text.is_empty(),
        }
    }
}

impl Default for Tags {
    fn default() -> Self {
        Tags::List(Vec::new())
    }
}

impl From<Vec<String>> for Tags {
    fn from(tags: Vec<String>) -> Self {
        Tags::List(tags)
    }
}

impl PartialEq<Vec<String>> for Tags {
    fn eq(&self, other: &Vec<String>) -> bool {
        matches!(self, Tags::List(tags) if tags == other)
    }
}

fn deserialize_tags<'de, D>(deserializer: D) -> Result<Tags, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Tags>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_name_only_record() {
        let record: RawCompanyRecord = serde_json::from_str(r#"{"name":"Acme Inc."}"#).unwrap();
        assert_eq!(record.name, "Acme Inc.");
        assert!(record.id.is_empty());
        assert!(record.tags.is_empty());
        assert_eq!(record.website, None);
    }

    #[test]
    fn test_decode_accepts_id_alias() {
        let record: RawCompanyRecord =
            serde_json::from_str(r#"{"id":"42","name":"Beta"}"#).unwrap();
        assert_eq!(record.id, "42");

        let record: RawCompanyRecord =
            serde_json::from_str(r#"{"company_id":"43","name":"Gamma"}"#).unwrap();
        assert_eq!(record.id, "43");
    }

    #[test]
    fn test_decode_tag_shapes() {
        let list: RawCompanyRecord =
            serde_json::from_str(r#"{"name":"A","tags":["Fintech"," AI ",""]}"#).unwrap();
        assert_eq!(list.pipe_joined_tags(), "Fintech|AI");

        let text: RawCompanyRecord =
            serde_json::from_str(r#"{"name":"A","tags":"Software"}"#).unwrap();
        assert_eq!(text.tags, Tags::Text("Software".to_string()));

        let null: RawCompanyRecord = serde_json::from_str(r#"{"name":"A","tags":null}"#).unwrap();
        assert!(null.tags.is_empty());
    }

    #[test]
    fn test_string_tags_pass_through_untrimmed() {
        let record: RawCompanyRecord =
            serde_json::from_str(r#"{"name":"A","tags":"  AI "}"#).unwrap();
        assert_eq!(record.pipe_joined_tags(), "  AI ");

        let blank: RawCompanyRecord = serde_json::from_str(r#"{"name":"A","tags":""}"#).unwrap();
        assert_eq!(blank.pipe_joined_tags(), "");
        assert!(blank.tags.is_empty());
    }

    #[test]
    fn test_encode_list_tags_as_array() {
        let record = RawCompanyRecord {
            tags: vec!["Media".to_string()].into(),
            ..RawCompanyRecord::named("Delta")
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["tags"], serde_json::json!(["Media"]));
    }

    #[test]
    fn test_encode_uses_company_id_key() {
        let record = RawCompanyRecord {
            id: "7".to_string(),
            ..RawCompanyRecord::named("Delta")
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["company_id"], "7");
        assert!(json.get("id").is_none());
    }
}
