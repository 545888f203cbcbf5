#![forbid(unsafe_code)]

//! Collection records as fetched from the site's JSON files.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::LoadError;

/// One entry of a fetched collection.
///
/// Only `title` is required. The link fields are consumed by specific card
/// builders; anything else in the JSON object is kept in [`Record::extra`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(
        default,
        rename = "previewImage",
        skip_serializing_if = "Option::is_none"
    )]
    pub preview_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Treat empty strings like missing links.
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

impl Record {
    /// Record with just a title.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Builder-style tag list.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    #[must_use]
    pub fn with_github(mut self, github: impl Into<String>) -> Self {
        self.github = Some(github.into());
        self
    }

    #[must_use]
    pub fn with_preview_image(mut self, src: impl Into<String>) -> Self {
        self.preview_image = Some(src.into());
        self
    }

    #[must_use]
    pub fn with_image(mut self, src: impl Into<String>) -> Self {
        self.image = Some(src.into());
        self
    }

    pub fn github_link(&self) -> Option<&str> {
        present(&self.github)
    }

    pub fn preview_image_src(&self) -> Option<&str> {
        present(&self.preview_image)
    }

    pub fn image_src(&self) -> Option<&str> {
        present(&self.image)
    }

    /// Tags joined with single spaces, as exposed on card roots.
    pub fn joined_tags(&self) -> String {
        self.tags.join(" ")
    }
}

/// Decode a collection body fetched from `url`.
pub fn decode_collection(url: &str, body: &str) -> Result<Vec<Record>, LoadError> {
    serde_json::from_str(body).map_err(|e| LoadError::Decode {
        url: url.to_owned(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn decodes_known_and_extra_fields() {
        let body = r#"[
            {"title": "Orbit", "tags": ["space"], "url": "orbit/", "github": "https://gh/orbit", "stars": 3},
            {"title": "Comet", "previewImage": "comet.png"}
        ]"#;
        let records = decode_collection("apps.json", body).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].tags, vec!["space".to_string()]);
        assert_eq!(records[0].github_link(), Some("https://gh/orbit"));
        assert_eq!(records[0].extra.get("stars"), Some(&Value::from(3)));
        assert_eq!(records[1].tags, Vec::<String>::new());
        assert_eq!(records[1].preview_image_src(), Some("comet.png"));
    }

    #[test]
    fn null_tags_mean_no_tags() {
        let records = decode_collection("x.json", r#"[{"title": "A", "tags": null}]"#).unwrap();
        assert!(records[0].tags.is_empty());
    }

    #[test]
    fn missing_title_is_a_decode_error() {
        let err = decode_collection("x.json", r#"[{"tags": ["a"]}]"#).unwrap_err();
        assert!(matches!(err, LoadError::Decode { ref url, .. } if url == "x.json"));
    }

    #[test]
    fn non_array_body_is_a_decode_error() {
        assert!(decode_collection("x.json", r#"{"title": "A"}"#).is_err());
        assert!(decode_collection("x.json", "<!doctype html>").is_err());
    }

    #[test]
    fn empty_links_count_as_absent() {
        let record = Record::titled("A").with_github("").with_image("");
        assert_eq!(record.github_link(), None);
        assert_eq!(record.image_src(), None);
    }

    #[test]
    fn joined_tags_uses_single_spaces() {
        let record = Record::titled("A").with_tags(["x", "y z"]);
        assert_eq!(record.joined_tags(), "x y z");
    }
}
