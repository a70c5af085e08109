use serde::{Deserialize, Serialize};

/// Bucket used when a bean has neither a group nor a usable name.
pub const FALLBACK_BUCKET: &str = "#";

/// Canonical catalog record.
///
/// `id` and `name` are always present after normalization; the remaining
/// fields default to empty strings. An empty `image_url` means the record
/// is rendered with a placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bean {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub color: String,
}

impl Bean {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// True when both `id` and `name` carry something other than whitespace.
    ///
    /// Fetched collections keep only complete records.
    pub fn is_complete(&self) -> bool {
        !self.id.trim().is_empty() && !self.name.trim().is_empty()
    }

    pub fn has_image(&self) -> bool {
        !self.image_url.trim().is_empty()
    }

    /// Category bucket for gallery filtering.
    ///
    /// The group wins when present; otherwise the upper-cased first
    /// character of the name.
    pub fn bucket(&self) -> String {
        let group = self.group.trim();
        if !group.is_empty() {
            return group.to_string();
        }

        match self.name.trim().chars().next() {
            Some(first) => first.to_uppercase().collect(),
            None => FALLBACK_BUCKET.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_prefers_group() {
        let bean = Bean::new("1", "lemon drop").with_group("Citrus");
        assert_eq!(bean.bucket(), "Citrus");
    }

    #[test]
    fn test_bucket_falls_back_to_initial() {
        let bean = Bean::new("1", "lemon drop");
        assert_eq!(bean.bucket(), "L");

        let blank_group = Bean::new("2", "  ápple").with_group("   ");
        assert_eq!(blank_group.bucket(), "Á");
    }

    #[test]
    fn test_bucket_for_empty_name() {
        let bean = Bean::new("1", "");
        assert_eq!(bean.bucket(), FALLBACK_BUCKET);
    }

    #[test]
    fn test_is_complete() {
        assert!(Bean::new("1", "Mint").is_complete());
        assert!(!Bean::new("", "Mint").is_complete());
        assert!(!Bean::new("1", "  ").is_complete());
    }

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let bean = Bean::new("7", "Mango")
            .with_image_url("https://img.test/mango.png")
            .with_color("#ffb347");

        insta::assert_snapshot!(serde_json::to_string(&bean).unwrap(), @r###"{"id":"7","name":"Mango","description":"","imageUrl":"https://img.test/mango.png","group":"","color":"#ffb347"}"###);
    }
}
