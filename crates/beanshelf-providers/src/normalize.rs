// Record normalization from arbitrary JSON payloads into `Bean`
//
// Catalog sources have used several naming schemes over time (`_id` vs `id`,
// `flavor` vs `name`, `category` vs `group`, ...). Each target field is
// resolved from an ordered list of candidate keys; the first key whose value
// is present and not null wins, even if that value is an empty string.
// Normalization never fails: anything unusable degrades to the field default.

use beanshelf_types::Bean;
use serde_json::Value;

/// One target field and the payload keys it may be read from, in priority order
#[derive(Debug, Clone, Copy)]
pub struct FieldMapping {
    pub target: &'static str,
    pub candidates: &'static [&'static str],
    pub default: &'static str,
}

pub const ID: FieldMapping = FieldMapping {
    target: "id",
    candidates: &["id", "_id", "beanId", "Id", "ID"],
    default: "",
};

pub const NAME: FieldMapping = FieldMapping {
    target: "name",
    candidates: &["name", "flavor", "title"],
    default: "Unknown",
};

pub const DESCRIPTION: FieldMapping = FieldMapping {
    target: "description",
    candidates: &["description", "desc", "about"],
    default: "",
};

pub const IMAGE_URL: FieldMapping = FieldMapping {
    target: "imageUrl",
    candidates: &["imageUrl", "image", "img", "photoUrl", "thumbnail"],
    default: "",
};

pub const GROUP: FieldMapping = FieldMapping {
    target: "group",
    candidates: &["group", "category", "type", "family"],
    default: "",
};

pub const COLOR: FieldMapping = FieldMapping {
    target: "color",
    candidates: &["color", "hexColor", "hex"],
    default: "",
};

/// Full mapping table, in `Bean` field order
pub const BEAN_SCHEMA: [FieldMapping; 6] = [ID, NAME, DESCRIPTION, IMAGE_URL, GROUP, COLOR];

impl FieldMapping {
    /// Resolve this field from `raw`, falling back to the default
    pub fn resolve(&self, raw: &Value) -> String {
        let Some(object) = raw.as_object() else {
            return self.default.to_string();
        };

        self.candidates
            .iter()
            .filter_map(|key| object.get(*key))
            .find(|value| !value.is_null())
            .map(scalar_to_string)
            .unwrap_or_else(|| self.default.to_string())
    }
}

/// Normalize one raw payload object into a canonical `Bean`
pub fn normalize_bean(raw: &Value) -> Bean {
    Bean {
        id: ID.resolve(raw),
        name: NAME.resolve(raw),
        description: DESCRIPTION.resolve(raw),
        image_url: IMAGE_URL.resolve(raw),
        group: GROUP.resolve(raw),
        color: COLOR.resolve(raw),
    }
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        // Structured values are kept verbatim rather than dropped
        other => other.to_string(),
    }
}
