// SPDX-FileCopyrightText: 2025-2026 Ladle Maintainers
//
// SPDX-License-Identifier: Apache-2.0

//! Identifier normalization at the deserialization boundary. Backend drafts
//! deliver record identifiers as JSON strings or integers depending on the
//! entity and version; the rest of the crate only ever sees canonical
//! strings.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Raw {
    Text(String),
    Number(i64),
}

impl From<Raw> for String {
    fn from(value: Raw) -> Self {
        match value {
            Raw::Text(text) => text,
            Raw::Number(number) => number.to_string(),
        }
    }
}

pub(crate) fn string_or_number<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<String, D::Error> {
    Raw::deserialize(deserializer).map(String::from)
}

pub(crate) fn opt_string_or_number<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(Option::<Raw>::deserialize(deserializer)?.map(String::from))
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Record {
        #[serde(deserialize_with = "super::string_or_number")]
        id: String,
        #[serde(default, deserialize_with = "super::opt_string_or_number")]
        owner: Option<String>,
    }

    #[test]
    fn strings_pass_through_and_numbers_stringify() {
        let record: Record = serde_json::from_str(r#"{"id": "abc-1", "owner": 42}"#).unwrap();
        assert_eq!(record.id, "abc-1");
        assert_eq!(record.owner.as_deref(), Some("42"));

        let record: Record = serde_json::from_str(r#"{"id": 7, "owner": null}"#).unwrap();
        assert_eq!(record.id, "7");
        assert_eq!(record.owner, None);
    }
}
