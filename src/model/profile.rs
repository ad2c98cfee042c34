// SPDX-FileCopyrightText: 2025-2026 Ladle Maintainers
//
// SPDX-License-Identifier: Apache-2.0

use serde::Deserialize;

use super::ids;

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UserProfile {
    #[serde(
        default,
        alias = "id",
        deserialize_with = "ids::opt_string_or_number"
    )]
    pub(crate) user_id: Option<String>,
    #[serde(default)]
    pub(crate) name: Option<String>,
    #[serde(default)]
    pub(crate) email: Option<String>,
    #[serde(default)]
    pub(crate) phone_number: Option<String>,
    #[serde(default)]
    pub(crate) country: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrphanageProfile {
    #[serde(
        default,
        alias = "id",
        deserialize_with = "ids::opt_string_or_number"
    )]
    pub(crate) orphanage_id: Option<String>,
    #[serde(default)]
    pub(crate) name: Option<String>,
    #[serde(default)]
    pub(crate) email: Option<String>,
    #[serde(default)]
    pub(crate) phone_number: Option<String>,
    #[serde(default)]
    pub(crate) address: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::{OrphanageProfile, UserProfile};

    #[test]
    fn profiles_tolerate_sparse_payloads() {
        let user: UserProfile =
            serde_json::from_str(r#"{"id": 7, "email": "hero@example.com"}"#).unwrap();
        assert_eq!(user.user_id.as_deref(), Some("7"));
        assert_eq!(user.email.as_deref(), Some("hero@example.com"));
        assert_eq!(user.name, None);

        let orphanage: OrphanageProfile =
            serde_json::from_str(r#"{"orphanageId": "orph-1", "name": "Sunrise Home"}"#).unwrap();
        assert_eq!(orphanage.orphanage_id.as_deref(), Some("orph-1"));
        assert_eq!(orphanage.name.as_deref(), Some("Sunrise Home"));
    }
}
