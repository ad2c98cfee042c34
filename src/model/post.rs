// SPDX-FileCopyrightText: 2025-2026 Ladle Maintainers
//
// SPDX-License-Identifier: Apache-2.0

use serde::Deserialize;
use tabled::Tabled;
use time::OffsetDateTime;
use url::Url;

use super::{ids, timestamp};

/// One donation offer or requirement listing as the server delivers it.
///
/// The wire shape drifted across backend drafts: the identifier arrives under
/// any of `id`, `uuid`, `foodPostId`, or `postId` and as a string or an
/// integer, the free text under `description` or `requirement`, the target
/// quantity under `quantity` or `quantityRequired`, and the owner reference
/// under `userId`, `orphaneId`, `orphanageId`, or `ownerId`. All of that is
/// normalized right here so no other module has to care.
#[derive(Clone, Debug, Deserialize, Tabled)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Post {
    #[serde(
        alias = "uuid",
        alias = "foodPostId",
        alias = "postId",
        deserialize_with = "ids::string_or_number"
    )]
    #[tabled(rename = "ID")]
    pub(crate) id: String,
    #[tabled(rename = "Name")]
    pub(crate) name: String,
    #[serde(default, alias = "requirement")]
    #[tabled(rename = "Description", display_with = "Self::format_description")]
    pub(crate) description: String,
    #[serde(default, alias = "quantityRequired")]
    #[tabled(rename = "Needed")]
    pub(crate) quantity: u32,
    #[serde(default)]
    #[tabled(rename = "Progress", display_with("Self::format_progress", self))]
    pub(crate) collected_quantity: u32,
    #[serde(default, deserialize_with = "timestamp::deserialize_lenient")]
    #[tabled(rename = "Expires", display_with = "Self::format_expires")]
    pub(crate) expire_time: Option<OffsetDateTime>,
    #[serde(default)]
    #[tabled(skip)]
    pub(crate) image_url: Option<String>,
    #[serde(
        default,
        rename = "userId",
        alias = "orphaneId",
        alias = "orphanageId",
        alias = "ownerId",
        deserialize_with = "ids::opt_string_or_number"
    )]
    #[tabled(skip)]
    pub(crate) owner_id: Option<String>,
}

impl Post {
    /// The fulfillment percentage to display, clamped to 100. A requirement
    /// of zero shows 0% until anything at all is collected.
    pub(crate) fn progress_percent(&self) -> u32 {
        if self.quantity == 0 {
            return if self.collected_quantity == 0 { 0 } else { 100 };
        }

        let percent = u64::from(self.collected_quantity) * 100 / u64::from(self.quantity);
        u32::try_from(percent.min(100)).unwrap_or(100)
    }

    /// Resolves the image reference for display: absolute URLs pass through,
    /// relative ones are joined onto the server root.
    pub(crate) fn resolved_image_url(&self, root: &Url) -> Option<String> {
        self.image_url.as_ref().map(|image| {
            Url::parse(image).map_or_else(
                |_| {
                    root.join(image.trim_start_matches('/'))
                        .map_or_else(|_| image.clone(), String::from)
                },
                String::from,
            )
        })
    }

    fn format_description(description: &str) -> String {
        let mut text: String = description.chars().take(25).collect();
        if description.chars().count() > 25 {
            text.push_str("...");
        }
        text
    }

    fn format_progress(&self) -> String {
        format!(
            "{}/{} ({}%)",
            self.collected_quantity,
            self.quantity,
            self.progress_percent()
        )
    }

    fn format_expires(expire_time: &Option<OffsetDateTime>) -> String {
        expire_time.as_ref().map_or_else(String::new, timestamp::display)
    }
}
