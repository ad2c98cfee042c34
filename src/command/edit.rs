// SPDX-FileCopyrightText: 2025-2026 Ladle Maintainers
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use clap::Parser;
use time::OffsetDateTime;

use crate::{
    api,
    client::Api,
    error::Result,
    model::{timestamp, Post},
};

use super::Context;

/// Update one of your food posts. Unspecified fields keep their current
/// values; the server receives a full-record replace either way.
#[derive(Debug, Parser)]
pub(crate) struct Command {
    /// The identifier of the post to update.
    id: String,

    /// A new name.
    #[arg(long)]
    name: Option<String>,

    /// A new description.
    #[arg(long)]
    description: Option<String>,

    /// A new serving count.
    #[arg(long)]
    quantity: Option<u32>,

    /// A new expiry, as an RFC 3339 timestamp.
    #[arg(long, value_parser = timestamp::parse_flag)]
    expires: Option<OffsetDateTime>,
}

/// Pre-fills the replacement payload from the current record and overlays
/// only the provided fields.
fn replacement(
    current: Post,
    name: Option<String>,
    description: Option<String>,
    quantity: Option<u32>,
    expires: Option<OffsetDateTime>,
) -> api::FoodPostData {
    api::FoodPostData {
        id: Some(current.id),
        name: name.unwrap_or(current.name),
        description: description.unwrap_or(current.description),
        quantity: quantity.unwrap_or(current.quantity),
        expire_time: expires.or(current.expire_time),
    }
}

#[async_trait]
impl super::Command for Command {
    async fn execute(self, ctx: Context) -> Result<()> {
        _ = ctx.require_session()?;

        let current = ctx.api.food_post(&self.id).await?;
        let id = current.id.clone();
        let data = replacement(
            current,
            self.name,
            self.description,
            self.quantity,
            self.expires,
        );

        let updated = ctx.api.update_food_post(&id, &data).await?;
        println!(
            "Updated {}: {} ({}/{} collected)",
            updated.id, updated.name, updated.collected_quantity, updated.quantity
        );
        Ok(())
    }
}
