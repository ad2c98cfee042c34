// SPDX-FileCopyrightText: 2025-2026 Ladle Maintainers
//
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use async_trait::async_trait;
use clap::Parser;
use time::OffsetDateTime;

use crate::{
    api,
    client::{Api, Upload},
    error::{self, Result},
    model::timestamp,
};

use super::Context;

/// Publish a new food post.
#[derive(Debug, Parser)]
pub(crate) struct Command {
    /// The name of the dish or requirement.
    #[arg(long)]
    name: String,

    /// Free-text description.
    #[arg(long)]
    description: String,

    /// The number of servings offered or required.
    #[arg(long)]
    quantity: u32,

    /// When the offer expires, as an RFC 3339 timestamp.
    #[arg(long, value_parser = timestamp::parse_flag)]
    expires: Option<OffsetDateTime>,

    /// An image file to attach to the post.
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    image: Option<PathBuf>,
}

#[async_trait]
impl super::Command for Command {
    async fn execute(self, ctx: Context) -> Result<()> {
        // Gate before touching the network or the file system.
        let session = ctx.require_session()?;
        if !session.can_publish() {
            return Err(error::Session::Forbidden(session.role()).into());
        }

        let image = self.image.map(Upload::read).transpose()?;
        let data = api::FoodPostData {
            id: None,
            name: self.name,
            description: self.description,
            quantity: self.quantity,
            expire_time: self.expires,
        };

        let post = ctx.api.create_food_post(&data, image).await?;
        println!("Food item successfully published! (id {})", post.id);
        Ok(())
    }
}
