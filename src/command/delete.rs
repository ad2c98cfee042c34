// SPDX-FileCopyrightText: 2025-2026 Ladle Maintainers
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use clap::Parser;

use crate::{
    client::Api,
    error::{self, Result},
    prompt::Prompt,
};

use super::Context;

/// Delete one of your food posts.
#[derive(Debug, Parser)]
pub(crate) struct Command {
    /// The identifier of the post to delete.
    id: String,

    /// Skip the confirmation prompt.
    #[arg(long, short)]
    yes: bool,
}

#[async_trait]
impl super::Command for Command {
    async fn execute(self, ctx: Context) -> Result<()> {
        _ = ctx.require_session()?;

        if !self.yes
            && !ctx
                .prompt
                .confirm(&format!("Delete food post {}?", self.id))
                .await?
        {
            return Err(error::Error::Cancelled);
        }

        ctx.api.delete_food_post(&self.id).await?;
        println!("Deleted food post {}.", self.id);
        Ok(())
    }
}
