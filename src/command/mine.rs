// SPDX-FileCopyrightText: 2025-2026 Ladle Maintainers
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use clap::Parser;
use log::error;

use crate::error::{self, Result};

use super::{browse, Context};

/// List the requirements posted by your own orphanage.
#[derive(Debug, Parser)]
pub(crate) struct Command {
    /// The zero-based page to show.
    #[arg(long, default_value_t = 0)]
    page: u32,
}

#[async_trait]
impl super::Command for Command {
    async fn execute(self, ctx: Context) -> Result<()> {
        render(&ctx, self.page).await
    }
}

pub(in crate::command) async fn render(ctx: &Context, page: u32) -> Result<()> {
    let session = ctx.require_session()?;
    if !session.is_orphanage() {
        // The screen is meaningless without an orphanage; fall through to
        // the public feed like the hosted application does.
        println!("Only orphanages have their own requirements; showing the public feed instead.");
        return browse::render(ctx, page, None).await;
    }

    let Some(orphanage_id) = session.orphanage_id() else {
        error!("Your session has no orphanage identifier; log out and log in again");
        return Err(error::Error::Command);
    };

    browse::render(ctx, page, Some(orphanage_id)).await
}
