// SPDX-FileCopyrightText: 2025-2026 Ladle Maintainers
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use clap::Parser;
use tabled::{
    settings::{object::Segment, Alignment, Modify, Style},
    Table,
};

use crate::{api, client::Api, error::Result, navigate::Pager};

use super::Context;

/// Browse the public feed of donation posts.
#[derive(Debug, Parser)]
pub(crate) struct Command {
    /// The zero-based page to show.
    #[arg(long, default_value_t = 0)]
    page: u32,
}

#[async_trait]
impl super::Command for Command {
    async fn execute(self, ctx: Context) -> Result<()> {
        render(&ctx, self.page, None).await
    }
}

/// Fetches and prints one page of posts, shared by every list screen. The
/// owner scope turns the public feed into an orphanage's own requirements.
pub(in crate::command) async fn render(
    ctx: &Context,
    page: u32,
    orphanage_id: Option<&str>,
) -> Result<()> {
    let listing = ctx
        .api
        .food_posts(page, api::PAGE_SIZE, orphanage_id)
        .await?;

    let mut pager = Pager::at(page);
    pager.observe(listing.total_pages, listing.last);

    if listing.content.is_empty() {
        println!("No food posts on this page.");
    } else {
        println!(
            "{}",
            Table::new(&listing.content)
                .with(Style::rounded())
                .with(Modify::new(Segment::all()).with(Alignment::left()))
        );
    }

    let command = if orphanage_id.is_some() { "mine" } else { "browse" };
    println!(
        "Page {} of {}.",
        pager.page() + 1,
        pager.total_pages().max(1)
    );
    if let Some(next) = pager.next() {
        println!("Next: ladle {command} --page {next}");
    }
    if let Some(prev) = pager.prev() {
        println!("Previous: ladle {command} --page {prev}");
    }

    Ok(())
}
