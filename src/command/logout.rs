// SPDX-FileCopyrightText: 2025-2026 Ladle Maintainers
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use clap::Parser;

use crate::error::Result;

use super::Context;

/// Sign out, clearing the stored session. No server round-trip is involved.
#[derive(Debug, Parser)]
pub(crate) struct Command {}

#[async_trait]
impl super::Command for Command {
    async fn execute(self, mut ctx: Context) -> Result<()> {
        ctx.store.logout().await?;
        println!("Logged out.");
        Ok(())
    }
}
