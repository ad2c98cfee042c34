// SPDX-FileCopyrightText: 2025-2026 Ladle Maintainers
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use clap::Parser;

use crate::{
    error::Result,
    navigate::{self, Screen},
};

use super::{browse, mine, Context};

/// The landing screen: a welcome for visitors, your default listing when
/// signed in.
#[derive(Debug, Parser)]
pub(crate) struct Command {}

#[async_trait]
impl super::Command for Command {
    async fn execute(self, ctx: Context) -> Result<()> {
        // LINT: resolve() only ever sends home to a list screen or leaves
        // it in place.
        #[allow(clippy::wildcard_enum_match_arm)]
        match navigate::resolve(Screen::Home, ctx.session()) {
            Screen::Requirements => mine::render(&ctx, 0).await,
            Screen::Browse => browse::render(&ctx, 0, None).await,
            _ => {
                welcome();
                Ok(())
            }
        }
    }
}

pub(in crate::command) fn welcome() {
    println!("Muruga Kitchen: surplus food, shared.");
    println!();
    println!("  ladle browse          see open donation posts");
    println!("  ladle login           sign in");
    println!("  ladle signup --help   create an account");
}
