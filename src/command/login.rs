// SPDX-FileCopyrightText: 2025-2026 Ladle Maintainers
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use clap::Parser;

use crate::{
    error::Result,
    navigate::{self, Screen},
    prompt::Prompt,
};

use super::{browse, mine, Context};

/// Sign in and land on your role's default screen.
#[derive(Debug, Parser)]
pub(crate) struct Command {
    /// The email address to sign in with; prompted for when omitted.
    #[arg(long)]
    email: Option<String>,
}

#[async_trait]
impl super::Command for Command {
    async fn execute(self, ctx: Context) -> Result<()> {
        run(ctx, self.email).await
    }
}

pub(in crate::command) async fn run(mut ctx: Context, email: Option<String>) -> Result<()> {
    let email = match email {
        Some(email) => email,
        None => ctx.prompt.line("Email").await?,
    };
    let password = ctx.prompt.password("Password").await?;

    let role = ctx.store.login(ctx.api.as_ref(), &email, &password).await?;
    println!("Logged in as {email} ({role}).");

    // The post-login redirect: orphanages land on their own requirements,
    // everyone else on the public feed.
    if matches!(
        ctx.session().map(navigate::landing),
        Some(Screen::Requirements)
    ) {
        mine::render(&ctx, 0).await
    } else {
        browse::render(&ctx, 0, None).await
    }
}
