// SPDX-FileCopyrightText: 2025-2026 Ladle Maintainers
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use clap::Parser;

use crate::{client::Api, error::Result};

use super::Context;

/// Show who you are logged in as, with the profile the server has on file.
#[derive(Debug, Parser)]
pub(crate) struct Command {}

#[async_trait]
impl super::Command for Command {
    async fn execute(self, ctx: Context) -> Result<()> {
        let session = ctx.require_session()?;
        println!(
            "{} ({})",
            session.email().unwrap_or("<no email recorded>"),
            session.role()
        );

        if let Some(orphanage_id) = session.orphanage_id() {
            let profile = ctx.api.orphanage_profile(orphanage_id).await?;
            if let Some(name) = profile.name {
                println!("  Orphanage: {name}");
            }
            if let Some(address) = profile.address {
                println!("  Address:   {address}");
            }
            if let Some(phone) = profile.phone_number {
                println!("  Phone:     {phone}");
            }
        } else if let Some(user_id) = session.user_id() {
            let profile = ctx.api.user_profile(user_id).await?;
            if let Some(name) = profile.name {
                println!("  Name:    {name}");
            }
            if let Some(phone) = profile.phone_number {
                println!("  Phone:   {phone}");
            }
            if let Some(country) = profile.country {
                println!("  Country: {country}");
            }
        }

        Ok(())
    }
}
