// SPDX-FileCopyrightText: 2025-2026 Ladle Maintainers
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use clap::Parser;
use tabled::{settings::Style, Table, Tabled};

use crate::{error::Result, session::Session};

use super::Context;

/// Show the Hall of Honor for Mission Heroes.
#[derive(Debug, Parser)]
pub(crate) struct Command {}

#[async_trait]
impl super::Command for Command {
    async fn execute(self, ctx: Context) -> Result<()> {
        render(&ctx);
        Ok(())
    }
}

#[derive(Tabled)]
struct Award {
    #[tabled(rename = "Medal")]
    title: &'static str,
    #[tabled(rename = "Criteria")]
    criteria: &'static str,
    #[tabled(rename = "Rarity")]
    rarity: &'static str,
    #[tabled(rename = "Issued")]
    issued: &'static str,
}

fn showcase() -> Vec<Award> {
    vec![
        Award {
            title: "Sustenance Guardian",
            criteria: "Fulfilled 5 orphanage requirements",
            rarity: "Legendary",
            issued: "2026-03-15",
        },
        Award {
            title: "Childhood Dreamer",
            criteria: "Fulfilled a birthday requirement",
            rarity: "Epic",
            issued: "2026-04-02",
        },
    ]
}

// Renders in place rather than redirecting: non-heroes see the locked
// panel where the showcase would be.
pub(in crate::command) fn render(ctx: &Context) {
    if !ctx.session().is_some_and(Session::is_hero) {
        println!("Hero Status Required");
        println!(
            "Only registered Mission Heroes can access the Hall of Honor. \
             Step up to serve and earn your place here."
        );
        return;
    }

    println!("Your Honor Medals");
    println!("{}", Table::new(showcase()).with(Style::rounded()));
}

#[cfg(test)]
mod tests {
    use crate::{
        command::testing::{context, hero_session, orphanage_session, RecordingApi},
        command::Command as _,
    };

    #[tokio::test]
    async fn the_showcase_never_touches_the_network() {
        let api = RecordingApi::default();
        let ctx = context(api.clone(), Some(hero_session())).await;
        super::Command {}.execute(ctx).await.unwrap();
        assert!(api.recorded().is_empty());
    }

    #[tokio::test]
    async fn non_heroes_get_the_locked_panel_not_an_error() {
        let api = RecordingApi::default();
        let ctx = context(api.clone(), Some(orphanage_session())).await;
        super::Command {}.execute(ctx).await.unwrap();

        let api = RecordingApi::default();
        let ctx = context(api, None).await;
        super::Command {}.execute(ctx).await.unwrap();
    }
}
