// SPDX-FileCopyrightText: 2025-2026 Ladle Maintainers
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use clap::Parser;

use crate::{
    error::Result,
    navigate::{self, Screen},
};

use super::{awards, browse, home, login, mine, show, Context};

/// Follow an application path the way the hosted client routes it,
/// redirects included.
#[derive(Debug, Parser)]
pub(crate) struct Command {
    /// The path to open, for example /donations or /post/42.
    path: String,
}

#[async_trait]
impl super::Command for Command {
    async fn execute(self, ctx: Context) -> Result<()> {
        match navigate::resolve(Screen::from_path(&self.path), ctx.session()) {
            Screen::Home => {
                home::welcome();
                Ok(())
            }
            Screen::Browse => browse::render(&ctx, 0, None).await,
            Screen::Requirements => mine::render(&ctx, 0).await,
            Screen::Detail(id) => show::render(&ctx, &id).await,
            Screen::Login => login::run(ctx, None).await,
            Screen::Awards => {
                awards::render(&ctx);
                Ok(())
            }
            // Form screens take their input as flags; point at the
            // matching subcommand instead of replaying the form here.
            Screen::Create => {
                println!("The create screen is a form; run `ladle create --help`.");
                Ok(())
            }
            Screen::Signup => {
                println!("The signup screen is a form; run `ladle signup --help`.");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        command::testing::{context, context_with_prompt, orphanage_session, Call, RecordingApi},
        command::Command as _,
        prompt::testing::ScriptedPrompt,
    };

    fn open(path: &str) -> super::Command {
        super::Command {
            path: path.to_owned(),
        }
    }

    #[tokio::test]
    async fn donations_path_lists_the_public_feed() {
        let api = RecordingApi::default();
        let ctx = context(api.clone(), None).await;
        open("/donations").execute(ctx).await.unwrap();
        assert_eq!(
            api.recorded(),
            vec![Call::List {
                page: 0,
                size: 12,
                orphanage_id: None,
            }]
        );
    }

    #[tokio::test]
    async fn unknown_paths_land_on_home() {
        let api = RecordingApi::default();
        let ctx = context(api.clone(), None).await;
        open("/does-not-exist").execute(ctx).await.unwrap();
        assert!(api.recorded().is_empty());
    }

    #[tokio::test]
    async fn post_paths_show_the_detail_screen() {
        let api = RecordingApi::default()
            .with_post(crate::command::testing::sample_post("p-1", None));
        let ctx = context(api.clone(), None).await;
        open("/post/p-1").execute(ctx).await.unwrap();
        assert_eq!(api.recorded(), vec![Call::Fetch("p-1".to_owned())]);
    }

    #[tokio::test]
    async fn anonymous_create_redirects_into_login() {
        let api = RecordingApi::default().with_login("tok-2", "MISSION_HERO", Some("42"), None);
        let prompt = ScriptedPrompt::default()
            .with_line("hero@example.com")
            .with_password("pw");
        let ctx = context_with_prompt(api.clone(), None, prompt).await;

        open("/create").execute(ctx).await.unwrap();

        // Redirected to login, then landed on the public feed.
        assert_eq!(
            api.recorded(),
            vec![
                Call::Login,
                Call::List {
                    page: 0,
                    size: 12,
                    orphanage_id: None,
                },
            ]
        );
    }

    #[tokio::test]
    async fn authenticated_create_points_at_the_subcommand() {
        let api = RecordingApi::default();
        let ctx = context(api.clone(), Some(orphanage_session())).await;
        open("/create").execute(ctx).await.unwrap();
        assert!(api.recorded().is_empty());
    }
}
