// SPDX-FileCopyrightText: 2025-2026 Ladle Maintainers
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use clap::Parser;

use crate::{client::Api, error::Result, model::timestamp, navigate::Screen};

use super::Context;

/// Show one food post in full.
#[derive(Debug, Parser)]
pub(crate) struct Command {
    /// The identifier of the post to show.
    pub(in crate::command) id: String,
}

#[async_trait]
impl super::Command for Command {
    async fn execute(self, ctx: Context) -> Result<()> {
        render(&ctx, &self.id).await
    }
}

/// The action affordances of the detail screen. Ownership is decided by
/// exact identifier equality; a role alone never grants the owner set.
#[derive(Debug, PartialEq, Eq)]
pub(in crate::command) enum ActionSet {
    Owner,
    Visitor,
}

pub(in crate::command) fn action_set(
    session_user: Option<&str>,
    owner: Option<&str>,
) -> ActionSet {
    match (session_user, owner) {
        (Some(user), Some(owner)) if user == owner => ActionSet::Owner,
        _ => ActionSet::Visitor,
    }
}

pub(in crate::command) async fn render(ctx: &Context, id: &str) -> Result<()> {
    let post = ctx.api.food_post(id).await?;

    println!("{}", post.name);
    println!("  Link:        {}", Screen::Detail(post.id.clone()).path());
    if !post.description.is_empty() {
        println!("  Description: {}", post.description);
    }
    println!(
        "  Progress:    {}/{} ({}%)",
        post.collected_quantity,
        post.quantity,
        post.progress_percent()
    );
    if let Some(expires) = &post.expire_time {
        println!("  Expires:     {}", timestamp::display(expires));
    }
    if let Some(image) = post.resolved_image_url(&ctx.root) {
        println!("  Image:       {image}");
    }

    let session_user = ctx.session().and_then(|session| session.user_id());
    match action_set(session_user, post.owner_id.as_deref()) {
        ActionSet::Owner => {
            println!("Actions: edit (ladle edit {0}), delete (ladle delete {0})", post.id);
        }
        ActionSet::Visitor => {
            println!("Actions: contact the owner, or fulfill this requirement");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::{
        command::testing::{context, hero_session, sample_post, Call, RecordingApi},
        command::Command as _,
    };

    use super::{action_set, ActionSet};

    #[test]
    fn ownership_is_exact_identifier_equality() {
        assert_eq!(action_set(Some("7"), Some("7")), ActionSet::Owner);
        assert_eq!(action_set(Some("7"), Some("8")), ActionSet::Visitor);
        // String equality, not numeric equality.
        assert_eq!(action_set(Some("07"), Some("7")), ActionSet::Visitor);
    }

    #[test]
    fn missing_identifiers_never_grant_ownership() {
        assert_eq!(action_set(None, Some("7")), ActionSet::Visitor);
        assert_eq!(action_set(Some("7"), None), ActionSet::Visitor);
        assert_eq!(action_set(None, None), ActionSet::Visitor);
    }

    #[tokio::test]
    async fn show_fetches_the_one_post() {
        let api = RecordingApi::default().with_post(sample_post("p-1", Some("42")));
        let ctx = context(api.clone(), Some(hero_session())).await;

        super::Command {
            id: "p-1".to_owned(),
        }
        .execute(ctx)
        .await
        .unwrap();

        assert_eq!(api.recorded(), vec![Call::Fetch("p-1".to_owned())]);
    }
}
