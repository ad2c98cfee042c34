// SPDX-FileCopyrightText: 2025-2026 Ladle Maintainers
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use url::Url;

use crate::{
    client::Api,
    error::{self, Result},
    prompt::Prompt,
    session::{Session, SessionStore},
};

pub(crate) mod awards;
pub(crate) mod browse;
pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod edit;
pub(crate) mod home;
pub(crate) mod login;
pub(crate) mod logout;
pub(crate) mod mine;
pub(crate) mod open;
pub(crate) mod show;
pub(crate) mod signup;
pub(crate) mod whoami;

/// Everything a screen needs: the API seam, the session store, interactive
/// prompts, and the server root for resolving relative links.
pub(crate) struct Context {
    pub(crate) api: Box<dyn Api + Send + Sync>,
    pub(crate) store: SessionStore,
    pub(crate) prompt: Box<dyn Prompt>,
    pub(crate) root: Url,
}

impl Context {
    pub(crate) fn session(&self) -> Option<&Session> {
        self.store.current()
    }

    /// Gates a screen on being logged in, before any request is issued.
    pub(crate) fn require_session(&self) -> Result<&Session> {
        self.session().ok_or_else(|| error::Session::Unauthorized.into())
    }
}

#[async_trait]
pub(crate) trait Command {
    async fn execute(self, ctx: Context) -> Result<()>;
}
