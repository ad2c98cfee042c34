// SPDX-FileCopyrightText: 2025-2026 Ladle Maintainers
//
// SPDX-License-Identifier: Apache-2.0

//! The role-gated navigation shell. Screens are named states; `resolve`
//! applies the redirect rules of the hosted application before any data is
//! fetched, so an anonymous caller never issues a gated request.

use crate::session::Session;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Screen {
    Home,
    Browse,
    Requirements,
    Detail(String),
    Create,
    Login,
    Signup,
    Awards,
}

impl Screen {
    /// Maps an application path onto a screen. Anything unrecognized lands
    /// on home.
    pub(crate) fn from_path(path: &str) -> Self {
        let mut segments = path.split('/').filter(|segment| !segment.is_empty());
        match (segments.next(), segments.next(), segments.next()) {
            (None, ..) => Self::Home,
            (Some("donations"), None, _) => Self::Browse,
            (Some("my-requirements"), None, _) => Self::Requirements,
            (Some("create"), None, _) => Self::Create,
            (Some("post"), Some(id), None) => Self::Detail(id.to_owned()),
            (Some("login"), None, _) => Self::Login,
            (Some("signup"), None, _) => Self::Signup,
            (Some("awards"), None, _) => Self::Awards,
            _ => Self::Home,
        }
    }

    pub(crate) fn path(&self) -> String {
        match self {
            Self::Home => "/".to_owned(),
            Self::Browse => "/donations".to_owned(),
            Self::Requirements => "/my-requirements".to_owned(),
            Self::Detail(id) => format!("/post/{id}"),
            Self::Create => "/create".to_owned(),
            Self::Login => "/login".to_owned(),
            Self::Signup => "/signup".to_owned(),
            Self::Awards => "/awards".to_owned(),
        }
    }
}

/// The landing screen after login: orphanages manage their own posts,
/// everyone else browses the public feed.
pub(crate) fn landing(session: &Session) -> Screen {
    if session.is_orphanage() {
        Screen::Requirements
    } else {
        Screen::Browse
    }
}

/// Applies the session-dependent redirects. Every entry is a direct,
/// idempotent navigation; nothing is retried and re-entering a screen
/// re-fetches its data.
pub(crate) fn resolve(screen: Screen, session: Option<&Session>) -> Screen {
    match (screen, session) {
        (Screen::Create | Screen::Requirements, None) => Screen::Login,
        (Screen::Requirements, Some(session)) if !session.is_orphanage() => Screen::Browse,
        (Screen::Home, Some(session)) => landing(session),
        (other, _) => other,
    }
}

/// Zero-based pagination state. Forward movement is only offered while the
/// server reports more pages; backward movement stops at page zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Pager {
    page: u32,
    total_pages: u32,
    last: bool,
}

impl Pager {
    pub(crate) const fn at(page: u32) -> Self {
        Self {
            page,
            total_pages: 0,
            last: true,
        }
    }

    pub(crate) fn observe(&mut self, total_pages: u32, last: bool) {
        self.total_pages = total_pages;
        self.last = last;
    }

    pub(crate) const fn page(self) -> u32 {
        self.page
    }

    pub(crate) const fn total_pages(self) -> u32 {
        self.total_pages
    }

    pub(crate) const fn next(self) -> Option<u32> {
        if self.last {
            None
        } else {
            Some(self.page + 1)
        }
    }

    pub(crate) const fn prev(self) -> Option<u32> {
        self.page.checked_sub(1)
    }
}
