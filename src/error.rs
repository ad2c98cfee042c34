// SPDX-FileCopyrightText: 2025-2026 Ladle Maintainers
//
// SPDX-License-Identifier: Apache-2.0

use std::{io, result};

use thiserror::Error;

use crate::model::Role;

pub(crate) type Result<T, E = Error> = result::Result<T, E>;

#[derive(Error, Debug)]
pub(crate) enum Error {
    #[error("IO operation failed: {0}")]
    Io(#[from] io::Error),
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("JSON format error: {0}")]
    Json(serde_json::Error),
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("API error: {0}")]
    Api(#[from] Api),
    #[error("session error: {0}")]
    Session(#[from] Session),
    #[error("command execution failed")]
    Command,
    #[error("operation cancelled")]
    Cancelled,
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        // LINT: Deliberate fall-through that should catch future cases added to
        // the enum.
        #[allow(clippy::wildcard_enum_match_arm)]
        match value.classify() {
            serde_json::error::Category::Io => Self::Io(value.into()),
            _ => Self::Json(value),
        }
    }
}

impl From<tokio::task::JoinError> for Error {
    fn from(value: tokio::task::JoinError) -> Self {
        Self::Io(value.into())
    }
}

#[derive(Error, Debug)]
pub(crate) enum Api {
    #[error("server rejected the request (HTTP {status}): {message}")]
    Rejected { status: u16, message: String },
    #[error(r#"server reported a role that this client does not recognize: "{}""#, .0.escape_default())]
    UnknownRole(String),
}

#[derive(Error, Debug)]
pub(crate) enum Session {
    #[error("you are not logged in (run `ladle login` first)")]
    Unauthorized,
    #[error("your role {0} is not allowed to perform this action")]
    Forbidden(Role),
}
