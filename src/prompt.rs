// SPDX-FileCopyrightText: 2025-2026 Ladle Maintainers
//
// SPDX-License-Identifier: Apache-2.0

use std::io::{self, Write as _};

use async_trait::async_trait;
use secrecy::SecretString;
use tokio::task;

use crate::error::Result;

/// Interactive terminal input for the few places a command needs more than
/// its flags: credentials and destructive-action confirmation.
#[async_trait]
pub(crate) trait Prompt: Send + Sync {
    async fn line(&self, label: &str) -> Result<String>;
    async fn password(&self, label: &str) -> Result<SecretString>;
    async fn confirm(&self, question: &str) -> Result<bool>;
}

#[async_trait]
impl<T: Prompt + ?Sized> Prompt for Box<T> {
    async fn line(&self, label: &str) -> Result<String> {
        (**self).line(label).await
    }

    async fn password(&self, label: &str) -> Result<SecretString> {
        (**self).password(label).await
    }

    async fn confirm(&self, question: &str) -> Result<bool> {
        (**self).confirm(question).await
    }
}

pub(crate) struct TerminalPrompt;

fn read_line(prefix: String) -> io::Result<String> {
    print!("{prefix}");
    io::stdout().flush()?;
    let mut line = String::new();
    _ = io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_owned())
}

#[async_trait]
impl Prompt for TerminalPrompt {
    async fn line(&self, label: &str) -> Result<String> {
        let prefix = format!("{label}: ");
        Ok(task::spawn_blocking(move || read_line(prefix)).await??)
    }

    async fn password(&self, label: &str) -> Result<SecretString> {
        let prefix = format!("{label}: ");
        Ok(task::spawn_blocking(move || {
            rpassword::prompt_password(prefix).map(SecretString::new)
        })
        .await??)
    }

    async fn confirm(&self, question: &str) -> Result<bool> {
        let prefix = format!("{question} [y/N] ");
        let answer = task::spawn_blocking(move || read_line(prefix)).await??;
        Ok(matches!(
            answer.to_ascii_lowercase().as_str(),
            "y" | "yes"
        ))
    }
}
