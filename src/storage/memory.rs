// SPDX-FileCopyrightText: 2025-2026 Ladle Maintainers
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{error::Result, session::Session};

use super::{IsPersistent, Storage};

/// Fallback storage for environments without a usable project directory.
/// The session lives for the duration of the process only.
pub(crate) struct Memory {
    data: Arc<RwLock<Option<Session>>>,
}

impl Memory {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self {
            data: Arc::new(RwLock::new(None)),
        }
    }
}

impl IsPersistent for Memory {
    fn is_persistent(&self) -> bool {
        false
    }
}

#[async_trait]
impl Storage for Memory {
    async fn get(&mut self) -> Result<Option<Session>> {
        let guard = self.data.read().await;
        Ok(guard.clone())
    }

    async fn update(&mut self, session: &Session) -> Result<()> {
        let mut guard = self.data.write().await;
        *guard = Some(session.clone());
        Ok(())
    }

    async fn clear(&mut self) -> Result<()> {
        let mut guard = self.data.write().await;
        *guard = None;
        Ok(())
    }
}
