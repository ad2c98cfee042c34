// SPDX-FileCopyrightText: 2025-2026 Ladle Maintainers
//
// SPDX-License-Identifier: Apache-2.0

mod file;
mod memory;

use async_trait::async_trait;

use crate::{error::Result, session::Session};

pub(crate) use file::File;
pub(crate) use memory::Memory;

pub(crate) trait IsPersistent {
    fn is_persistent(&self) -> bool;
}

impl<T: IsPersistent + ?Sized> IsPersistent for Box<T> {
    fn is_persistent(&self) -> bool {
        (**self).is_persistent()
    }
}

/// Durable storage for the one session record this client owns.
#[async_trait]
pub(crate) trait Storage: Send + Sync + IsPersistent {
    async fn get(&mut self) -> Result<Option<Session>>;
    async fn update(&mut self, session: &Session) -> Result<()>;
    async fn clear(&mut self) -> Result<()>;
}

#[async_trait]
impl<T: Storage + ?Sized> Storage for Box<T> {
    async fn get(&mut self) -> Result<Option<Session>> {
        (**self).get().await
    }

    async fn update(&mut self, session: &Session) -> Result<()> {
        (**self).update(session).await
    }

    async fn clear(&mut self) -> Result<()> {
        (**self).clear().await
    }
}
