// SPDX-FileCopyrightText: 2025-2026 Ladle Maintainers
//
// SPDX-License-Identifier: Apache-2.0

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use async_trait::async_trait;

use crate::{error::Result, metadata, session::Session};

use super::{IsPersistent, Storage};

pub(crate) struct File {
    path: PathBuf,
}

impl File {
    pub(crate) fn new<P: AsRef<Path>>(file: P) -> Option<Self> {
        metadata::PROJECT_DIRS.as_ref().map(|dirs| Self {
            path: dirs.data_dir().to_owned().join(file),
        })
    }
}

impl IsPersistent for File {
    fn is_persistent(&self) -> bool {
        true
    }
}

#[async_trait]
impl Storage for File {
    async fn get(&mut self) -> Result<Option<Session>> {
        match fs::File::open(&self.path) {
            Ok(fp) => Ok(Some(serde_json::from_reader(fp)?)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn update(&mut self, session: &Session) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = fs::File::create(&self.path)?;
        serde_json::to_writer(file, session)?;
        Ok(())
    }

    // Logout must succeed even when no session was ever stored.
    async fn clear(&mut self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use crate::{
        model::Role,
        session::Session,
        storage::{IsPersistent, Storage},
    };

    use super::File;

    fn file_in(dir: &tempfile::TempDir) -> File {
        File {
            path: dir.path().join("session.json"),
        }
    }

    #[tokio::test]
    async fn sessions_round_trip_through_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = file_in(&dir);
        assert!(storage.is_persistent());

        let session = Session::new(
            "tok-1".to_owned(),
            Role::FoodDonator,
            Some("donor@example.com".to_owned()),
            Some("3".to_owned()),
            None,
        );
        storage.update(&session).await.unwrap();

        let restored = storage.get().await.unwrap().unwrap();
        assert_eq!(restored.role(), Role::FoodDonator);
        assert_eq!(restored.email(), Some("donor@example.com"));
        assert_eq!(restored.user_id(), Some("3"));
    }

    #[tokio::test]
    async fn a_missing_file_reads_as_no_session() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = file_in(&dir);
        assert!(storage.get().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn clearing_removes_the_file_and_tolerates_absence() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = file_in(&dir);

        // Nothing stored yet: clearing is still fine.
        storage.clear().await.unwrap();

        let session = Session::new("tok-1".to_owned(), Role::MissionHero, None, None, None);
        storage.update(&session).await.unwrap();
        assert!(dir.path().join("session.json").exists());

        storage.clear().await.unwrap();
        assert!(!dir.path().join("session.json").exists());
    }

    #[tokio::test]
    async fn a_corrupt_file_surfaces_an_error_for_the_store_to_tolerate() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("session.json"), "not json").unwrap();
        let mut storage = file_in(&dir);
        assert!(storage.get().await.is_err());
    }
}
