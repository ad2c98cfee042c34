// SPDX-FileCopyrightText: 2025-2026 Ladle Maintainers
//
// SPDX-License-Identifier: Apache-2.0

use std::path::Path;

use async_trait::async_trait;

use crate::{
    api,
    error::Result,
    model::{OrphanageProfile, Page, Post, Role, UserProfile},
};

/// An image file staged for a multipart create request.
#[derive(Clone)]
pub(crate) struct Upload {
    pub(crate) file_name: String,
    pub(crate) bytes: Vec<u8>,
}

impl Upload {
    pub(crate) fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .map_or_else(|| "image".to_owned(), |name| name.to_string_lossy().into_owned());
        Ok(Self {
            file_name,
            bytes: std::fs::read(path)?,
        })
    }
}

/// The domain verbs every screen calls through. Screens never see the
/// transport, and tests substitute a recording stub.
#[async_trait]
pub(crate) trait Api {
    async fn login(&self, request: &api::LoginRequest) -> Result<api::LoginResponse>;

    async fn register(&self, role: Role, profile: &api::RegistryRequest) -> Result<()>;

    async fn food_posts(
        &self,
        page: u32,
        size: u32,
        orphanage_id: Option<&str>,
    ) -> Result<Page<Post>>;

    async fn food_post(&self, id: &str) -> Result<Post>;

    async fn create_food_post(
        &self,
        data: &api::FoodPostData,
        image: Option<Upload>,
    ) -> Result<Post>;

    async fn update_food_post(&self, id: &str, data: &api::FoodPostData) -> Result<Post>;

    async fn delete_food_post(&self, id: &str) -> Result<()>;

    async fn user_profile(&self, user_id: &str) -> Result<UserProfile>;

    async fn orphanage_profile(&self, orphanage_id: &str) -> Result<OrphanageProfile>;
}

#[async_trait]
impl Api for Box<dyn Api + Send + Sync + '_> {
    async fn login(&self, request: &api::LoginRequest) -> Result<api::LoginResponse> {
        (**self).login(request).await
    }

    async fn register(&self, role: Role, profile: &api::RegistryRequest) -> Result<()> {
        (**self).register(role, profile).await
    }

    async fn food_posts(
        &self,
        page: u32,
        size: u32,
        orphanage_id: Option<&str>,
    ) -> Result<Page<Post>> {
        (**self).food_posts(page, size, orphanage_id).await
    }

    async fn food_post(&self, id: &str) -> Result<Post> {
        (**self).food_post(id).await
    }

    async fn create_food_post(
        &self,
        data: &api::FoodPostData,
        image: Option<Upload>,
    ) -> Result<Post> {
        (**self).create_food_post(data, image).await
    }

    async fn update_food_post(&self, id: &str, data: &api::FoodPostData) -> Result<Post> {
        (**self).update_food_post(id, data).await
    }

    async fn delete_food_post(&self, id: &str) -> Result<()> {
        (**self).delete_food_post(id).await
    }

    async fn user_profile(&self, user_id: &str) -> Result<UserProfile> {
        (**self).user_profile(user_id).await
    }

    async fn orphanage_profile(&self, orphanage_id: &str) -> Result<OrphanageProfile> {
        (**self).orphanage_profile(orphanage_id).await
    }
}
