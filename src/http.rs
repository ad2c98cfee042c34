// SPDX-FileCopyrightText: 2025-2026 Ladle Maintainers
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use log::debug;
use reqwest::multipart;
use secrecy::{ExposeSecret as _, SecretString};
use url::Url;

use crate::{
    api,
    client::{Api, Upload},
    error::{self, Result},
    metadata,
    model::{OrphanageProfile, Page, Post, Role, UserProfile},
};

/// The reqwest-backed transport. Attaches the bearer token when one exists,
/// speaks JSON both ways, and turns a non-success status into an error
/// carrying the server's `message` field. No client-side timeout is imposed;
/// the transport's defaults apply.
pub(crate) struct Remote {
    client: reqwest::Client,
    root: Url,
    token: Option<SecretString>,
}

impl Remote {
    pub(crate) fn new(root: Url, token: Option<SecretString>) -> Result<Self> {
        Ok(Self {
            client: reqwest::Client::builder()
                .user_agent(metadata::USER_AGENT.as_str())
                .build()?,
            root,
            token,
        })
    }

    /// The REST API lives under /api on the server root.
    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.root.join(&format!("api{path}"))?)
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response> {
        let request = match &self.token {
            Some(token) => request.bearer_auth(token.expose_secret()),
            None => request,
        };

        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .json::<api::ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| api::GENERIC_ERROR.to_owned());
        Err(error::Api::Rejected {
            status: status.as_u16(),
            message,
        }
        .into())
    }
}

#[async_trait]
impl Api for Remote {
    async fn login(&self, request: &api::LoginRequest) -> Result<api::LoginResponse> {
        let url = self.endpoint(&api::login())?;
        let response = self.send(self.client.post(url).json(request)).await?;
        Ok(response.json().await?)
    }

    async fn register(&self, role: Role, profile: &api::RegistryRequest) -> Result<()> {
        let url = self.endpoint(&api::registry(role))?;
        _ = self.send(self.client.post(url).json(profile)).await?;
        Ok(())
    }

    async fn food_posts(
        &self,
        page: u32,
        size: u32,
        orphanage_id: Option<&str>,
    ) -> Result<Page<Post>> {
        debug!("Fetching page {page} of food posts");
        let url = self.endpoint(&api::food_posts(page, size, orphanage_id))?;
        let response = self.send(self.client.get(url)).await?;
        Ok(response.json().await?)
    }

    async fn food_post(&self, id: &str) -> Result<Post> {
        let url = self.endpoint(&api::food_post(id))?;
        let response = self.send(self.client.get(url)).await?;
        Ok(response.json().await?)
    }

    async fn create_food_post(
        &self,
        data: &api::FoodPostData,
        image: Option<Upload>,
    ) -> Result<Post> {
        let blob = serde_json::to_string(data)?;
        let mut form = multipart::Form::new().part(
            "data",
            multipart::Part::text(blob).mime_str("application/json")?,
        );
        if let Some(upload) = image {
            form = form.part(
                "file",
                multipart::Part::bytes(upload.bytes).file_name(upload.file_name),
            );
        }

        let url = self.endpoint(&api::create_food_post())?;
        let response = self.send(self.client.post(url).multipart(form)).await?;
        Ok(response.json().await?)
    }

    async fn update_food_post(&self, id: &str, data: &api::FoodPostData) -> Result<Post> {
        let url = self.endpoint(&api::food_post(id))?;
        let response = self.send(self.client.put(url).json(data)).await?;
        Ok(response.json().await?)
    }

    async fn delete_food_post(&self, id: &str) -> Result<()> {
        let url = self.endpoint(&api::delete_food_post(id))?;
        _ = self.send(self.client.delete(url)).await?;
        Ok(())
    }

    async fn user_profile(&self, user_id: &str) -> Result<UserProfile> {
        let url = self.endpoint(&api::user(user_id))?;
        let response = self.send(self.client.get(url)).await?;
        Ok(response.json().await?)
    }

    async fn orphanage_profile(&self, orphanage_id: &str) -> Result<OrphanageProfile> {
        let url = self.endpoint(&api::orphanage(orphanage_id))?;
        let response = self.send(self.client.get(url)).await?;
        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use super::Remote;

    #[test]
    fn endpoints_join_under_the_api_prefix() {
        let remote =
            Remote::new(Url::parse("http://127.0.0.1:8080").unwrap(), None).unwrap();
        assert_eq!(
            remote.endpoint("/food-posts/abc").unwrap().as_str(),
            "http://127.0.0.1:8080/api/food-posts/abc"
        );
        assert_eq!(
            remote.endpoint("/food-posts?page=0&size=12").unwrap().as_str(),
            "http://127.0.0.1:8080/api/food-posts?page=0&size=12"
        );
    }
}
