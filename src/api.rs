// SPDX-FileCopyrightText: 2025-2026 Ladle Maintainers
//
// SPDX-License-Identifier: Apache-2.0

//! Endpoint paths and the request/response shapes of the Muruga Kitchen REST
//! API. The list endpoint is always called with an idempotent `GET` and query
//! parameters, even though some historical server drafts also accepted a
//! `POST` for the same operation.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use url::form_urlencoded;

use crate::model::{ids, Role};

/// The page size every list screen requests.
pub(crate) const PAGE_SIZE: u32 = 12;

/// The fallback shown when the server does not supply an error message.
pub(crate) const GENERIC_ERROR: &str = "Something went wrong";

pub(crate) fn login() -> String {
    "/auth/login".to_owned()
}

pub(crate) fn registry(role: Role) -> String {
    format!("/auth/registry/{}", role.registry_segment())
}

pub(crate) fn food_posts(page: u32, size: u32, orphanage_id: Option<&str>) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    _ = query.append_pair("page", &page.to_string());
    _ = query.append_pair("size", &size.to_string());
    if let Some(id) = orphanage_id {
        _ = query.append_pair("orphanageId", id);
    }
    format!("/food-posts?{}", query.finish())
}

pub(crate) fn food_post(id: &str) -> String {
    format!("/food-posts/{id}")
}

pub(crate) fn create_food_post() -> String {
    "/food-posts".to_owned()
}

pub(crate) fn delete_food_post(id: &str) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    _ = query.append_pair("id", id);
    format!("/food-posts?{}", query.finish())
}

pub(crate) fn user(user_id: &str) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    _ = query.append_pair("userId", user_id);
    format!("/users?{}", query.finish())
}

pub(crate) fn orphanage(orphanage_id: &str) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    _ = query.append_pair("orphanageId", orphanage_id);
    format!("/orphanage?{}", query.finish())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LoginRequest {
    pub(crate) email: String,
    pub(crate) password: String,
}

/// The login response. The role arrives as `role` or `roleName` depending on
/// the server draft, and is validated against the closed taxonomy by the
/// session store rather than here so an unknown role yields a displayable
/// failure.
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LoginResponse {
    pub(crate) token: String,
    #[serde(alias = "roleName")]
    pub(crate) role: String,
    #[serde(default, deserialize_with = "ids::opt_string_or_number")]
    pub(crate) user_id: Option<String>,
    #[serde(default, deserialize_with = "ids::opt_string_or_number")]
    pub(crate) orphanage_id: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RegistryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) name: Option<String>,
    pub(crate) email: String,
    pub(crate) password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) country_code: Option<String>,
}

/// The metadata blob of a food post as the client submits it: the JSON
/// `data` part of the multipart create request, and the whole body of the
/// full-record replace on edit.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FoodPostData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) id: Option<String>,
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) quantity: u32,
    #[serde(
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub(crate) expire_time: Option<OffsetDateTime>,
}

#[derive(Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub(crate) message: Option<String>,
}
