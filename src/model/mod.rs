// SPDX-FileCopyrightText: 2025-2026 Ladle Maintainers
//
// SPDX-License-Identifier: Apache-2.0

pub(crate) mod ids;
pub(crate) mod page;
pub(crate) mod post;
pub(crate) mod profile;
pub(crate) mod role;
pub(crate) mod timestamp;

pub(crate) use page::Page;
pub(crate) use post::Post;
pub(crate) use profile::{OrphanageProfile, UserProfile};
pub(crate) use role::Role;
