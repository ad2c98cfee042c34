// SPDX-FileCopyrightText: 2025-2026 Ladle Maintainers
//
// SPDX-License-Identifier: Apache-2.0

use serde::Deserialize;

/// The paginated list envelope the server wraps collection responses in.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Page<T> {
    #[serde(default = "Vec::new")]
    pub(crate) content: Vec<T>,
    #[serde(default)]
    pub(crate) total_pages: u32,
    #[serde(default)]
    pub(crate) last: bool,
}
