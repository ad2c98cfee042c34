// SPDX-FileCopyrightText: 2025-2026 Ladle Maintainers
//
// SPDX-License-Identifier: Apache-2.0

use log::debug;
use serde::{Deserialize, Deserializer};
use time::{
    format_description::well_known::Rfc3339, macros::format_description, OffsetDateTime,
    PrimitiveDateTime,
};

/// Parses a wire timestamp: RFC 3339, or an offsetless ISO-8601 value that
/// some backend drafts emit, which we take to be UTC.
pub(crate) fn parse(value: &str) -> Option<OffsetDateTime> {
    OffsetDateTime::parse(value, &Rfc3339).ok().or_else(|| {
        PrimitiveDateTime::parse(
            value,
            format_description!(
                version = 2,
                "[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]"
            ),
        )
        .map(PrimitiveDateTime::assume_utc)
        .ok()
    })
}

/// Value parser for timestamp command-line flags, where an unreadable value
/// is the caller's mistake and must be reported.
pub(crate) fn parse_flag(value: &str) -> Result<OffsetDateTime, String> {
    parse(value).ok_or_else(|| {
        format!(r#"could not parse "{}" as an RFC 3339 timestamp"#, value.escape_default())
    })
}

/// Lenient deserializer for optional wire timestamps. An unparseable value
/// degrades to absent: the field is display-only and must not fail the whole
/// record.
pub(crate) fn deserialize_lenient<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<OffsetDateTime>, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.and_then(|raw| {
        let parsed = parse(&raw);
        if parsed.is_none() {
            debug!("Ignoring a timestamp we could not parse: {raw}");
        }
        parsed
    }))
}

pub(crate) fn display(value: &OffsetDateTime) -> String {
    value
        .format(&Rfc3339)
        .unwrap_or_else(|_| value.to_string())
}
