// SPDX-FileCopyrightText: 2025-2026 Ladle Maintainers
//
// SPDX-License-Identifier: Apache-2.0

use clap::ValueEnum;
use inflector::Inflector as _;
use serde::{Deserialize, Serialize};

/// The closed role taxonomy of the donation platform. The wire strings are
/// exactly the SCREAMING_SNAKE_CASE variant names; everything else in the
/// crate reads the derived capability predicates instead of matching on the
/// variants.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub(crate) enum Role {
    MissionHero,
    Orphanage,
    FoodDonator,
    FoodDeliveryBoy,
}

impl Role {
    pub(crate) fn from_wire(value: &str) -> Option<Self> {
        match value {
            "MISSION_HERO" => Some(Self::MissionHero),
            "ORPHANAGE" => Some(Self::Orphanage),
            "FOOD_DONATOR" => Some(Self::FoodDonator),
            "FOOD_DELIVERY_BOY" => Some(Self::FoodDeliveryBoy),
            _ => None,
        }
    }

    /// Whether this is one of the actor roles that fulfill requirements
    /// rather than post them.
    pub(crate) const fn is_hero(self) -> bool {
        !matches!(self, Self::Orphanage)
    }

    pub(crate) const fn is_orphanage(self) -> bool {
        matches!(self, Self::Orphanage)
    }

    /// Whether this role may create food posts.
    pub(crate) const fn can_publish(self) -> bool {
        matches!(self, Self::FoodDonator | Self::Orphanage)
    }

    /// The path segment of the registration endpoint for this role. The
    /// upstream signup form labels the delivery role "Mission Hero", so both
    /// names register through the same endpoint.
    pub(crate) const fn registry_segment(self) -> &'static str {
        match self {
            Self::MissionHero | Self::FoodDeliveryBoy => "food-delivery-boy",
            Self::FoodDonator => "food-donor",
            Self::Orphanage => "orphanage",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = self.to_possible_value().ok_or(std::fmt::Error)?;
        write!(f, "{}", value.get_name().to_title_case())
    }
}

#[cfg(test)]
mod tests {
    use super::Role;

    #[test]
    fn wire_strings_resolve_to_the_closed_taxonomy() {
        assert_eq!(Role::from_wire("MISSION_HERO"), Some(Role::MissionHero));
        assert_eq!(Role::from_wire("ORPHANAGE"), Some(Role::Orphanage));
        assert_eq!(Role::from_wire("FOOD_DONATOR"), Some(Role::FoodDonator));
        assert_eq!(
            Role::from_wire("FOOD_DELIVERY_BOY"),
            Some(Role::FoodDeliveryBoy)
        );
        assert_eq!(Role::from_wire("ADMIN"), None);
        assert_eq!(Role::from_wire(""), None);
    }

    #[test]
    fn serde_uses_the_wire_strings() {
        let role: Role = serde_json::from_str(r#""FOOD_DONATOR""#).unwrap();
        assert_eq!(role, Role::FoodDonator);
        assert_eq!(
            serde_json::to_string(&Role::FoodDeliveryBoy).unwrap(),
            r#""FOOD_DELIVERY_BOY""#
        );
        assert!(serde_json::from_str::<Role>(r#""SUPERUSER""#).is_err());
    }

    #[test]
    fn capability_flags_partition_the_roles() {
        assert!(Role::MissionHero.is_hero());
        assert!(Role::FoodDonator.is_hero());
        assert!(Role::FoodDeliveryBoy.is_hero());
        assert!(!Role::Orphanage.is_hero());

        assert!(Role::Orphanage.is_orphanage());
        assert!(!Role::MissionHero.is_orphanage());

        assert!(Role::FoodDonator.can_publish());
        assert!(Role::Orphanage.can_publish());
        assert!(!Role::MissionHero.can_publish());
        assert!(!Role::FoodDeliveryBoy.can_publish());
    }

    #[test]
    fn registry_segments_cover_every_role() {
        assert_eq!(Role::FoodDonator.registry_segment(), "food-donor");
        assert_eq!(Role::Orphanage.registry_segment(), "orphanage");
        assert_eq!(Role::MissionHero.registry_segment(), "food-delivery-boy");
        assert_eq!(
            Role::FoodDeliveryBoy.registry_segment(),
            "food-delivery-boy"
        );
    }
}
