/*
 * Catalog Module
 *
 * Static definitions of everything that can appear in the night sky and the
 * movement behaviours an object can be assigned when it spawns. Weights are
 * relative and do not need to add up to anything in particular.
 */

use nannou::color::{rgb8, Rgb8};
use std::fmt;

use crate::sampling::WeightedChoice;
use crate::error::SkyError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ObjectType {
    Plane,
    Helicopter,
    Satellite,
    Meteor,
    Rare,
}

impl ObjectType {
    pub const COUNT: usize = 5;

    pub const ALL: [ObjectType; Self::COUNT] = [
        ObjectType::Plane,
        ObjectType::Helicopter,
        ObjectType::Satellite,
        ObjectType::Meteor,
        ObjectType::Rare,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ObjectType::Plane => "Plane",
            ObjectType::Helicopter => "Helicopter",
            ObjectType::Satellite => "Satellite",
            ObjectType::Meteor => "Meteor",
            ObjectType::Rare => "Rare",
        }
    }

    pub fn base_color(self) -> Rgb8 {
        match self {
            ObjectType::Plane => rgb8(255, 0, 0),
            ObjectType::Helicopter => rgb8(0, 0, 255),
            ObjectType::Satellite => rgb8(255, 255, 255),
            ObjectType::Meteor => rgb8(255, 255, 150),
            ObjectType::Rare => rgb8(150, 0, 150),
        }
    }

    pub fn spawn_weight(self) -> u32 {
        match self {
            ObjectType::Plane => 30,
            ObjectType::Helicopter => 20,
            ObjectType::Satellite => 20,
            ObjectType::Meteor => 20,
            ObjectType::Rare => 10,
        }
    }

    // Position in ALL, used to index per-type counters
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How an object moves across the sky.
///
/// Every behaviour currently drifts in a straight line; `SkyObject::update`
/// dispatches on this tag so each one can grow its own kinematics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Movement {
    Normal,
    HoverZip,
    Rare,
    Orbit,
    ShootingStar,
}

impl Movement {
    pub const ALL: [Movement; 5] = [
        Movement::Normal,
        Movement::HoverZip,
        Movement::Rare,
        Movement::Orbit,
        Movement::ShootingStar,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Movement::Normal => "normal",
            Movement::HoverZip => "hover_zip",
            Movement::Rare => "rare",
            Movement::Orbit => "orbit",
            Movement::ShootingStar => "shooting_star",
        }
    }

    pub fn selection_weight(self) -> u32 {
        match self {
            Movement::Normal => 35,
            Movement::HoverZip => 25,
            Movement::Rare => 10,
            Movement::Orbit => 15,
            Movement::ShootingStar => 15,
        }
    }

    /// Weighted table over every movement behaviour.
    pub fn table() -> Result<WeightedChoice<Movement>, SkyError> {
        WeightedChoice::new(Movement::ALL.iter().map(|&m| (m, m.selection_weight())))
    }
}

impl fmt::Display for Movement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_position_in_all() {
        for (i, t) in ObjectType::ALL.iter().enumerate() {
            assert_eq!(t.index(), i);
        }
    }

    #[test]
    fn every_weight_is_positive() {
        assert!(ObjectType::ALL.iter().all(|t| t.spawn_weight() > 0));
        assert!(Movement::ALL.iter().all(|m| m.selection_weight() > 0));
    }

    #[test]
    fn catalog_colors() {
        assert_eq!(ObjectType::Plane.base_color(), rgb8(255, 0, 0));
        assert_eq!(ObjectType::Meteor.base_color(), rgb8(255, 255, 150));
        assert_eq!(ObjectType::Rare.base_color(), rgb8(150, 0, 150));
    }

    #[test]
    fn names_are_displayed() {
        assert_eq!(ObjectType::Helicopter.to_string(), "Helicopter");
        assert_eq!(Movement::ShootingStar.to_string(), "shooting_star");
    }
}
