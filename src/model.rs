//! Read-only views of the game model that the log consumes.
//!
//! The logger never owns game state. Anything that can answer the accessor
//! traits below can be logged, so a board engine passes its own types straight
//! in. The concrete types here cover the base game and are what the scenario
//! runner and the binaries use.

use serde::{Deserialize, Serialize};

/// Something with a display name (players)
pub trait Named {
    fn name(&self) -> &str;
}

/// Something identified in the log by its color token (players)
pub trait Colored {
    fn color(&self) -> &str;
}

/// Something seated at the table. Seats are positive and unique per game.
pub trait Seated {
    fn seat(&self) -> u32;
}

/// A player as the game header needs it
pub trait Participant: Named + Colored + Seated {}

impl<T: Named + Colored + Seated + ?Sized> Participant for T {}

/// Anything with a canonical lowercase string form: terrain, resources, port types
pub trait ValueTagged {
    fn value(&self) -> &str;
}

impl ValueTagged for str {
    fn value(&self) -> &str {
        self
    }
}

impl ValueTagged for String {
    fn value(&self) -> &str {
        self
    }
}

impl<T: ValueTagged + ?Sized> ValueTagged for &T {
    fn value(&self) -> &str {
        (**self).value()
    }
}

/// A port on the board edge
pub trait PortLike {
    /// Tile the port touches
    fn tile_id(&self) -> u32;
    /// Edge of that tile, eg "NW"
    fn direction(&self) -> &str;
    fn port_type(&self) -> &dyn ValueTagged;
}

impl<T: PortLike + ?Sized> PortLike for &T {
    fn tile_id(&self) -> u32 {
        (**self).tile_id()
    }

    fn direction(&self) -> &str {
        (**self).direction()
    }

    fn port_type(&self) -> &dyn ValueTagged {
        (**self).port_type()
    }
}

/// A seated player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub seat: u32,
    pub name: String,
    pub color: String,
}

impl Player {
    pub fn new(seat: u32, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            seat,
            name: name.into(),
            color: color.into(),
        }
    }
}

impl Named for Player {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Colored for Player {
    fn color(&self) -> &str {
        &self.color
    }
}

impl Seated for Player {
    fn seat(&self) -> u32 {
        self.seat
    }
}

/// Hex terrain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Terrain {
    Wood,
    Brick,
    Wheat,
    Sheep,
    Ore,
    Desert,
}

impl ValueTagged for Terrain {
    fn value(&self) -> &str {
        match self {
            Terrain::Wood => "wood",
            Terrain::Brick => "brick",
            Terrain::Wheat => "wheat",
            Terrain::Sheep => "sheep",
            Terrain::Ore => "ore",
            Terrain::Desert => "desert",
        }
    }
}

/// Resource cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    Wood,
    Brick,
    Wheat,
    Sheep,
    Ore,
}

impl ValueTagged for Resource {
    fn value(&self) -> &str {
        match self {
            Resource::Wood => "wood",
            Resource::Brick => "brick",
            Resource::Wheat => "wheat",
            Resource::Sheep => "sheep",
            Resource::Ore => "ore",
        }
    }
}

/// Exchange offered by a port
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PortType {
    #[serde(rename = "4:1")]
    Any4,
    #[serde(rename = "3:1")]
    Any3,
    #[serde(rename = "wood")]
    Wood,
    #[serde(rename = "brick")]
    Brick,
    #[serde(rename = "wheat")]
    Wheat,
    #[serde(rename = "sheep")]
    Sheep,
    #[serde(rename = "ore")]
    Ore,
}

impl ValueTagged for PortType {
    fn value(&self) -> &str {
        match self {
            PortType::Any4 => "4:1",
            PortType::Any3 => "3:1",
            PortType::Wood => "wood",
            PortType::Brick => "brick",
            PortType::Wheat => "wheat",
            PortType::Sheep => "sheep",
            PortType::Ore => "ore",
        }
    }
}

macro_rules! display_as_value {
    ($($ty:ty),*) => {
        $(
            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(self.value())
                }
            }
        )*
    };
}

display_as_value!(Terrain, Resource, PortType);

/// A port placed on a tile edge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Port {
    pub tile_id: u32,
    pub direction: String,
    pub port_type: PortType,
}

impl Port {
    pub fn new(tile_id: u32, direction: impl Into<String>, port_type: PortType) -> Self {
        Self {
            tile_id,
            direction: direction.into(),
            port_type,
        }
    }
}

impl PortLike for Port {
    fn tile_id(&self) -> u32 {
        self.tile_id
    }

    fn direction(&self) -> &str {
        &self.direction
    }

    fn port_type(&self) -> &dyn ValueTagged {
        &self.port_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_values() {
        assert_eq!(Terrain::Desert.value(), "desert");
        assert_eq!(Resource::Wheat.value(), "wheat");
        assert_eq!(PortType::Any3.value(), "3:1");
        assert_eq!(PortType::Any4.to_string(), "4:1");
    }

    #[test]
    fn test_port_type_serde_names() {
        let parsed: PortType = serde_json::from_str("\"3:1\"").unwrap();
        assert_eq!(parsed, PortType::Any3);
        let parsed: Terrain = serde_json::from_str("\"sheep\"").unwrap();
        assert_eq!(parsed, Terrain::Sheep);
    }

    #[test]
    fn test_player_accessors() {
        let p = Player::new(2, "zach", "orange");
        assert_eq!(p.name(), "zach");
        assert_eq!(p.color(), "orange");
        assert_eq!(p.seat(), 2);
    }
}
