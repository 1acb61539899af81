//! Event type definitions for the .catan format

use serde::{Deserialize, Serialize};

use crate::model::{Colored, Named, Player, PortLike, Seated, ValueTagged};

/// Format identifier written on the first header line
pub const FORMAT_NAME: &str = "catanlog";
/// Format version (semver)
pub const FORMAT_VERSION: &str = "0.9.1";

/// Piece bought and placed on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Piece {
    Road,
    Settlement,
    City,
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Piece::Road => write!(f, "road"),
            Piece::Settlement => write!(f, "settlement"),
            Piece::City => write!(f, "city"),
        }
    }
}

/// One `<quantity> <resource>` entry of a trade
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeItem {
    pub quantity: u32,
    pub resource: String,
}

impl TradeItem {
    pub fn new(quantity: u32, resource: &(impl ValueTagged + ?Sized)) -> Self {
        Self {
            quantity,
            resource: resource.value().to_string(),
        }
    }
}

impl<R: ValueTagged> From<(u32, R)> for TradeItem {
    fn from((quantity, resource): (u32, R)) -> Self {
        Self::new(quantity, &resource)
    }
}

/// A port as it appears on the header line. Port type is kept as text so
/// anything the model hands over is written unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortRecord {
    pub tile_id: u32,
    pub direction: String,
    #[serde(rename = "type")]
    pub port_type: String,
}

impl PortRecord {
    pub fn from_port(port: &(impl PortLike + ?Sized)) -> Self {
        Self {
            tile_id: port.tile_id(),
            direction: port.direction().to_string(),
            port_type: port.port_type().value().to_string(),
        }
    }
}

impl PortLike for PortRecord {
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

/// Everything the header block needs, captured at game start
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameHeader {
    /// Game start, already formatted
    pub timestamp: String,
    /// Participants (rendered in seat order)
    pub players: Vec<Player>,
    /// Terrain per tile, counterclockwise from the top-left
    pub terrain: Vec<String>,
    /// Number token per tile, same order as terrain
    pub numbers: Vec<Option<u32>>,
    /// Ports in any order
    pub ports: Vec<PortRecord>,
}

impl GameHeader {
    /// Copy what the header needs out of the model. Nothing is retained.
    pub fn capture<P, T, R>(
        timestamp: String,
        players: &[P],
        terrain: &[T],
        numbers: &[Option<u32>],
        ports: &[R],
    ) -> Self
    where
        P: Named + Colored + Seated,
        T: ValueTagged,
        R: PortLike,
    {
        Self {
            timestamp,
            players: players
                .iter()
                .map(|p| Player::new(p.seat(), p.name(), p.color()))
                .collect(),
            terrain: terrain.iter().map(|t| t.value().to_string()).collect(),
            numbers: numbers.to_vec(),
            ports: ports.iter().map(PortRecord::from_port).collect(),
        }
    }
}

/// All body records, one variant per public game action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CatanEvent {
    /// `$color rolls $number`
    Roll { color: String, roll: i64 },
    /// `$color moves robber to $location, steals from $color`
    MoveRobber {
        color: String,
        location: String,
        victim: String,
    },
    /// `$color buys $piece, builds at $location`
    Buy {
        color: String,
        piece: Piece,
        location: String,
    },
    BuyDevCard { color: String },
    /// Two lines: the knight play, then the robber move
    PlayKnight {
        color: String,
        location: String,
        victim: String,
    },
    PlayRoadBuilder {
        color: String,
        first: String,
        second: String,
    },
    PlayYearOfPlenty {
        color: String,
        first: String,
        second: String,
    },
    PlayMonopoly { color: String, resource: String },
    PlayVictoryPoint { color: String },
    /// `after_secs` is filled in by the session when turn timing is on
    EndTurn {
        color: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        after_secs: Option<i64>,
    },
    Win { color: String },
    TradeWithPort {
        color: String,
        give: Vec<TradeItem>,
        port: String,
        receive: Vec<TradeItem>,
    },
    TradeWithPlayer {
        color: String,
        give: Vec<TradeItem>,
        other: String,
        receive: Vec<TradeItem>,
    },
}

impl CatanEvent {
    /// Color of the acting player
    pub fn color(&self) -> &str {
        match self {
            CatanEvent::Roll { color, .. }
            | CatanEvent::MoveRobber { color, .. }
            | CatanEvent::Buy { color, .. }
            | CatanEvent::BuyDevCard { color }
            | CatanEvent::PlayKnight { color, .. }
            | CatanEvent::PlayRoadBuilder { color, .. }
            | CatanEvent::PlayYearOfPlenty { color, .. }
            | CatanEvent::PlayMonopoly { color, .. }
            | CatanEvent::PlayVictoryPoint { color }
            | CatanEvent::EndTurn { color, .. }
            | CatanEvent::Win { color }
            | CatanEvent::TradeWithPort { color, .. }
            | CatanEvent::TradeWithPlayer { color, .. } => color,
        }
    }

    /// Short name used in tracing output
    pub fn kind(&self) -> &'static str {
        match self {
            CatanEvent::Roll { .. } => "roll",
            CatanEvent::MoveRobber { .. } => "move_robber",
            CatanEvent::Buy { .. } => "buy",
            CatanEvent::BuyDevCard { .. } => "buy_dev_card",
            CatanEvent::PlayKnight { .. } => "play_knight",
            CatanEvent::PlayRoadBuilder { .. } => "play_road_builder",
            CatanEvent::PlayYearOfPlenty { .. } => "play_year_of_plenty",
            CatanEvent::PlayMonopoly { .. } => "play_monopoly",
            CatanEvent::PlayVictoryPoint { .. } => "play_victory_point",
            CatanEvent::EndTurn { .. } => "end_turn",
            CatanEvent::Win { .. } => "win",
            CatanEvent::TradeWithPort { .. } => "trade_with_port",
            CatanEvent::TradeWithPlayer { .. } => "trade_with_player",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Port, PortType, Resource, Terrain};

    #[test]
    fn test_capture_copies_model_values() {
        let players = [Player::new(1, "ross", "red")];
        let ports = [Port::new(5, "NW", PortType::Any3)];
        let header = GameHeader::capture(
            "2016-07-18 12:00:00".to_string(),
            &players,
            &[Terrain::Wood, Terrain::Desert],
            &[Some(6), None],
            &ports,
        );
        assert_eq!(header.terrain, vec!["wood", "desert"]);
        assert_eq!(header.ports[0].port_type, "3:1");
        assert_eq!(header.players[0].name, "ross");
    }

    #[test]
    fn test_trade_item_from_tuple() {
        let item: TradeItem = (2, Resource::Brick).into();
        assert_eq!(item.quantity, 2);
        assert_eq!(item.resource, "brick");
    }

    #[test]
    fn test_event_tagged_deserialize() {
        let event: CatanEvent =
            serde_json::from_str(r#"{"type":"buy","color":"red","piece":"city","location":"(1 NW)"}"#)
                .unwrap();
        assert_eq!(
            event,
            CatanEvent::Buy {
                color: "red".to_string(),
                piece: Piece::City,
                location: "(1 NW)".to_string(),
            }
        );
        assert_eq!(event.kind(), "buy");
        assert_eq!(event.color(), "red");
    }
}
