//! TOML scenario file parsing

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use std::fs;
use std::path::Path;

use crate::events::{CatanEvent, PortRecord};
use crate::model::Player;

/// Complete scenario definition from a TOML file
#[derive(Debug, Deserialize)]
pub struct ScenarioDefinition {
    pub name: String,
    pub description: Option<String>,
    /// Game start time, `%Y-%m-%d %H:%M:%S`
    #[serde(default = "default_start")]
    pub start: String,
    /// Append `after Ns` to end-turn records
    #[serde(default = "default_turn_timing")]
    pub turn_timing: bool,
    /// Header inputs. Without it the scenario logs body records only.
    pub setup: Option<GameSetup>,
    #[serde(default)]
    pub events: Vec<CatanEvent>,
    #[serde(default)]
    pub expect: ScenarioExpectations,
}

fn default_start() -> String {
    "2016-07-18 12:00:00".to_string()
}

fn default_turn_timing() -> bool {
    true
}

/// Inputs to the header block
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GameSetup {
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub terrain: Vec<String>,
    /// Integers, or the string "None" for a tile without a number
    #[serde(default, deserialize_with = "deserialize_numbers")]
    pub numbers: Vec<Option<u32>>,
    #[serde(default)]
    pub ports: Vec<PortRecord>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberToken {
    Number(u32),
    Text(String),
}

fn deserialize_numbers<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<Option<u32>>, D::Error> {
    Vec::<NumberToken>::deserialize(d)?
        .into_iter()
        .map(|token| match token {
            NumberToken::Number(n) => Ok(Some(n)),
            NumberToken::Text(s) if s == "None" => Ok(None),
            NumberToken::Text(s) => Err(D::Error::custom(format!(
                "invalid number token '{}', expected an integer or \"None\"",
                s
            ))),
        })
        .collect()
}

/// Expected log content
#[derive(Debug, Default, Deserialize)]
pub struct ScenarioExpectations {
    /// Entire log, line by line
    #[serde(default)]
    pub output: Vec<String>,
    /// Final lines of the log
    #[serde(default)]
    pub last: Vec<String>,
    /// Lines that must appear somewhere
    #[serde(default)]
    pub contains: Vec<String>,
    /// Total number of lines
    pub line_count: Option<usize>,
}

/// Parse a scenario file from path
pub fn parse_scenario_file(path: &Path) -> Result<ScenarioDefinition, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;

    toml::from_str(&content).map_err(|e| format!("Failed to parse {}: {}", path.display(), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Piece;

    #[test]
    fn test_parse_basic() {
        let toml = r#"
name = "Build"
description = "Road next to a 3:1 port"

[setup]
terrain = ["wood", "desert"]
numbers = [6, "None"]

[[setup.players]]
seat = 1
name = "ross"
color = "red"

[[setup.ports]]
tile_id = 1
direction = "NW"
type = "3:1"

[[events]]
type = "buy"
color = "red"
piece = "road"
location = "(1 NW)"

[[events]]
type = "trade_with_port"
color = "red"
give = [{ quantity = 4, resource = "wood" }]
port = "4:1"
receive = [{ quantity = 1, resource = "ore" }]

[expect]
last = ["red buys road, builds at (1 NW)"]
"#;
        let def: ScenarioDefinition = toml::from_str(toml).unwrap();
        assert_eq!(def.name, "Build");
        assert_eq!(def.description.as_deref(), Some("Road next to a 3:1 port"));
        assert_eq!(def.start, "2016-07-18 12:00:00");
        assert!(def.turn_timing);
        let setup = def.setup.unwrap();
        assert_eq!(setup.numbers, vec![Some(6), None]);
        assert_eq!(setup.ports[0].port_type, "3:1");
        assert_eq!(setup.players[0].color, "red");
        assert_eq!(
            def.events[0],
            CatanEvent::Buy {
                color: "red".to_string(),
                piece: Piece::Road,
                location: "(1 NW)".to_string(),
            }
        );
        assert_eq!(def.events.len(), 2);
    }

    #[test]
    fn test_rejects_bad_number_token() {
        let toml = r#"
name = "Bad"
[setup]
numbers = ["six"]
"#;
        let err = toml::from_str::<ScenarioDefinition>(toml).unwrap_err();
        assert!(err.to_string().contains("invalid number token"));
    }

    #[test]
    fn test_events_only() {
        let toml = r#"
name = "Roll"
[[events]]
type = "roll"
color = "blue"
roll = 9
"#;
        let def: ScenarioDefinition = toml::from_str(toml).unwrap();
        assert!(def.setup.is_none());
        assert!(def.description.is_none());
        assert!(def.expect.output.is_empty());
    }
}
