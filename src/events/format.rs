//! Line grammar of the .catan format
//!
//! Header block, written once per game:
//! ```text
//! catanlog v0.9.1
//! timestamp: 2016-07-18 12:00:00
//! players: 2
//! name: ross, color: red, seat: 1
//! name: zach, color: orange, seat: 2
//! terrain: wood brick desert
//! numbers: 6 8 None
//! ports: 3:1(1 NW) wood(1 W) ore(3 E)
//! ...CATAN!
//! ```
//!
//! Body, one record per action in call order:
//! ```text
//! red rolls 2 ...DEUCES!
//! red buys road, builds at (1 NW)
//! orange trades [2 wood, 1 brick] to player red for [1 ore]
//! red ends turn after 41s
//! ```
//!
//! Every rendered line ends with `\n`. Nothing here validates its input.

use super::types::{CatanEvent, FORMAT_NAME, FORMAT_VERSION, GameHeader, PortRecord, TradeItem};

/// Sentinel closing the header block
pub const HEADER_SENTINEL: &str = "...CATAN!";

/// Annotation appended to a roll of exactly 2
const DEUCES: &str = " ...DEUCES!";

/// Token for a tile without a number
const NO_NUMBER: &str = "None";

/// Format a trade list: `[2 wood, 1 brick]`, in the order given
pub fn fmt_items(items: &[TradeItem]) -> String {
    let inner = items
        .iter()
        .map(|item| format!("{} {}", item.quantity, item.resource))
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}]", inner)
}

/// Format a number token, `None` when the tile has no number
fn fmt_number(number: &Option<u32>) -> String {
    match number {
        Some(n) => n.to_string(),
        None => NO_NUMBER.to_string(),
    }
}

/// Ports sorted by tile id, then edge direction
pub fn sorted_ports(ports: &[PortRecord]) -> Vec<&PortRecord> {
    let mut sorted: Vec<&PortRecord> = ports.iter().collect();
    sorted.sort_by(|a, b| {
        a.tile_id
            .cmp(&b.tile_id)
            .then_with(|| a.direction.cmp(&b.direction))
    });
    sorted
}

/// Body of the `ports:` line
pub fn fmt_ports(ports: &[PortRecord]) -> String {
    sorted_ports(ports)
        .iter()
        .map(|p| format!("{}({} {})", p.port_type, p.tile_id, p.direction))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render the header block
pub fn render_header(header: &GameHeader) -> String {
    let mut players: Vec<_> = header.players.iter().collect();
    players.sort_by_key(|p| p.seat);

    let mut out = String::new();
    out.push_str(&format!("{} v{}\n", FORMAT_NAME, FORMAT_VERSION));
    out.push_str(&format!("timestamp: {}\n", header.timestamp));
    out.push_str(&format!("players: {}\n", players.len()));
    for p in players {
        out.push_str(&format!(
            "name: {}, color: {}, seat: {}\n",
            p.name, p.color, p.seat
        ));
    }
    out.push_str(&format!("terrain: {}\n", header.terrain.join(" ")));
    out.push_str(&format!(
        "numbers: {}\n",
        header
            .numbers
            .iter()
            .map(fmt_number)
            .collect::<Vec<_>>()
            .join(" ")
    ));
    out.push_str(&format!("ports: {}\n", fmt_ports(&header.ports)));
    out.push_str(HEADER_SENTINEL);
    out.push('\n');
    out
}

/// Render one body record. Knight plays produce two lines.
pub fn render_event(event: &CatanEvent) -> String {
    let line = match event {
        CatanEvent::Roll { color, roll } => {
            format!(
                "{} rolls {}{}",
                color,
                roll,
                if *roll == 2 { DEUCES } else { "" }
            )
        }
        CatanEvent::MoveRobber {
            color,
            location,
            victim,
        } => robber_line(color, location, victim),
        CatanEvent::Buy {
            color,
            piece,
            location,
        } => format!("{} buys {}, builds at {}", color, piece, location),
        CatanEvent::BuyDevCard { color } => format!("{} buys dev card", color),
        CatanEvent::PlayKnight {
            color,
            location,
            victim,
        } => format!(
            "{} plays knight\n{}",
            color,
            robber_line(color, location, victim)
        ),
        CatanEvent::PlayRoadBuilder {
            color,
            first,
            second,
        } => format!(
            "{} plays road builder, builds at {} and {}",
            color, first, second
        ),
        CatanEvent::PlayYearOfPlenty {
            color,
            first,
            second,
        } => format!(
            "{} plays year of plenty, takes {} and {}",
            color, first, second
        ),
        CatanEvent::PlayMonopoly { color, resource } => {
            format!("{} plays monopoly on {}", color, resource)
        }
        CatanEvent::PlayVictoryPoint { color } => format!("{} plays victory point", color),
        CatanEvent::EndTurn { color, after_secs } => match after_secs {
            Some(secs) => format!("{} ends turn after {}s", color, secs),
            None => format!("{} ends turn", color),
        },
        CatanEvent::Win { color } => format!("{} wins", color),
        CatanEvent::TradeWithPort {
            color,
            give,
            port,
            receive,
        } => format!(
            "{} trades {} to port {} for {}",
            color,
            fmt_items(give),
            port,
            fmt_items(receive)
        ),
        CatanEvent::TradeWithPlayer {
            color,
            give,
            other,
            receive,
        } => format!(
            "{} trades {} to player {} for {}",
            color,
            fmt_items(give),
            other,
            fmt_items(receive)
        ),
    };

    format!("{}\n", line)
}

fn robber_line(color: &str, location: &str, victim: &str) -> String {
    format!(
        "{} moves robber to {}, steals from {}",
        color, location, victim
    )
}
