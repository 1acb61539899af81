//! Game event logging in the .catan format
//!
//! Provides a machine-parsable, human-readable record of every public action in
//! a game of Catan, sufficient to replay it from a spectator's point of view.
//! Derivable information (eg discards on a 7) is never logged.
//!
//! `GameLog` is the interface callers log through. `CatanLog` renders and
//! persists, `NoopLog` drops everything.

mod destination;
mod format;
mod logger;
mod noop;
mod types;

pub use destination::{
    Destination, LOG_EXTENSION, TIMESTAMP_FORMAT, format_timestamp, session_path,
};
pub use format::{HEADER_SENTINEL, fmt_items, fmt_ports, render_event, render_header, sorted_ports};
pub use logger::CatanLog;
pub use noop::NoopLog;
pub use types::{
    CatanEvent, FORMAT_NAME, FORMAT_VERSION, GameHeader, Piece, PortRecord, TradeItem,
};

use crate::error::Result;
use crate::model::{Colored, Participant, PortLike, ValueTagged};

/// Event encoder interface.
///
/// Implementors provide `start_game` and `log_event`; the per-action methods
/// read what they need from the model and build the matching record.
/// Locations are opaque, pre-formatted strings such as `(1 NW)`.
pub trait GameLog {
    /// Begin a game: reset the log and write the header block.
    ///
    /// `terrain` and `numbers` are counterclockwise from the top-left tile.
    /// Ports may come in any order.
    fn start_game<P, T, R>(
        &mut self,
        players: &[P],
        terrain: &[T],
        numbers: &[Option<u32>],
        ports: &[R],
    ) -> Result<()>
    where
        P: Participant,
        T: ValueTagged,
        R: PortLike;

    /// Append one body record
    fn log_event(&mut self, event: CatanEvent) -> Result<()>;

    fn roll(&mut self, player: &(impl Colored + ?Sized), roll: i64) -> Result<()> {
        self.log_event(CatanEvent::Roll {
            color: player.color().to_string(),
            roll,
        })
    }

    fn move_robber_and_steal(
        &mut self,
        player: &(impl Colored + ?Sized),
        location: &str,
        victim: &(impl Colored + ?Sized),
    ) -> Result<()> {
        self.log_event(CatanEvent::MoveRobber {
            color: player.color().to_string(),
            location: location.to_string(),
            victim: victim.color().to_string(),
        })
    }

    fn buy(&mut self, player: &(impl Colored + ?Sized), piece: Piece, location: &str) -> Result<()> {
        self.log_event(CatanEvent::Buy {
            color: player.color().to_string(),
            piece,
            location: location.to_string(),
        })
    }

    fn buy_road(&mut self, player: &(impl Colored + ?Sized), location: &str) -> Result<()> {
        self.buy(player, Piece::Road, location)
    }

    fn buy_settlement(&mut self, player: &(impl Colored + ?Sized), location: &str) -> Result<()> {
        self.buy(player, Piece::Settlement, location)
    }

    fn buy_city(&mut self, player: &(impl Colored + ?Sized), location: &str) -> Result<()> {
        self.buy(player, Piece::City, location)
    }

    fn buy_dev_card(&mut self, player: &(impl Colored + ?Sized)) -> Result<()> {
        self.log_event(CatanEvent::BuyDevCard {
            color: player.color().to_string(),
        })
    }

    fn play_knight(
        &mut self,
        player: &(impl Colored + ?Sized),
        location: &str,
        victim: &(impl Colored + ?Sized),
    ) -> Result<()> {
        self.log_event(CatanEvent::PlayKnight {
            color: player.color().to_string(),
            location: location.to_string(),
            victim: victim.color().to_string(),
        })
    }

    fn play_road_builder(
        &mut self,
        player: &(impl Colored + ?Sized),
        first: &str,
        second: &str,
    ) -> Result<()> {
        self.log_event(CatanEvent::PlayRoadBuilder {
            color: player.color().to_string(),
            first: first.to_string(),
            second: second.to_string(),
        })
    }

    fn play_year_of_plenty(
        &mut self,
        player: &(impl Colored + ?Sized),
        first: &(impl ValueTagged + ?Sized),
        second: &(impl ValueTagged + ?Sized),
    ) -> Result<()> {
        self.log_event(CatanEvent::PlayYearOfPlenty {
            color: player.color().to_string(),
            first: first.value().to_string(),
            second: second.value().to_string(),
        })
    }

    fn play_monopoly(
        &mut self,
        player: &(impl Colored + ?Sized),
        resource: &(impl ValueTagged + ?Sized),
    ) -> Result<()> {
        self.log_event(CatanEvent::PlayMonopoly {
            color: player.color().to_string(),
            resource: resource.value().to_string(),
        })
    }

    fn play_victory_point(&mut self, player: &(impl Colored + ?Sized)) -> Result<()> {
        self.log_event(CatanEvent::PlayVictoryPoint {
            color: player.color().to_string(),
        })
    }

    fn end_turn(&mut self, player: &(impl Colored + ?Sized)) -> Result<()> {
        self.log_event(CatanEvent::EndTurn {
            color: player.color().to_string(),
            after_secs: None,
        })
    }

    fn win(&mut self, player: &(impl Colored + ?Sized)) -> Result<()> {
        self.log_event(CatanEvent::Win {
            color: player.color().to_string(),
        })
    }

    /// `give` goes to the port, `receive` comes back to the player
    fn trade_with_port<G: ValueTagged, V: ValueTagged>(
        &mut self,
        player: &(impl Colored + ?Sized),
        give: &[(u32, G)],
        port: &(impl ValueTagged + ?Sized),
        receive: &[(u32, V)],
    ) -> Result<()> {
        self.log_event(CatanEvent::TradeWithPort {
            color: player.color().to_string(),
            give: trade_items(give),
            port: port.value().to_string(),
            receive: trade_items(receive),
        })
    }

    /// `give` goes to `other`, `receive` comes back to the player
    fn trade_with_player<G: ValueTagged, V: ValueTagged>(
        &mut self,
        player: &(impl Colored + ?Sized),
        give: &[(u32, G)],
        other: &(impl Colored + ?Sized),
        receive: &[(u32, V)],
    ) -> Result<()> {
        self.log_event(CatanEvent::TradeWithPlayer {
            color: player.color().to_string(),
            give: trade_items(give),
            other: other.color().to_string(),
            receive: trade_items(receive),
        })
    }
}

fn trade_items<R: ValueTagged>(items: &[(u32, R)]) -> Vec<TradeItem> {
    items
        .iter()
        .map(|(quantity, resource)| TradeItem::new(*quantity, resource))
        .collect()
}
