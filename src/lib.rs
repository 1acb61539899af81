//! catanlog - a machine-parsable, human-readable log of a game of Catan
//!
//! Each `.catan` log contains all publicly known information in a game and is
//! sufficient to replay it from a spectator's point of view.

pub mod clock;
pub mod config;
pub mod error;
pub mod events;
pub mod model;
pub mod testing;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::LogConfig;
pub use error::{LogError, Result};
pub use events::{CatanEvent, CatanLog, GameHeader, GameLog, NoopLog, Piece, PortRecord, TradeItem};
pub use model::{
    Colored, Named, Participant, Player, Port, PortLike, PortType, Resource, Seated, Terrain,
    ValueTagged,
};

/// Install a tracing subscriber for the binaries. `RUST_LOG` overrides `default_filter`.
pub fn init_tracing(default_filter: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
