//! Log session: buffer, flush bookkeeping, and session metadata
//!
//! Every record is rendered into an in-memory buffer. `flush` writes whatever
//! was added since the last successful flush and advances the flushed offset
//! only once the write went through, so a failed flush can be retried.

use chrono::NaiveDateTime;
use std::path::PathBuf;
use tracing::{debug, info};

use super::GameLog;
use super::destination::{Destination, format_timestamp, session_path};
use super::format::{render_event, render_header};
use super::types::{CatanEvent, GameHeader};
use crate::clock::{Clock, SystemClock, elapsed_secs};
use crate::config::LogConfig;
use crate::error::Result;
use crate::model::{Participant, Player, PortLike, ValueTagged};

/// Active .catan log for one game at a time
pub struct CatanLog {
    buffer: String,
    flushed: usize,
    config: LogConfig,
    destination: Destination,
    clock: Box<dyn Clock>,
    game_start: NaiveDateTime,
    last_turn: NaiveDateTime,
    players: Vec<Player>,
}

impl CatanLog {
    /// Create a log reading wall-clock time
    pub fn new(config: LogConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }

    pub fn with_clock(config: LogConfig, clock: impl Clock + 'static) -> Self {
        let now = clock.now();
        Self {
            buffer: String::new(),
            flushed: 0,
            destination: Destination::from_config(&config),
            config,
            clock: Box::new(clock),
            game_start: now,
            last_turn: now,
            players: Vec::new(),
        }
    }

    pub fn config(&self) -> &LogConfig {
        &self.config
    }

    /// Participants of the current game, in seat order
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Bytes of the buffer already written to the destination
    pub fn flushed_offset(&self) -> usize {
        self.flushed
    }

    /// Game start formatted for the header and file name
    pub fn timestamp_str(&self) -> String {
        format_timestamp(&self.game_start)
    }

    /// File that `flush` appends to in file mode.
    ///
    /// Changes whenever `reset` or `start_game` runs, since both move the
    /// timestamp and the latter replaces the players.
    pub fn log_path(&self) -> PathBuf {
        session_path(&self.config.log_dir, &self.game_start, &self.players)
    }

    /// Entire log so far, independent of what was flushed
    pub fn dump(&self) -> &str {
        &self.buffer
    }

    /// Add text to the buffer, flushing when auto-flush is on
    pub fn append(&mut self, text: &str) -> Result<()> {
        self.buffer.push_str(text);
        if self.config.auto_flush {
            self.flush()?;
        }
        Ok(())
    }

    /// Text added since the last flush
    fn unflushed(&self) -> &str {
        &self.buffer[self.flushed..]
    }

    /// Write the unflushed suffix to the destination
    pub fn flush(&mut self) -> Result<()> {
        let latest = self.unflushed();
        if latest.is_empty() {
            return Ok(());
        }

        let path = self.log_path();
        let written = latest.len();
        self.destination.write(&path, latest)?;
        self.flushed += written;
        debug!(bytes = self.flushed, "Flushed log to {}", path.display());
        Ok(())
    }

    /// Remove the latest line from the buffer.
    ///
    /// Keeps all but the last two `\n`-separated segments, so the newline that
    /// ended the previous line goes too and the next record continues that line.
    ///
    /// Bytes already flushed stay in the destination; only call this before the
    /// line has been flushed if the file must match the buffer.
    pub fn erase_last_line(&mut self) {
        let segments: Vec<&str> = self.buffer.split('\n').collect();
        let keep = segments.len().saturating_sub(2);
        self.buffer = segments[..keep].join("\n");
        self.flushed = self.flushed.min(self.buffer.len());
    }

    /// Erase the log and restart the clock
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.flushed = 0;
        self.game_start = self.clock.now();
        self.last_turn = self.game_start;
    }

    fn set_players<P: Participant>(&mut self, players: &[P]) {
        let mut players: Vec<Player> = players
            .iter()
            .map(|p| Player::new(p.seat(), p.name(), p.color()))
            .collect();
        players.sort_by_key(|p| p.seat);
        self.players = players;
    }

    /// Stamp end-turn records with the time since the previous one
    fn stamp(&mut self, event: CatanEvent) -> CatanEvent {
        match event {
            CatanEvent::EndTurn { color, after_secs } => {
                let now = self.clock.now();
                let after_secs = match after_secs {
                    Some(secs) => Some(secs),
                    None if self.config.turn_timing => Some(elapsed_secs(self.last_turn, now)),
                    None => None,
                };
                self.last_turn = now;
                CatanEvent::EndTurn { color, after_secs }
            }
            other => other,
        }
    }
}

impl GameLog for CatanLog {
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
        R: PortLike,
    {
        self.reset();
        self.set_players(players);
        let header = GameHeader::capture(self.timestamp_str(), players, terrain, numbers, ports);
        info!(
            players = self.players.len(),
            "Game started, logging to {}",
            self.log_path().display()
        );
        self.append(&render_header(&header))
    }

    fn log_event(&mut self, event: CatanEvent) -> Result<()> {
        let event = self.stamp(event);
        debug!(kind = event.kind(), color = event.color(), "Logging record");
        self.append(&render_event(&event))
    }
}
