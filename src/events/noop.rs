//! Logger that records nothing
//!
//! Stands in for `CatanLog` when the caller wants no log at all.

use super::GameLog;
use super::types::CatanEvent;
use crate::error::Result;
use crate::model::{Participant, PortLike, ValueTagged};

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLog;

impl GameLog for NoopLog {
    fn start_game<P, T, R>(
        &mut self,
        _players: &[P],
        _terrain: &[T],
        _numbers: &[Option<u32>],
        _ports: &[R],
    ) -> Result<()>
    where
        P: Participant,
        T: ValueTagged,
        R: PortLike,
    {
        Ok(())
    }

    fn log_event(&mut self, _event: CatanEvent) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Player, Port, Resource, Terrain};

    /// Callers are written against the trait and work with either sink
    fn play_short_game(log: &mut impl GameLog) -> Result<()> {
        let red = Player::new(1, "ross", "red");
        let blue = Player::new(2, "josh", "blue");
        log.start_game(&[red.clone(), blue.clone()], &[Terrain::Desert], &[None], &[] as &[Port])?;
        log.roll(&red, 2)?;
        log.trade_with_player(&red, &[(1, Resource::Wood)], &blue, &[(1, Resource::Sheep)])?;
        log.end_turn(&red)?;
        log.win(&blue)
    }

    #[test]
    fn test_noop_accepts_everything() {
        let mut log = NoopLog;
        assert!(play_short_game(&mut log).is_ok());
    }

    #[test]
    fn test_same_caller_with_real_log() {
        let mut log = crate::events::CatanLog::new(crate::config::LogConfig::buffered());
        play_short_game(&mut log).unwrap();
        assert!(log.dump().contains("red trades [1 wood] to player blue for [1 sheep]\n"));
        assert!(log.dump().ends_with("blue wins\n"));
    }
}
