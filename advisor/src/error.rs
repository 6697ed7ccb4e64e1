use thiserror::Error;

use crate::strategy::HandShape;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StrategyError {
    #[error("Hand is bust with a total of {total}")]
    HandBust { total: u32 },
    #[error("Found a card with the unknown rank {0}")]
    InvalidRank(u8),
    #[error("No chart cell for {shape:?} {player} against dealer {dealer}")]
    MissingChartCell {
        shape: HandShape,
        player: u8,
        dealer: u8,
    },
}
