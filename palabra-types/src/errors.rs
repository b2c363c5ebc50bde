use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// Failures surfaced by the session engine. All errors are synchronous
/// return values; the presentation layer decides user-visible messaging.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum EngineError {
    /// No words available to start or continue a round. Fatal to the
    /// session.
    #[error("word pool is empty")]
    PoolEmpty,
    /// Unrecognized speed value; the session keeps its previous setting.
    #[error("invalid speed setting: {value}")]
    InvalidSpeedSetting { value: String },
}
