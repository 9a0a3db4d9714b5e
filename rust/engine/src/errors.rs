use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid card token: {token:?}")]
    InvalidCard { token: String },
    #[error("Invalid hand: {reason}")]
    InvalidHand { reason: String },
    #[error("Invalid bet: {reason}")]
    InvalidBet { reason: String },
    #[error("Invalid paytable: {reason}")]
    InvalidPaytable { reason: String },
}

impl EngineError {
    pub(crate) fn hand(reason: impl Into<String>) -> Self {
        EngineError::InvalidHand {
            reason: reason.into(),
        }
    }

    pub(crate) fn bet(reason: impl Into<String>) -> Self {
        EngineError::InvalidBet {
            reason: reason.into(),
        }
    }

    pub(crate) fn paytable(reason: impl Into<String>) -> Self {
        EngineError::InvalidPaytable {
            reason: reason.into(),
        }
    }
}
