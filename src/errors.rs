use std::io;

/// Errors raised by the puzzle engine
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("could not generate a board in {attempts} attempts (best had {best} solutions)")]
    GenerationFailed { attempts: usize, best: usize },
    #[error("invalid board: {0}")]
    InvalidBoard(String),
    #[error("invalid setting: {0}")]
    InvalidSetting(String),
}

impl From<GameError> for io::Error {
    fn from(e: GameError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, e.to_string())
    }
}
