use thiserror::Error;

pub type Result<T> = std::result::Result<T, RecoverError>;

#[derive(Debug, Error)]
pub enum RecoverError {
    #[error("base {0} is outside the supported range 2..=36")]
    UnsupportedBase(u32),
    #[error("invalid digit '{digit}' for base {base}")]
    InvalidDigit { digit: char, base: u32 },
    #[error("failed to decode sample {index}: {source}")]
    Decode {
        index: usize,
        #[source]
        source: Box<RecoverError>,
    },
    #[error("singular matrix: no usable pivot in column {column}")]
    SingularMatrix { column: usize },
    #[error("need {needed} samples but only {available} were supplied")]
    NotEnoughSamples { needed: usize, available: usize },
}
