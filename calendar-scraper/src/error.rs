use thiserror::Error;

/// Every failure is fatal to the run, but the kinds keep "site unreachable"
/// distinguishable from "site layout changed".
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("transport: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected page structure: {0}")]
    Structure(&'static str),

    #[error("meeting row too short: wanted cell {index}, row has {len}")]
    Row { index: usize, len: usize },

    #[error("csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
