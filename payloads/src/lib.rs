pub mod score;

pub use score::{ScoreRecord, ValidationError};

/// Path the scoring backend accepts submissions on.
pub const SUBMIT_PATH: &str = "/fullstack/api/prd/score/submit";
