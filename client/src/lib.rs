pub mod config;
pub mod input;
pub mod sender;

pub use config::SubmitConfig;
pub use input::{InputError, InputSource};
pub use sender::{send_synchronously, submit, SubmissionError};
