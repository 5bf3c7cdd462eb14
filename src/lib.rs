pub mod answers;
pub mod config;
pub mod engine;
pub mod error;
pub mod export;

pub use answers::AnswerSet;
pub use config::Config;
pub use engine::{AnalysisResult, Engine};
pub use error::{LifepathError, Result};
