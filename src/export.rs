//! Export bundle: the `{answers, analysis}` document the host hands to the
//! user. A structurally faithful JSON encoding of the two in-memory objects;
//! no engine-specific transformation happens here.

use crate::answers::AnswerSet;
use crate::engine::AnalysisResult;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ExportBundle {
    pub answers: AnswerSet,
    pub analysis: AnalysisResult,
}

impl ExportBundle {
    pub fn new(answers: AnswerSet, analysis: AnalysisResult) -> Self {
        Self { answers, analysis }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_to(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

/// Dated default export filename, e.g. `lifepath-2026-08-28.json`
pub fn default_filename(today: chrono::NaiveDate) -> String {
    format!("lifepath-{}.json", today.format("%Y-%m-%d"))
}
