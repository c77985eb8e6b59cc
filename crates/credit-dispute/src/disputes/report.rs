use super::domain::{Category, ConsumerInfo, RawAccountRecord};
use super::scoring::ScoringError;
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

#[derive(Debug)]
pub enum ReportError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Scoring {
        category: Category,
        index: usize,
        source: ScoringError,
    },
}

impl std::fmt::Display for ReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportError::Io(err) => write!(f, "failed to read credit report: {}", err),
            ReportError::Parse(err) => write!(f, "invalid credit report: {}", err),
            ReportError::Scoring {
                category,
                index,
                source,
            } => write!(f, "could not score {}[{}]: {}", category, index, source),
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReportError::Io(err) => Some(err),
            ReportError::Parse(err) => Some(err),
            ReportError::Scoring { source, .. } => Some(source),
        }
    }
}

impl From<std::io::Error> for ReportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

/// Parsed credit report document. Either account list may be omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditReport {
    pub consumer_info: ConsumerInfo,
    #[serde(default)]
    pub tradelines: Vec<RawAccountRecord>,
    #[serde(default)]
    pub collections: Vec<RawAccountRecord>,
}

impl CreditReport {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ReportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ReportError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, ReportError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Tradelines then collections, each in document order, with their index
    /// inside the originating list.
    pub fn entries(&self) -> impl Iterator<Item = (Category, usize, &RawAccountRecord)> + '_ {
        let tradelines = self
            .tradelines
            .iter()
            .enumerate()
            .map(|(index, record)| (Category::Tradeline, index, record));
        let collections = self
            .collections
            .iter()
            .enumerate()
            .map(|(index, record)| (Category::Collection, index, record));
        tradelines.chain(collections)
    }

    pub fn entry_count(&self) -> usize {
        self.tradelines.len() + self.collections.len()
    }
}
