use std::path::Path;

use crate::{
    error::{Error, Result},
    record::ProcessRecord,
};

/// Name pattern a process must contain to be ranked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterSpec {
    pattern: String,
}

impl FilterSpec {
    pub fn new(pattern: &str) -> Result<Self> {
        Self::parse(pattern, "command line")
    }

    ///reads the pattern from the input file, surrounding whitespace is ignored
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| Error::InputMissing {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents, &path.display().to_string())
    }

    fn parse(raw: &str, source_name: &str) -> Result<Self> {
        let pattern = raw.trim();
        if pattern.is_empty() {
            return Err(Error::EmptyPattern {
                source_name: source_name.to_string(),
            });
        }
        Ok(Self {
            pattern: pattern.to_string(),
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Case sensitive substring match on the short process name.
    pub fn matches(&self, record: &ProcessRecord) -> bool {
        record.name.contains(&self.pattern)
    }
}
