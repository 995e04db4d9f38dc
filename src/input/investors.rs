use std::collections::HashSet;
use std::io::BufRead;
use std::path::Path;

use crate::input::{InputError, open_reader};

/// The reference set of preferred investor names, loaded once per run and
/// passed read-only into the scoring engine. Lookups are case- and
/// whitespace-insensitive.
#[derive(Debug, Clone, Default)]
pub struct InvestorSet {
    names: HashSet<String>,
}

impl InvestorSet {
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names = names
            .into_iter()
            .map(|n| normalize(n.as_ref()))
            .filter(|n| !n.is_empty())
            .collect();
        Self { names }
    }

    /// Loads a line-delimited investor list.
    pub fn load(path: &Path) -> Result<Self, InputError> {
        let reader = open_reader(path)?;
        let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_names(lines))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(&normalize(name))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Lowercases and collapses internal whitespace so `" Top  Capital "` and
/// `"top capital"` compare equal.
pub fn normalize(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
