//! Static country table bundled with the app.
//!
//! Parsed once during setup; queried by exact alpha-2 match for the
//! dropdown, the draft's display name, and flag asset paths.

use std::collections::HashMap;

use anyhow::{Context, Result};

use crate::models::CountryEntry;

const BUNDLED_TABLE: &str = include_str!("../assets/countries.json");

pub struct CountryDirectory {
    entries: Vec<CountryEntry>,
    by_alpha2: HashMap<String, usize>,
}

impl CountryDirectory {
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_TABLE)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let entries: Vec<CountryEntry> =
            serde_json::from_str(raw).context("failed to parse country table")?;
        Ok(Self::new(entries))
    }

    fn new(entries: Vec<CountryEntry>) -> Self {
        let by_alpha2 = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| (entry.alpha2.clone(), index))
            .collect();

        Self { entries, by_alpha2 }
    }

    pub fn lookup(&self, alpha2: &str) -> Option<&CountryEntry> {
        self.by_alpha2
            .get(alpha2)
            .map(|&index| &self.entries[index])
    }

    /// Entries in asset order, for dropdown population.
    pub fn entries(&self) -> &[CountryEntry] {
        &self.entries
    }

    /// Flag asset path for a country code. Whether the image actually
    /// exists is a rendering concern, not checked here.
    pub fn flag_path(alpha2: &str) -> String {
        format!("/flags/{alpha2}.png")
    }
}
