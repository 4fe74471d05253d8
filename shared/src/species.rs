use std::collections::HashSet;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const BUNDLED_DATABASE: &str = include_str!("../data/species-dna-database.json");

static BUNDLED: Lazy<Result<Dataset, DatasetError>> = Lazy::new(|| Dataset::from_json(BUNDLED_DATABASE));

/// One species the player can be matched with.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Species {
    pub id: u32,
    pub name: String,
    pub scientific_name: String,
    pub percentage: f64, // share of DNA in common with humans
    pub emoji: String,
    pub category: String,
    pub fun_fact: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DatasetMetadata {
    pub title: String,
    pub description: String,
    pub sources: Vec<String>,
    pub total_species: usize,
    pub last_updated: String,
}

/// Raw shape of the dataset file.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SpeciesDatabase {
    pub metadata: DatasetMetadata,
    pub species: Vec<Species>,
}

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("malformed species dataset: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("species dataset is empty")]
    Empty,
    #[error("species id {0} appears more than once")]
    DuplicateId(u32),
    #[error("species {id} has percentage {percentage} outside 0..=100")]
    PercentageOutOfRange { id: u32, percentage: f64 },
}

/// A list of species that is guaranteed to hold at least one entry.
#[derive(Debug, Clone, PartialEq)]
pub struct NonEmptySpecies(Vec<Species>);

impl NonEmptySpecies {
    pub fn new(species: Vec<Species>) -> Result<Self, DatasetError> {
        if species.is_empty() {
            return Err(DatasetError::Empty);
        }
        Ok(Self(species))
    }

    pub fn as_slice(&self) -> &[Species] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, id: u32) -> Option<&Species> {
        self.0.iter().find(|s| s.id == id)
    }
}

/// Validated dataset, loaded once at startup and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub metadata: DatasetMetadata,
    pub species: NonEmptySpecies,
}

impl Dataset {
    pub fn from_json(raw: &str) -> Result<Self, DatasetError> {
        let database: SpeciesDatabase = serde_json::from_str(raw)?;
        Self::from_database(database)
    }

    pub fn from_database(database: SpeciesDatabase) -> Result<Self, DatasetError> {
        let mut seen = HashSet::with_capacity(database.species.len());
        for species in &database.species {
            if !seen.insert(species.id) {
                return Err(DatasetError::DuplicateId(species.id));
            }
            if !(0.0..=100.0).contains(&species.percentage) {
                return Err(DatasetError::PercentageOutOfRange {
                    id: species.id,
                    percentage: species.percentage,
                });
            }
        }

        if database.metadata.total_species != database.species.len() {
            log::warn!(
                "Dataset metadata announces {} species but {} were loaded",
                database.metadata.total_species,
                database.species.len()
            );
        }

        Ok(Self {
            metadata: database.metadata,
            species: NonEmptySpecies::new(database.species)?,
        })
    }
}

/// The dataset shipped with the game, parsed on first access.
pub fn bundled() -> Result<&'static Dataset, &'static DatasetError> {
    (*BUNDLED).as_ref()
}

#[cfg(test)]
pub(crate) fn test_species(id: u32) -> Species {
    Species {
        id,
        name: format!("Espèce {}", id),
        scientific_name: format!("Species {}", id),
        percentage: 50.0,
        emoji: "🧬".to_string(),
        category: "test".to_string(),
        fun_fact: "Fait amusant".to_string(),
    }
}
