//! The disease knowledge table.
//!
//! `KnowledgeTable` maps a lower-cased disease name to its `DiseaseRecord`.
//! It is built once, either from the built-in records or from a TOML
//! knowledge file, and is read-only afterwards. Lookups case-fold the query
//! and match exactly; there is no partial or fuzzy matching.
//!
//! Knowledge file format:
//!
//! ```toml
//! [diseases."covid-19"]
//! general_info = "..."
//! symptoms = "..."
//! prevention = "..."
//! treatment = "..."
//! more_info = "..."
//! emergency_tips = "..."
//! ```

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::OnceLock;

use serde::Deserialize;
use tracing::{debug, info};

use medibot_contracts::{
    disease::{DiseaseRecord, InfoField},
    error::{MedibotError, MedibotResult},
};

use crate::builtin::BUILTIN_DISEASES;

static BUILTIN: OnceLock<KnowledgeTable> = OnceLock::new();

/// Top-level shape of a knowledge file.
#[derive(Debug, Deserialize)]
struct KnowledgeFile {
    diseases: BTreeMap<String, DiseaseRecord>,
}

/// Immutable mapping from normalized disease name to record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnowledgeTable {
    records: BTreeMap<String, DiseaseRecord>,
}

impl KnowledgeTable {
    /// The process-wide built-in table, initialized on first use.
    pub fn builtin() -> &'static KnowledgeTable {
        BUILTIN.get_or_init(|| {
            let records = BUILTIN_DISEASES
                .iter()
                .map(|entry| (entry.name.to_string(), entry.to_record()))
                .collect();
            KnowledgeTable { records }
        })
    }

    /// Parse `s` as a TOML knowledge file.
    ///
    /// Disease names are lower-cased on load. Returns
    /// `MedibotError::KnowledgeError` if the TOML is malformed, the file lists
    /// no diseases, a name is blank, two names collide after lower-casing, or
    /// any record field is empty.
    pub fn from_toml_str(s: &str) -> MedibotResult<Self> {
        let file: KnowledgeFile = toml::from_str(s).map_err(|e| MedibotError::KnowledgeError {
            reason: format!("failed to parse knowledge TOML: {}", e),
        })?;

        if file.diseases.is_empty() {
            return Err(MedibotError::KnowledgeError {
                reason: "knowledge file defines no diseases".to_string(),
            });
        }

        let mut records = BTreeMap::new();
        for (raw_name, record) in file.diseases {
            let name = raw_name.trim().to_lowercase();
            if name.is_empty() {
                return Err(MedibotError::KnowledgeError {
                    reason: "disease name must not be blank".to_string(),
                });
            }

            for field in InfoField::ALL {
                if record.field(field).trim().is_empty() {
                    return Err(MedibotError::KnowledgeError {
                        reason: format!("disease '{}' has an empty '{}' field", raw_name, field.as_str()),
                    });
                }
            }

            if records.contains_key(&name) {
                return Err(MedibotError::KnowledgeError {
                    reason: format!("disease '{}' is defined more than once (names are case-insensitive)", name),
                });
            }
            debug!(disease = %name, "loaded disease record");
            records.insert(name, record);
        }

        info!(diseases = records.len(), "knowledge table loaded");
        Ok(Self { records })
    }

    /// Read the file at `path` and parse it as a knowledge file.
    pub fn from_file(path: &Path) -> MedibotResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| MedibotError::KnowledgeError {
            reason: format!("failed to read knowledge file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// Find the record for `name`, ignoring case.
    pub fn lookup(&self, name: &str) -> Option<&DiseaseRecord> {
        self.records.get(&name.to_lowercase())
    }

    /// Return true if `name` (ignoring case) is a known disease.
    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Known disease keys, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
