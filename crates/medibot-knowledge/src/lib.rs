//! # medibot-knowledge
//!
//! The immutable disease knowledge table for MEDIBOT.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use medibot_knowledge::KnowledgeTable;
//!
//! let table = KnowledgeTable::builtin();
//! let record = table.lookup("Malaria").expect("built-in disease");
//! println!("{}", record.symptoms);
//! ```
//!
//! A deployment may replace the built-in records with its own TOML file via
//! [`KnowledgeTable::from_file`]. Either way the table is fixed once built.

mod builtin;
pub mod table;

pub use table::KnowledgeTable;

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use medibot_contracts::{disease::InfoField, error::MedibotError};

    use crate::KnowledgeTable;

    // ── Helpers ───────────────────────────────────────────────────────────────

    fn record_toml(name: &str, general: &str) -> String {
        format!(
            r#"
            [diseases."{name}"]
            general_info = "{general}"
            symptoms = "Sneezing."
            prevention = "Wash hands."
            treatment = "Rest."
            more_info = "Usually mild."
            emergency_tips = "Call a doctor if breathing is hard."
            "#
        )
    }

    fn expect_knowledge_error(result: Result<KnowledgeTable, MedibotError>, needle: &str) {
        match result {
            Err(MedibotError::KnowledgeError { reason }) => {
                assert!(reason.contains(needle), "expected '{needle}' in reason, got: {reason}");
            }
            other => panic!("expected KnowledgeError, got {:?}", other),
        }
    }

    // ── Built-in table ────────────────────────────────────────────────────────

    #[test]
    fn builtin_table_has_all_fourteen_diseases() {
        let table = KnowledgeTable::builtin();
        assert_eq!(table.len(), 14);
        for name in [
            "covid-19",
            "malaria",
            "cholera",
            "gastric problems",
            "uti",
            "chronic problems",
            "migraine",
            "cancer",
            "food allergy",
            "drug allergy",
            "pollen allergy",
            "dust allergy",
            "insect allergy",
            "skin contact allergy",
        ] {
            assert!(table.contains(name), "missing built-in disease '{name}'");
        }
    }

    #[test]
    fn builtin_keys_are_lower_case_and_sorted() {
        let names: Vec<&str> = KnowledgeTable::builtin().names().collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert!(names.iter().all(|n| *n == n.to_lowercase()));
    }

    #[test]
    fn builtin_records_have_no_empty_fields() {
        let table = KnowledgeTable::builtin();
        for name in table.names() {
            let record = table.lookup(name).unwrap();
            for field in InfoField::ALL {
                assert!(
                    !record.field(field).is_empty(),
                    "'{name}' has empty field {}",
                    field.as_str()
                );
            }
        }
    }

    #[test]
    fn builtin_returns_the_same_instance() {
        assert!(std::ptr::eq(KnowledgeTable::builtin(), KnowledgeTable::builtin()));
    }

    // ── Lookup ────────────────────────────────────────────────────────────────

    #[test]
    fn lookup_ignores_case() {
        let table = KnowledgeTable::builtin();
        let lower = table.lookup("covid-19").unwrap();
        let upper = table.lookup("COVID-19").unwrap();
        let mixed = table.lookup("Covid-19").unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower, mixed);
    }

    #[test]
    fn lookup_is_exact_not_fuzzy() {
        let table = KnowledgeTable::builtin();
        assert!(table.lookup("malari").is_none());
        assert!(table.lookup("malaria ").is_none());
        assert!(table.lookup("allergy").is_none());
        assert!(table.lookup("Unicornitis").is_none());
    }

    #[test]
    fn lookup_returns_verbatim_text() {
        let record = KnowledgeTable::builtin().lookup("cholera").unwrap();
        assert_eq!(
            record.prevention,
            "Ensure access to safe drinking water, maintain good hand hygiene, practice proper \
             sanitation, and consume properly cooked food. Oral cholera vaccines provide \
             additional protection in high-risk settings."
        );
    }

    // ── Knowledge files ───────────────────────────────────────────────────────

    #[test]
    fn from_toml_str_normalizes_names() {
        let table = KnowledgeTable::from_toml_str(&record_toml("Common Cold", "A viral infection.")).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.names().collect::<Vec<_>>(), vec!["common cold"]);
        assert_eq!(table.lookup("COMMON COLD").unwrap().general_info, "A viral infection.");
    }

    #[test]
    fn from_toml_str_rejects_case_insensitive_duplicates() {
        let toml = format!(
            "{}\n{}",
            record_toml("Flu", "one"),
            record_toml("flu", "two")
        );
        expect_knowledge_error(KnowledgeTable::from_toml_str(&toml), "more than once");
    }

    #[test]
    fn from_toml_str_rejects_empty_field() {
        let toml = record_toml("flu", "");
        expect_knowledge_error(KnowledgeTable::from_toml_str(&toml), "general_info");
    }

    #[test]
    fn from_toml_str_rejects_missing_field() {
        let toml = r#"
            [diseases.flu]
            general_info = "A viral infection."
            symptoms = "Fever."
        "#;
        expect_knowledge_error(KnowledgeTable::from_toml_str(toml), "failed to parse");
    }

    #[test]
    fn from_toml_str_rejects_empty_table() {
        expect_knowledge_error(KnowledgeTable::from_toml_str("[diseases]"), "no diseases");
    }

    #[test]
    fn from_file_reports_missing_path() {
        let path = std::path::Path::new("/nonexistent/medibot/knowledge.toml");
        expect_knowledge_error(KnowledgeTable::from_file(path), "failed to read knowledge file");
    }
}
