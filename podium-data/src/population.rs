//! Loading population overrides from disk.
//!
//! The file is a single JSON object mapping country short codes to
//! non-negative integer populations, e.g. `{"NOR": 5519594}`.

use std::collections::HashMap;
use std::io::BufReader;

use camino::Utf8Path;

use crate::PopulationTableError;
use crate::fs::open_utf8_file;

/// Read a population table file.
///
/// # Errors
/// Returns [`PopulationTableError::Open`] when the file cannot be opened and
/// [`PopulationTableError::Parse`] when it is not an object of integers.
pub fn load_population_table(path: &Utf8Path) -> Result<HashMap<String, u64>, PopulationTableError> {
    let file = open_utf8_file(path).map_err(|source| PopulationTableError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let table: HashMap<String, u64> =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| {
            PopulationTableError::Parse {
                path: path.to_path_buf(),
                source,
            }
        })?;
    log::debug!("loaded {} population entries from {path}", table.len());
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use podium_core::PopulationLookup;
    use rstest::rstest;
    use tempfile::TempDir;

    fn table_file(contents: &str) -> (TempDir, Utf8PathBuf) {
        let dir = TempDir::new().expect("tempdir");
        let path = Utf8PathBuf::from_path_buf(dir.path().join("population.json"))
            .expect("utf8 path");
        std::fs::write(path.as_std_path(), contents).expect("write table");
        (dir, path)
    }

    #[rstest]
    fn loads_codes_and_populations() {
        let (_dir, path) = table_file(r#"{"NOR": 5519594, "ISL": 387758}"#);
        let table = load_population_table(&path).expect("load table");
        assert_eq!(table.population("ISL"), Some(387_758));
        assert_eq!(table.population("USA"), None);
    }

    #[rstest]
    #[case(r#"{"NOR": "5519594"}"#)]
    #[case(r#"{"NOR": -1}"#)]
    #[case(r#"["NOR"]"#)]
    fn rejects_malformed_tables(#[case] contents: &str) {
        let (_dir, path) = table_file(contents);
        let err = load_population_table(&path).expect_err("malformed table");
        assert!(matches!(err, PopulationTableError::Parse { .. }));
    }
}
