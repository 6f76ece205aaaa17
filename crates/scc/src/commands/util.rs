//! Shared helpers for command handlers.

use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::CliError;

/// Read a record from a JSON or YAML file, or from stdin for `-`.
///
/// YAML is chosen by a `.yaml`/`.yml` extension; everything else is JSON.
pub fn read_record<T: DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    if path == Path::new("-") {
        let mut contents = String::new();
        std::io::stdin().read_to_string(&mut contents)?;
        return Ok(serde_json::from_str(&contents)?);
    }

    let contents = std::fs::read_to_string(path)?;
    let is_yaml = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"));

    if is_yaml {
        Ok(serde_yaml::from_str(&contents)?)
    } else {
        Ok(serde_json::from_str(&contents)?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Write;

    use scc_core::DomainMapping;

    use super::*;

    #[test]
    fn yaml_and_json_records_parse_alike() {
        let dir = tempfile::tempdir().unwrap();

        let json_path = dir.path().join("dm.json");
        std::fs::File::create(&json_path)
            .unwrap()
            .write_all(
                br#"{"region_host":"r","subaccount":"s","internal_domain":"corp","virtual_domain":"example.com"}"#,
            )
            .unwrap();

        let yaml_path = dir.path().join("dm.yaml");
        std::fs::File::create(&yaml_path)
            .unwrap()
            .write_all(
                b"region_host: r\nsubaccount: s\ninternal_domain: corp\nvirtual_domain: example.com\n",
            )
            .unwrap();

        let a: DomainMapping = read_record(&json_path).unwrap();
        let b: DomainMapping = read_record(&yaml_path).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn bad_json_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = read_record::<DomainMapping>(&path).unwrap_err();
        assert!(matches!(err, CliError::Json(_)));
    }
}
