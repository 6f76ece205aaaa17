// ── Composite import identifiers ──
//
// `region,subaccount,42` style strings: a fixed, ordered list of identity
// fields per resource kind, joined by a comma.

use crate::error::CoreError;

pub const IMPORT_DELIMITER: char = ',';

/// Parsed import identifier, one value per field of the kind's shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportId {
    kind: &'static str,
    shape: &'static [&'static str],
    raw: String,
    fields: Vec<String>,
}

impl ImportId {
    /// Split `raw` and check it against `shape`.
    ///
    /// A wrong field count or any empty field is
    /// [`CoreError::MalformedImportIdentifier`].
    pub fn parse(
        kind: &'static str,
        shape: &'static [&'static str],
        raw: &str,
    ) -> Result<Self, CoreError> {
        let fields: Vec<String> = raw
            .split(IMPORT_DELIMITER)
            .map(|f| f.trim().to_owned())
            .collect();

        if fields.len() != shape.len() || fields.iter().any(String::is_empty) {
            return Err(malformed(kind, shape, raw));
        }

        Ok(Self {
            kind,
            shape,
            raw: raw.to_owned(),
            fields,
        })
    }

    /// Value of the field at `index` in the shape.
    pub fn field(&self, index: usize) -> &str {
        self.fields.get(index).map_or("", String::as_str)
    }

    /// Parse the field at `index` as an unsigned integer.
    pub fn numeric(&self, index: usize) -> Result<u64, CoreError> {
        self.field(index)
            .parse()
            .map_err(|_| malformed(self.kind, self.shape, &self.raw))
    }
}

/// Human-readable shape, e.g. `region_host,subaccount,id`.
pub fn expected_shape(shape: &[&str]) -> String {
    shape.join(&IMPORT_DELIMITER.to_string())
}

fn malformed(kind: &'static str, shape: &[&str], raw: &str) -> CoreError {
    CoreError::MalformedImportIdentifier {
        kind,
        expected: expected_shape(shape),
        got: raw.to_owned(),
    }
}
