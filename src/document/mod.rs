pub mod args;
pub mod errors;
pub mod id;
mod schema;

use errors::DocumentError;
use indexmap::IndexMap;
use schema::{RawCountry, RawDocument};
use std::fmt;
use std::path::Path;
use tracing::{debug, warn};

pub use id::UniversityId;

/// What to do with a university entry lacking `id` or `name`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RecordPolicy {
    #[default]
    Strict,
    Lenient,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Yaml,
    Toml,
}

impl InputFormat {
    pub fn from_path(path: &Path) -> Result<Self, DocumentError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "json" => Ok(InputFormat::Json),
            "yaml" | "yml" => Ok(InputFormat::Yaml),
            "toml" => Ok(InputFormat::Toml),
            _ => Err(DocumentError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InputFormat::Json => "json",
            InputFormat::Yaml => "yaml",
            InputFormat::Toml => "toml",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniversityRecord {
    pub id: UniversityId,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryRecord {
    pub universities: Vec<UniversityRecord>,
}

/// Validated universities-by-country document, in input order.
#[derive(Debug, Clone, Default)]
pub struct Document {
    countries: IndexMap<String, CountryRecord>,
    skipped: usize,
}

impl Document {
    pub fn countries(&self) -> impl Iterator<Item = (&str, &CountryRecord)> {
        self.countries.iter().map(|(code, c)| (code.as_str(), c))
    }

    pub fn country(&self, code: &str) -> Option<&CountryRecord> {
        self.countries.get(code)
    }

    pub fn country_count(&self) -> usize {
        self.countries.len()
    }

    /// Sum of the `universities` list lengths; absent lists count as zero.
    pub fn total_universities(&self) -> usize {
        self.countries.values().map(|c| c.universities.len()).sum()
    }

    /// Malformed entries dropped under [`RecordPolicy::Lenient`].
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    fn from_raw(raw: RawDocument, policy: RecordPolicy) -> Result<Self, DocumentError> {
        let mut countries = IndexMap::with_capacity(raw.data.len());
        let mut skipped = 0;

        for (code, RawCountry { universities }) in raw.data {
            let raw_universities = universities.unwrap_or_default();
            let mut records = Vec::with_capacity(raw_universities.len());

            for (idx, uni) in raw_universities.into_iter().enumerate() {
                let null_field = match (&uni.id, &uni.name) {
                    (Some(None), _) => Some("id"),
                    (_, Some(None)) => Some("name"),
                    _ => None,
                };
                if let Some(field) = null_field {
                    return Err(DocumentError::NullField {
                        country: code,
                        position: idx + 1,
                        field,
                    });
                }

                let (id, name) = match (uni.id.flatten(), uni.name.flatten()) {
                    (Some(id), Some(name)) => (id, name),
                    (id, _) => {
                        let field = if id.is_none() { "id" } else { "name" };
                        if policy == RecordPolicy::Strict {
                            return Err(DocumentError::MissingField {
                                country: code,
                                position: idx + 1,
                                field,
                            });
                        }
                        warn!(country = %code, position = idx + 1, "skipping university without `{field}`");
                        skipped += 1;
                        continue;
                    }
                };
                records.push(UniversityRecord { id, name });
            }

            countries.insert(
                code,
                CountryRecord {
                    universities: records,
                },
            );
        }

        Ok(Self { countries, skipped })
    }
}

/// Parse an in-memory document in the given format.
pub fn parse_document(
    contents: &str,
    format: InputFormat,
    policy: RecordPolicy,
) -> Result<Document, DocumentError> {
    let parse_error = |message: String| DocumentError::ParseError {
        format: format.to_string(),
        message,
    };

    let raw: RawDocument = match format {
        InputFormat::Json => {
            serde_json::from_str(contents).map_err(|e| parse_error(e.to_string()))?
        }
        InputFormat::Yaml => {
            serde_yaml::from_str(contents).map_err(|e| parse_error(e.to_string()))?
        }
        InputFormat::Toml => toml::from_str(contents).map_err(|e| parse_error(e.to_string()))?,
    };

    Document::from_raw(raw, policy)
}

/// Read and validate the document at `path`; the format follows the extension.
pub fn load_document(path: &str, policy: RecordPolicy) -> Result<Document, DocumentError> {
    let format = InputFormat::from_path(Path::new(path))?;
    let contents = std::fs::read_to_string(path).map_err(DocumentError::FileError)?;
    debug!(path, %format, bytes = contents.len(), "read input document");

    let document = parse_document(&contents, format, policy)?;
    debug!(
        countries = document.country_count(),
        universities = document.total_universities(),
        "document validated"
    );
    Ok(document)
}
