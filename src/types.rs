use serde::{Deserialize, Serialize};

/// A whitespace-delimited token on a single line of a dataset file.
///
/// `start`/`end` are half-open character offsets into the source line;
/// `index` is the token's position among the tokens of that line. Tokens are
/// non-overlapping, ordered by `start`, and never contain whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub value: String,
    pub start: usize,
    pub end: usize,
    pub index: usize,
}

/// A foreign key declared in the project database schema.
///
/// Read fresh from `PRAGMA foreign_key_list` on every resolution request;
/// never cached across calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForeignKeyDeclaration {
    pub source_column: String,
    pub target_table: String,
    pub target_column: String,
}

/// An order-preserving field-name → value map for one resolved record.
///
/// Values keep the literal text representation they had in the source file or
/// database; no numeric interpretation is attempted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.push((name.into(), value.into()));
    }

    /// Returns the value of the first field with the given name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<(String, String)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

/// How a resolution result was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolvedVia {
    /// A foreign key declared in the database schema.
    ForeignKey,
    /// A `name`-column lookup against a guessed database table.
    NameLookup,
    /// A linear first-column scan of a guessed dataset file.
    FileScan,
}

#[allow(clippy::should_implement_trait)]
impl ResolvedVia {
    /// Returns the string representation of this resolution path.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolvedVia::ForeignKey => "foreign_key",
            ResolvedVia::NameLookup => "name_lookup",
            ResolvedVia::FileScan => "file_scan",
        }
    }

    /// Parses a string into a `ResolvedVia`, returning `None` for unrecognized values.
    pub fn from_str(s: &str) -> Option<ResolvedVia> {
        match s {
            "foreign_key" => Some(ResolvedVia::ForeignKey),
            "name_lookup" => Some(ResolvedVia::NameLookup),
            "file_scan" => Some(ResolvedVia::FileScan),
            _ => None,
        }
    }
}

/// The normalized output of one resolution request.
///
/// `target` names the referenced table (database paths) or file (scan path).
/// `line_index` is the 0-based line of the matched record for file-scan
/// resolutions, counting the header line; `None` for database resolutions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionResult {
    pub target: String,
    pub record: Record,
    pub source_column: String,
    pub source_value: String,
    pub line_index: Option<usize>,
    pub resolved_via: ResolvedVia,
}

/// A record located by scanning a dataset file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMatch {
    pub line_index: usize,
    pub record: Record,
}
