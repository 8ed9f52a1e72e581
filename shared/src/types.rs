//! Common types used across the tracker

/// Record selector used by the generic delete and edit endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Product,
    Location,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Product => "product",
            RecordKind::Location => "location",
        }
    }

    /// Parse a loosely-typed selector; unknown values yield `None`
    pub fn parse(value: Option<&str>) -> Option<Self> {
        match value?.trim() {
            "product" => Some(RecordKind::Product),
            "location" => Some(RecordKind::Location),
            _ => None,
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
