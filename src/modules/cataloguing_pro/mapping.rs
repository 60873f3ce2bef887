// Static Code Mapping
// Maps a Dewey class code to the local shelving scheme's class mark.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

/// Class marks for codes the local scheme knows about
static DEWEY_TO_LOCAL: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        // Business > Negotiation / Deal-making
        ("333.33092", "42.1"),
    ])
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappedCode<'a> {
    Mapped(&'a str),
    Unclassified,
}

impl MappedCode<'_> {
    pub fn as_str(&self) -> &str {
        match self {
            MappedCode::Mapped(code) => code,
            MappedCode::Unclassified => "Unclassified",
        }
    }
}

impl fmt::Display for MappedCode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lookup from a class code to an alternate code
pub trait CodeMapping {
    fn lookup(&self, code: &str) -> MappedCode<'_>;
}

/// Built-in table; exact string match, no normalisation
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticCodeMap;

impl CodeMapping for StaticCodeMap {
    fn lookup(&self, code: &str) -> MappedCode<'_> {
        match DEWEY_TO_LOCAL.get(code) {
            Some(mapped) => MappedCode::Mapped(*mapped),
            None => {
                tracing::debug!("No local class mark for {}", code);
                MappedCode::Unclassified
            }
        }
    }
}
