use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Recognized shapes of a submitted source value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Uri,
    Email,
    Tel,
    Bitcoin,
    Ssn,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::Uri => write!(f, "uri"),
            SourceKind::Email => write!(f, "email"),
            SourceKind::Tel => write!(f, "tel"),
            SourceKind::Bitcoin => write!(f, "bitcoin"),
            SourceKind::Ssn => write!(f, "ssn"),
        }
    }
}

/// Patterns checked in order; the first match wins.
static PATTERNS: LazyLock<Vec<(SourceKind, Regex)>> = LazyLock::new(|| {
    [
        (
            SourceKind::Uri,
            r"[\w]+://[^/\s?#]+[^\s?#]+(?:\?[^\s#]*)?(?:#[^\s]*)?",
        ),
        (
            SourceKind::Email,
            r"(?P<name>[-\w\d\.]+?)(?:\s+at\s+|\s*@\s*|\s*(?:[\[\]@]){3}\s*)(?P<host>[-\w\d\.]*?)\s*(?:dot|\.|(?:[\[\]dot\.]){3,5})\s*(?P<domain>\w+)",
        ),
        (
            SourceKind::Tel,
            r"\+\d{1,4}?[-.\s]?\(?\d{1,3}?\)?[-.\s]?\d{1,4}[-.\s]?\d{1,4}[-.\s]?\d{1,9}",
        ),
        (
            SourceKind::Bitcoin,
            r"\b([13][a-km-zA-HJ-NP-Z1-9]{25,34}|bc1[ac-hj-np-zAC-HJ-NP-Z02-9]{11,71})",
        ),
        (SourceKind::Ssn, r"\d{3}-\d{2}-\d{4}"),
    ]
    .into_iter()
    .map(|(kind, pattern)| {
        let re = Regex::new(pattern).expect("source pattern must compile");
        (kind, re)
    })
    .collect()
});

/// Classify a submitted source value. `None` means no known shape matched;
/// such values are still accepted by the shortener.
pub fn classify(source: &str) -> Option<SourceKind> {
    PATTERNS
        .iter()
        .find(|(_, re)| re.is_match(source))
        .map(|(kind, _)| *kind)
}
