use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Prefix of every player window label.
pub const PLAYER_PREFIX: &str = "player-";

static CAMEL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").unwrap());
static SEPARATOR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

/// Snake-case an arbitrary string: camel humps and runs of punctuation
/// become a single `_`, everything is lowercased.
pub fn to_snake_case(input: &str) -> String {
    let split = CAMEL_RE.replace_all(input, "${1}_${2}");
    let lowered = split.to_lowercase();
    SEPARATOR_RE
        .replace_all(&lowered, "_")
        .trim_matches('_')
        .to_string()
}

/// Identity of a player window. Doubles as the name of the backend
/// channel the window listens on, so it never changes after creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowIdentity(String);

impl WindowIdentity {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Derive the window label for a media URL (`player-` + snake case).
    ///
    /// Returns `None` for an empty or all-punctuation URL; the host ignores
    /// open requests for those.
    pub fn for_url(url: &str) -> Option<Self> {
        let slug = to_snake_case(url.trim());
        if slug.is_empty() {
            return None;
        }
        Some(Self(format!("{PLAYER_PREFIX}{slug}")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Channel name used for backend -> window messages.
    pub fn channel_name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WindowIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for WindowIdentity {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}
