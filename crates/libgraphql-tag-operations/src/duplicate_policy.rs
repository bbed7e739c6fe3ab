use serde::Deserialize;
use serde::Serialize;

/// Decides which definition a registry key maps to when two
/// [`DocumentSource`](crate::DocumentSource)s share identical raw text but
/// name different definitions.
///
/// Either way the key keeps the position where it was first seen; only the
/// definition it points at differs.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DuplicatePolicy {
    /// Keep the definition of the first occurrence.
    #[default]
    FirstWins,

    /// Overwrite with the definition of the last occurrence (the behavior of
    /// re-assigning a key in an object literal).
    LastWins,
}
