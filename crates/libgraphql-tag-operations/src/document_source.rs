use serde::Deserialize;
use serde::Serialize;

/// A distinct unit of GraphQL source text exactly as it appears as the
/// literal argument at a tag-function call site, paired with the generated
/// symbol for its primary operation or fragment.
///
/// [`DocumentSource::raw_text`] is the lookup key for the generated
/// registry, so it must be the verbatim literal (whitespace included).
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSource {
    pub(crate) raw_text: String,
    pub(crate) primary_definition_name: String,
}

impl DocumentSource {
    pub fn new(
        raw_text: impl Into<String>,
        primary_definition_name: impl Into<String>,
    ) -> Self {
        Self {
            raw_text: raw_text.into(),
            primary_definition_name: primary_definition_name.into(),
        }
    }

    pub fn primary_definition_name(&self) -> &str {
        self.primary_definition_name.as_str()
    }

    pub fn raw_text(&self) -> &str {
        self.raw_text.as_str()
    }
}
