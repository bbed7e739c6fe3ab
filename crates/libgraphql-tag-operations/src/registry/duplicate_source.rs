/// Records two [`DocumentSource`](crate::DocumentSource)s which shared the
/// same raw text but named different definitions.
///
/// Only one of them can be dispatched to, so this is reported alongside the
/// built [`Registry`](crate::Registry) rather than treated as an error.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DuplicateSource {
    pub raw_text: String,
    pub kept_definition_name: String,
    pub discarded_definition_name: String,
}
