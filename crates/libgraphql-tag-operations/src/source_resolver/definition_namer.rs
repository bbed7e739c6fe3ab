use crate::source_resolver::DefinitionKind;
use crate::source_resolver::NamingConvention;
use serde::Deserialize;
use serde::Serialize;

const FRAGMENT_SUFFIX: &str = "FragmentDoc";
const OPERATION_SUFFIX: &str = "Document";

/// Derives the symbol that the typed-document generator exports for a
/// definition: `<Name>Document` for operations and `<Name>FragmentDoc` for
/// fragments.
///
/// ```
/// use libgraphql_tag_operations::DefinitionKind;
/// use libgraphql_tag_operations::DefinitionNamer;
///
/// let namer = DefinitionNamer::default();
/// assert_eq!(namer.symbol_name(DefinitionKind::Query, "getUser"), "GetUserDocument");
/// assert_eq!(namer.symbol_name(DefinitionKind::Fragment, "UserFields"), "UserFieldsFragmentDoc");
/// ```
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DefinitionNamer {
    pub naming_convention: NamingConvention,

    /// Drop underscores while case-converting instead of preserving them
    /// between converted segments.
    pub transform_underscore: bool,
}

impl DefinitionNamer {
    pub fn symbol_name(&self, kind: DefinitionKind, name: &str) -> String {
        let base = self.naming_convention.apply(name, self.transform_underscore);
        let suffix = match kind {
            DefinitionKind::Fragment => FRAGMENT_SUFFIX,
            DefinitionKind::Mutation
            | DefinitionKind::Query
            | DefinitionKind::Subscription => OPERATION_SUFFIX,
        };
        format!("{base}{suffix}")
    }
}
