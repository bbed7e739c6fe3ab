/// Selects how the generated `gql` overloads are delivered.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EmissionMode {
    /// A self-contained module which owns both the registry value and the
    /// runtime implementation of the tag function.
    Local,

    /// Declarations only, merged into `module_name` through a
    /// `declare module` block. The augmented module is expected to supply
    /// the runtime tag function itself.
    Augmented {
        module_name: String,
    },
}

impl EmissionMode {
    pub fn augmented_module_name(&self) -> Option<&str> {
        match self {
            Self::Local => None,
            Self::Augmented { module_name } => Some(module_name.as_str()),
        }
    }
}
