use crate::EmissionMode;
use crate::EmitterConfig;
use crate::Registry;
use crate::overload::Overload;
use crate::overload::ParamType;
use crate::overload::ReturnType;

/// The full family of tag-function signatures for one generation run: one
/// literal-keyed overload per registry entry (in registry order) followed
/// by exactly one catch-all accepting any `string`.
///
/// A [`Registry`] with no entries yields a set containing only the
/// catch-all.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OverloadSet {
    catch_all: Overload,
    overloads: Vec<Overload>,
}

#[allow(clippy::len_without_is_empty)]
impl OverloadSet {
    pub fn generate(
        registry: &Registry,
        mode: &EmissionMode,
        config: &EmitterConfig,
    ) -> Self {
        let registry_name = config.registry_identifier();
        let overloads = registry
            .entries()
            .map(|(raw_text, definition_name)| {
                let return_type = match mode {
                    EmissionMode::Local => ReturnType::RegistryIndex {
                        registry_name: registry_name.to_owned(),
                        raw_text: raw_text.to_owned(),
                    },
                    EmissionMode::Augmented { .. } => ReturnType::DefinitionRef {
                        definitions_module: config.definitions_module.to_owned(),
                        definition_name: definition_name.to_owned(),
                    },
                };

                Overload {
                    param_type: ParamType::Literal(raw_text.to_owned()),
                    return_type,
                }
            })
            .collect();

        Self {
            catch_all: Overload::catch_all(),
            overloads,
        }
    }

    pub fn catch_all(&self) -> &Overload {
        &self.catch_all
    }

    /// The literal-keyed overloads, excluding the catch-all.
    pub fn literal_overloads(&self) -> &[Overload] {
        self.overloads.as_slice()
    }

    /// Every signature, literal-keyed overloads first and the catch-all last.
    pub fn iter(&self) -> impl Iterator<Item = &Overload> {
        self.overloads.iter().chain(std::iter::once(&self.catch_all))
    }

    pub fn len(&self) -> usize {
        self.overloads.len() + 1
    }
}
