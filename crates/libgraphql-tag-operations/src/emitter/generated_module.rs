use crate::EmissionMode;
use crate::OverloadSet;
use crate::Registry;

/// The result of one generation run: the emitted module text together with
/// the intermediate [`Registry`] and [`OverloadSet`] it was derived from.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratedModule {
    pub(super) content: String,
    pub(super) mode: EmissionMode,
    pub(super) overloads: OverloadSet,
    pub(super) registry: Registry,
}

impl GeneratedModule {
    pub fn content(&self) -> &str {
        self.content.as_str()
    }

    pub fn into_content(self) -> String {
        self.content
    }

    pub fn mode(&self) -> &EmissionMode {
        &self.mode
    }

    pub fn overloads(&self) -> &OverloadSet {
        &self.overloads
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}

impl std::fmt::Display for GeneratedModule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.content.as_str())
    }
}
