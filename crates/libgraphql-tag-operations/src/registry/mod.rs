mod duplicate_source;
#[allow(clippy::module_inception)]
mod registry;
mod registry_builder;

pub use duplicate_source::DuplicateSource;
pub use registry::Registry;
pub use registry_builder::RegistryBuilder;
