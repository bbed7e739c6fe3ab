mod document_type_utility;
#[allow(clippy::module_inception)]
mod emitter;
mod generated_module;
mod registry_literal;

pub use emitter::Emitter;
pub use generated_module::GeneratedModule;
pub use registry_literal::RegistryLiteral;

#[cfg(test)]
mod tests;
