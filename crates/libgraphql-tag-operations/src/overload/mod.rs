#[allow(clippy::module_inception)]
mod overload;
mod overload_set;
mod param_type;
mod return_type;

pub use overload::Overload;
pub use overload_set::OverloadSet;
pub use param_type::ParamType;
pub use return_type::ReturnType;
