//! Configuration layering: default files, explicit files, environment
//! variables, then CLI overrides, resolved into a validated [`ResolvedConfig`].

mod loader;
mod raw;
mod resolved;
mod sources;

pub(crate) use loader::load;
pub(crate) use resolved::ResolvedConfig;
