//! Runtime support for generated resource accessor types.
//!
//! The generator emits one source file per resource document; each generated
//! type constructs a [`ResourceManager`] scoped by its resource-set
//! identifier and resolves entries against sets registered at startup by the
//! packaging step.

pub mod culture;
pub mod errors;
pub mod manager;
pub mod registry;

pub use culture::Culture;
pub use errors::{CultureError, ResourceError};
pub use manager::ResourceManager;
pub use registry::{ResourceSet, register_set};
