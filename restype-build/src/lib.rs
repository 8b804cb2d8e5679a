//! Build-time generator for strongly-typed resource accessors.
//!
//! This crate scans module directories for `resources/*.resx` documents and
//! emits one Rust source file per document under the module's `gen/`
//! directory: an accessor type with one getter per resource entry, resolved
//! at runtime through `::restype::ResourceManager`.
//!
//! # Example
//!
//! In a `build.rs`:
//!
//! ```ignore
//! fn main() {
//!     restype_build::ResourceGenerator::for_siblings("..")
//!         .expect("failed to discover modules")
//!         .run()
//!         .expect("failed to generate resource accessors");
//!
//!     println!("cargo:rerun-if-changed=../");
//! }
//! ```

mod generator;
mod resx;
mod scanner;

pub use generator::{ResourceGenerator, generate};
pub use resx::ResourceEntry;
pub use scanner::{Access, GenerationRequest};
