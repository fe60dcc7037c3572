//! Project identity: what kind of project is generated, under which name,
//! and where.
//!
//! ## Main Parts
//!
//! - [`ProjectKind`] - The fixed set of project types (Demo, Game, Test)
//! - [`ProjectName`] - A validated, lowercased identifier
//! - [`ProjectDescriptor`] - The (kind, name, destination) triple consumed by the generator

pub mod descriptor;
pub mod kind;
pub mod name;

pub use descriptor::ProjectDescriptor;
pub use kind::ProjectKind;
pub use name::ProjectName;
