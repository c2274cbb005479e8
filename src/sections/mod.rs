//! The fetch-fallback-invalidate binding.
//!
//! Every public section resolves through a [`SectionBinding`]: one fetch on
//! startup, fallback content when the backend is empty or erroring, and a
//! full re-resolve each time the [`ContentUpdates`] bus signals that an
//! admin mutation landed.

pub mod binding;
pub mod bus;
pub mod catalog;
pub mod source;

pub use binding::{SectionBinding, SectionData, SectionSource};
pub use bus::ContentUpdates;
pub use catalog::{ResolvedSection, Sections};
pub use source::{ListSource, SingletonSource};
