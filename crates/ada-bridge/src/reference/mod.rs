//! Reference resolution through the analysis service.

mod capabilities;
mod declaration;
mod element;
mod identity;
mod resolver;

pub use capabilities::{Named, Referencing, SelfIdentifying};
pub use element::ReferenceElement;
pub use identity::texts_match;
pub use resolver::ReferenceResolver;
