//! A small builder for immutable markup trees.
//!
//! Elements are built with plain function calls and chained attribute setters.
//! Children are described declaratively with [`Content`], where optional or
//! repeated values flatten into the parent and absent values contribute nothing.

mod component;
mod content;
mod document;
mod element;
mod elements;
pub mod renderer;
pub mod visitor;

pub use component::*;
pub use content::*;
pub use document::*;
pub use element::*;
pub use elements::*;
