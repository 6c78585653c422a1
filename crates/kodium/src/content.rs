mod collections;
mod context;
mod front_matter;
mod item;
mod loader;
mod page;
mod section;
pub(crate) mod section_id;
mod site;
mod sorting;
mod tag;

pub use collections::*;
pub use context::*;
pub use front_matter::*;
pub use item::*;
pub use loader::*;
pub use page::*;
pub use section::*;
pub use section_id::SectionId;
pub use site::*;
pub use sorting::*;
pub use tag::*;
