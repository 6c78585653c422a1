#![doc = include_str!("../README.md")]

pub mod content;
pub mod feed;
pub mod markdown;
mod permalink;
pub mod publish;
pub mod sitemap;
pub mod storage;
pub mod theme;

#[cfg(test)]
mod test_support;

pub use content::SectionId;
pub use permalink::*;
