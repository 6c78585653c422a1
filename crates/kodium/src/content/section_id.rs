use std::fmt::Debug;
use std::hash::Hash;

/// The closed set of sections a site is made of.
///
/// Implemented by a fieldless enum, so the set of sections (and the order they
/// are listed in the site navigation) is fixed at compile time.
pub trait SectionId: Debug + Copy + Eq + Hash + Send + Sync + 'static {
    /// Every section, in navigation order.
    const ALL: &'static [Self];

    /// The identifier used as both the section's URL segment and its content directory.
    fn as_str(&self) -> &'static str;

    /// The title used when the section's content does not declare one.
    fn default_title(&self) -> String {
        let id = self.as_str();
        let mut chars = id.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}
