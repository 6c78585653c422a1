/// The sections of the Kodium website, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Posts,
}

impl kodium::SectionId for SectionId {
    const ALL: &'static [Self] = &[Self::Posts];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Posts => "posts",
        }
    }
}
