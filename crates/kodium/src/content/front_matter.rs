use std::str::FromStr;
use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Deserializer};

use crate::content::Tag;

static TOML_REGEX: OnceLock<Regex> = OnceLock::new();

fn toml_regex() -> &'static Regex {
    TOML_REGEX.get_or_init(|| {
        let pattern = r"^[[:space:]]*\+\+\+(\r?\n(?s).*?(?-s))\+\+\+[[:space:]]*(?:$|(?:\r?\n((?s).*(?-s))$))";
        Regex::new(pattern).expect("failed to compile regex for TOML front matter")
    })
}

#[derive(Debug)]
pub struct RawTomlFrontMatter<'a>(&'a str);

impl RawTomlFrontMatter<'_> {
    pub fn deserialize<T>(&self) -> Result<T, toml::de::Error>
    where
        T: serde::de::DeserializeOwned,
    {
        toml::from_str(self.0)
    }
}

/// Splits `+++`-fenced TOML front matter from the content that follows it.
///
/// Returns `None` when the text has no front matter.
pub fn split_front_matter(content: &str) -> Option<(RawTomlFrontMatter<'_>, &str)> {
    let captures = toml_regex().captures(content)?;
    let front_matter = RawTomlFrontMatter(captures.get(1)?.as_str());
    let content = captures.get(2).map_or("", |m| m.as_str());

    Some((front_matter, content))
}

#[derive(Debug, Default, Deserialize)]
pub struct IndexFrontMatter {
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SectionFrontMatter {
    pub title: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ItemFrontMatter {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(deserialize_with = "from_toml_date")]
    pub date: NaiveDate,
    #[serde(default)]
    pub tags: Vec<Tag>,
    pub slug: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PageFrontMatter {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub slug: Option<String>,
}

/// Accepts either a TOML date (`date = 2023-06-01`) or a string holding one.
pub fn from_toml_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum DatetimeOrString {
        Datetime(toml::value::Datetime),
        String(String),
    }

    let datetime = match DatetimeOrString::deserialize(deserializer)? {
        DatetimeOrString::Datetime(datetime) => datetime,
        DatetimeOrString::String(string) => {
            toml::value::Datetime::from_str(&string).map_err(D::Error::custom)?
        }
    };

    let date = datetime
        .date
        .ok_or_else(|| D::Error::custom("expected a date, found a bare time"))?;

    NaiveDate::from_ymd_opt(date.year.into(), date.month.into(), date.day.into())
        .ok_or_else(|| D::Error::custom(format!("invalid date: {datetime}")))
}

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_split_front_matter() {
        let text = indoc! {r#"
            +++
            title = "Hello"
            +++

            Body text.
        "#};

        let (front_matter, content) = split_front_matter(text).unwrap();
        let front_matter: SectionFrontMatter = front_matter.deserialize().unwrap();

        assert_eq!(front_matter.title.as_deref(), Some("Hello"));
        assert_eq!(content, "Body text.\n");
    }

    #[test]
    fn test_no_front_matter() {
        assert!(split_front_matter("# Just Markdown").is_none());
    }

    #[test]
    fn test_item_front_matter() {
        let text = indoc! {r#"
            +++
            title = "SwiftUI in practice"
            description = "Notes from shipping an app."
            date = 2023-06-01
            tags = ["swift", "ios"]
            +++
        "#};

        let (front_matter, _) = split_front_matter(text).unwrap();
        let front_matter: ItemFrontMatter = front_matter.deserialize().unwrap();

        assert_eq!(front_matter.title, "SwiftUI in practice");
        assert_eq!(
            front_matter.date,
            NaiveDate::from_ymd_opt(2023, 6, 1).unwrap()
        );
        assert_eq!(front_matter.tags, vec![Tag::new("swift"), Tag::new("ios")]);
        assert!(front_matter.slug.is_none());
    }

    #[test]
    fn test_item_date_as_string() {
        let text = indoc! {r#"
            +++
            title = "Hello"
            date = "2023-01-01T10:00:00Z"
            +++
        "#};

        let (front_matter, _) = split_front_matter(text).unwrap();
        let front_matter: ItemFrontMatter = front_matter.deserialize().unwrap();

        assert_eq!(
            front_matter.date,
            NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()
        );
        assert_eq!(front_matter.description, "");
        assert!(front_matter.tags.is_empty());
    }

    #[test]
    fn test_item_without_date_is_rejected() {
        let text = indoc! {r#"
            +++
            title = "Hello"
            +++
        "#};

        let (front_matter, _) = split_front_matter(text).unwrap();

        assert!(front_matter.deserialize::<ItemFrontMatter>().is_err());
    }
}
