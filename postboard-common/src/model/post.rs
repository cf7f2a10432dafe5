use crate::model::Id;
use serde::{
    Deserialize, Deserializer, Serialize,
    de::{Error, Unexpected},
};
use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};
use thiserror::Error;
use time::OffsetDateTime;

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash)]
pub struct PostMarker;

pub type PostId = Id<PostMarker>;

#[derive(Clone, Eq, PartialEq, Debug, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub name: String,
    pub author: String,
    pub title: String,
    pub content: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// The columns of a post that are supplied on insert.
#[derive(Clone, Eq, PartialEq, Debug, Default, Hash, Deserialize, Serialize)]
pub struct NewPost {
    pub name: String,
    pub author: String,
    pub title: String,
    pub content: String,
}

/// Direction of a sort over a post column.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash, Error)]
#[error("The sort order is invalid, expected ASC or DESC: {0}")]
pub struct InvalidSortOrderError(String);

impl SortOrder {
    /// The SQL keyword for this direction.
    #[must_use]
    pub fn as_sql(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

impl Display for SortOrder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_sql())
    }
}

impl FromStr for SortOrder {
    type Err = InvalidSortOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("ASC") {
            Ok(SortOrder::Asc)
        } else if s.eq_ignore_ascii_case("DESC") {
            Ok(SortOrder::Desc)
        } else {
            Err(InvalidSortOrderError(s.to_owned()))
        }
    }
}

impl<'de> Deserialize<'de> for SortOrder {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let inner = String::deserialize(deserializer)?;
        inner
            .parse()
            .map_err(|err: InvalidSortOrderError| {
                Error::invalid_value(Unexpected::Str(&err.0), &"ASC or DESC")
            })
    }
}

#[cfg(test)]
mod tests {
    use crate::model::post::{Post, PostId, SortOrder};
    use time::macros::datetime;

    #[test]
    fn sort_order_parsing() {
        for asc in ["ASC", "asc", "Asc"] {
            assert_eq!(asc.parse::<SortOrder>(), Ok(SortOrder::Asc));
        }
        for desc in ["DESC", "desc", "dEsC"] {
            assert_eq!(desc.parse::<SortOrder>(), Ok(SortOrder::Desc));
        }
        for invalid in ["", "ascending", "ASC;DROP TABLE posts", "up"] {
            assert!(invalid.parse::<SortOrder>().is_err());
        }
    }

    #[test]
    fn sort_order_serde() {
        let order: SortOrder = serde_json::from_str("\"desc\"").unwrap();
        assert_eq!(order, SortOrder::Desc);
        assert!(serde_json::from_str::<SortOrder>("\"sideways\"").is_err());
        assert_eq!(serde_json::to_string(&SortOrder::Asc).unwrap(), "\"ASC\"");
        assert_eq!(SortOrder::default(), SortOrder::Asc);
    }

    #[test]
    fn post_serializes_camel_case() {
        let post = Post {
            id: PostId::new(7),
            name: "Post7".into(),
            author: "Author7".into(),
            title: "Title7".into(),
            content: "Content".into(),
            created_at: datetime!(2025-01-01 12:00 UTC),
            updated_at: datetime!(2025-01-02 12:00 UTC),
        };

        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["name"], "Post7");
        assert_eq!(json["createdAt"], "2025-01-01T12:00:00Z");
        assert_eq!(json["updatedAt"], "2025-01-02T12:00:00Z");
        assert!(json.get("created_at").is_none());
    }
}
