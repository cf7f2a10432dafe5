use postboard_common::model::post::Post;
use sqlx::FromRow;
use time::OffsetDateTime;

#[derive(Clone, Eq, PartialEq, Debug, Hash, FromRow)]
pub(crate) struct PostRecord {
    pub id: i32,
    pub name: String,
    pub author: String,
    pub title: String,
    pub content: String,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl From<PostRecord> for Post {
    fn from(value: PostRecord) -> Self {
        Self {
            id: value.id.into(),
            name: value.name,
            author: value.author,
            title: value.title,
            content: value.content,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::record::PostRecord;
    use postboard_common::model::post::Post;
    use time::macros::datetime;

    #[test]
    fn record_into_post() {
        let record = PostRecord {
            id: 2,
            name: "Post2".into(),
            author: "Author2".into(),
            title: "Title2".into(),
            content: "This is the content of post 2".into(),
            created_at: datetime!(2025-03-01 08:30 UTC),
            updated_at: datetime!(2025-03-01 09:00 UTC),
        };

        let post = Post::from(record);
        assert_eq!(post.id.get(), 2);
        assert_eq!(post.author, "Author2");
        assert_eq!(post.updated_at, datetime!(2025-03-01 09:00 UTC));
    }
}
