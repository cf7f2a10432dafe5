use crate::{
    record::PostRecord,
    repository::PostRepository,
    schema::{CREATE_POSTS_TABLE, DROP_POSTS_TABLE},
};
use async_trait::async_trait;
use postboard_common::{
    model::post::{Post, PostId, SortOrder},
    seed::seed_posts,
};
use sqlx::{PgPool, Postgres, QueryBuilder, postgres::PgPoolOptions, query, query_as};
use thiserror::Error;
use tracing::{debug, info};

pub type Result<T, E = DbError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum DbError {
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

#[derive(Clone, Debug)]
pub struct DbClient {
    pool: PgPool,
}

impl DbClient {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        Ok(Self::new(pool))
    }

    /// Creates the posts table if it does not exist yet, leaving any rows in
    /// place.
    pub async fn ensure_schema(&self) -> Result<()> {
        query(CREATE_POSTS_TABLE).execute(&self.pool).await?;
        Ok(())
    }

    /// Waits for checked out connections to return and closes the pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl PostRepository for DbClient {
    async fn seed(&self) -> Result<()> {
        let mut transaction = self.pool.begin().await?;

        query(DROP_POSTS_TABLE).execute(&mut *transaction).await?;
        query(CREATE_POSTS_TABLE).execute(&mut *transaction).await?;

        let mut insert =
            QueryBuilder::<Postgres>::new("INSERT INTO posts (name, author, title, content) ");
        insert.push_values(seed_posts(), |mut row, post| {
            row.push_bind(post.name)
                .push_bind(post.author)
                .push_bind(post.title)
                .push_bind(post.content);
        });
        let inserted = insert.build().execute(&mut *transaction).await?;

        transaction.commit().await?;

        info!(rows = inserted.rows_affected(), "Seeded posts table");
        Ok(())
    }

    async fn fetch_posts(&self) -> Result<Vec<Post>> {
        let records = query_as::<_, PostRecord>(
            "
            SELECT
                id, name, author, title, content, created_at, updated_at
            FROM
                posts
            ORDER BY
                id
            ",
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = records.len(), "Fetched posts");
        Ok(records.into_iter().map(Post::from).collect())
    }

    async fn fetch_post(&self, post_id: PostId) -> Result<Option<Post>> {
        let record = query_as::<_, PostRecord>(
            "
            SELECT
                id, name, author, title, content, created_at, updated_at
            FROM
                posts
            WHERE
                id = $1
            ",
        )
        .bind(post_id.get())
        .fetch_optional(&self.pool)
        .await?;

        debug!(%post_id, found = record.is_some(), "Fetched post");
        Ok(record.map(Post::from))
    }

    async fn fetch_posts_by_author(&self, author: &str) -> Result<Vec<Post>> {
        let records = query_as::<_, PostRecord>(
            "
            SELECT
                id, name, author, title, content, created_at, updated_at
            FROM
                posts
            WHERE
                author = $1
            ORDER BY
                id
            ",
        )
        .bind(author)
        .fetch_all(&self.pool)
        .await?;

        debug!(author, count = records.len(), "Fetched posts by author");
        Ok(records.into_iter().map(Post::from).collect())
    }

    async fn fetch_posts_sorted_by_name(&self, order: SortOrder) -> Result<Vec<Post>> {
        // The direction can't be a bind parameter, so each one gets its own statement.
        let sql = match order {
            SortOrder::Asc => {
                "
                SELECT
                    id, name, author, title, content, created_at, updated_at
                FROM
                    posts
                ORDER BY
                    name ASC, id ASC
                "
            }
            SortOrder::Desc => {
                "
                SELECT
                    id, name, author, title, content, created_at, updated_at
                FROM
                    posts
                ORDER BY
                    name DESC, id DESC
                "
            }
        };

        let records = query_as::<_, PostRecord>(sql)
            .fetch_all(&self.pool)
            .await?;

        debug!(%order, count = records.len(), "Fetched posts sorted by name");
        Ok(records.into_iter().map(Post::from).collect())
    }
}
