use async_trait::async_trait;
use mobilia_core::AppError;
use sqlx::{PgPool, Postgres};
use uuid::Uuid;

/// Read/clear access to the category image reference.
///
/// Behind a trait so the API handlers can run against an in-memory double in
/// integration tests; production wires in [`CategoryRepository`].
#[async_trait]
pub trait CategoryStore: Send + Sync {
    /// Current public URL of the category's image, if any.
    async fn image_url(&self, category_id: Uuid) -> Result<Option<String>, AppError>;

    /// Clear the category's image reference after its object was deleted.
    async fn clear_image_url(&self, category_id: Uuid) -> Result<(), AppError>;
}

/// Postgres-backed category image reference repository.
#[derive(Clone)]
pub struct CategoryRepository {
    pool: PgPool,
}

impl CategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryStore for CategoryRepository {
    #[tracing::instrument(skip(self), fields(db.table = "categories", db.operation = "select"))]
    async fn image_url(&self, category_id: Uuid) -> Result<Option<String>, AppError> {
        let url = sqlx::query_scalar::<Postgres, Option<String>>(
            "SELECT image_url FROM categories WHERE id = $1",
        )
        .bind(category_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(url.flatten())
    }

    #[tracing::instrument(skip(self), fields(db.table = "categories", db.operation = "update"))]
    async fn clear_image_url(&self, category_id: Uuid) -> Result<(), AppError> {
        sqlx::query("UPDATE categories SET image_url = NULL WHERE id = $1")
            .bind(category_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
