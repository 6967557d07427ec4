//! Offer repository

use sqlx::PgPool;

use crate::{error::AppResult, models::Offer};

/// Repository for offer database operations
pub struct OfferRepository;

impl OfferRepository {
    /// Create a new offer owned by `author_id`
    pub async fn create(
        pool: &PgPool,
        address: &str,
        size: &str,
        property_type: &str,
        price: i32,
        sharing: bool,
        text: &str,
        author_id: i64,
    ) -> AppResult<Offer> {
        let offer = sqlx::query_as::<_, Offer>(
            r#"
            INSERT INTO offers (address, size, property_type, price, sharing, text, author_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(address)
        .bind(size)
        .bind(property_type)
        .bind(price)
        .bind(sharing)
        .bind(text)
        .bind(author_id)
        .fetch_one(pool)
        .await?;

        Ok(offer)
    }

    /// Find offer by ID
    pub async fn find_by_id(pool: &PgPool, id: i64) -> AppResult<Option<Offer>> {
        let offer = sqlx::query_as::<_, Offer>(r#"SELECT * FROM offers WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(offer)
    }

    /// Update offer fields; omitted fields are left unchanged.
    /// `author_id` is never touched.
    pub async fn update(
        pool: &PgPool,
        id: i64,
        address: Option<&str>,
        size: Option<&str>,
        property_type: Option<&str>,
        price: Option<i32>,
        sharing: Option<bool>,
        text: Option<&str>,
    ) -> AppResult<Offer> {
        let offer = sqlx::query_as::<_, Offer>(
            r#"
            UPDATE offers
            SET
                address = COALESCE($2, address),
                size = COALESCE($3, size),
                property_type = COALESCE($4, property_type),
                price = COALESCE($5, price),
                sharing = COALESCE($6, sharing),
                text = COALESCE($7, text)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(address)
        .bind(size)
        .bind(property_type)
        .bind(price)
        .bind(sharing)
        .bind(text)
        .fetch_one(pool)
        .await?;

        Ok(offer)
    }

    /// Delete offer
    pub async fn delete(pool: &PgPool, id: i64) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM offers WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// List all offers, ascending by creation time
    pub async fn list(pool: &PgPool) -> AppResult<Vec<Offer>> {
        let offers = sqlx::query_as::<_, Offer>(r#"SELECT * FROM offers ORDER BY created"#)
            .fetch_all(pool)
            .await?;

        Ok(offers)
    }

    /// Ids of all offers authored by a user, ascending by creation time
    pub async fn ids_by_author(pool: &PgPool, author_id: i64) -> AppResult<Vec<i64>> {
        let ids: Vec<i64> =
            sqlx::query_scalar(r#"SELECT id FROM offers WHERE author_id = $1 ORDER BY created"#)
                .bind(author_id)
                .fetch_all(pool)
                .await?;

        Ok(ids)
    }
}
