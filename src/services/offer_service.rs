//! Offer service
//!
//! Author checks happen here, after the row is fetched; the requirement
//! that a token be present at all is enforced earlier by the
//! `AuthenticatedUser` extractor, so unauthenticated mutations never
//! reach the database.

use sqlx::PgPool;

use crate::{
    constants::{DEFAULT_OFFER_SIZE, DEFAULT_PROPERTY_TYPE},
    db::repositories::{OfferRepository, UserRepository},
    error::{AppError, AppResult},
    handlers::offers::{
        request::{CreateOfferRequest, UpdateOfferRequest},
        response::OfferResponse,
    },
    models::Offer,
};

/// Offer service for business logic
pub struct OfferService;

impl OfferService {
    /// List all offers, ascending by creation time
    pub async fn list_offers(pool: &PgPool) -> AppResult<Vec<OfferResponse>> {
        let offers = OfferRepository::list(pool).await?;

        futures::future::try_join_all(
            offers
                .into_iter()
                .map(|o| Self::to_offer_response(pool, o)),
        )
        .await
    }

    /// Create a new offer; the author is always the authenticated caller
    pub async fn create_offer(
        pool: &PgPool,
        author_id: i64,
        payload: CreateOfferRequest,
    ) -> AppResult<OfferResponse> {
        let offer = OfferRepository::create(
            pool,
            payload.address.as_deref().unwrap_or(""),
            payload.size.as_deref().unwrap_or(DEFAULT_OFFER_SIZE),
            payload
                .property_type
                .as_deref()
                .unwrap_or(DEFAULT_PROPERTY_TYPE),
            payload.price.unwrap_or(0),
            payload.sharing.unwrap_or(false),
            payload.text.as_deref().unwrap_or(""),
            author_id,
        )
        .await?;

        Self::to_offer_response(pool, offer).await
    }

    /// Get offer by ID
    pub async fn get_offer(pool: &PgPool, id: i64) -> AppResult<OfferResponse> {
        let offer = OfferRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Offer not found".to_string()))?;

        Self::to_offer_response(pool, offer).await
    }

    /// Update offer; only the author may mutate
    pub async fn update_offer(
        pool: &PgPool,
        id: i64,
        requester_id: i64,
        payload: UpdateOfferRequest,
    ) -> AppResult<OfferResponse> {
        let offer = OfferRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Offer not found".to_string()))?;

        if !offer.is_authored_by(requester_id) {
            return Err(AppError::Forbidden(
                "Only the author may modify this offer".to_string(),
            ));
        }

        let updated = OfferRepository::update(
            pool,
            id,
            payload.address.as_deref(),
            payload.size.as_deref(),
            payload.property_type.as_deref(),
            payload.price,
            payload.sharing,
            payload.text.as_deref(),
        )
        .await?;

        Self::to_offer_response(pool, updated).await
    }

    /// Delete offer; only the author may mutate
    pub async fn delete_offer(pool: &PgPool, id: i64, requester_id: i64) -> AppResult<()> {
        let offer = OfferRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Offer not found".to_string()))?;

        if !offer.is_authored_by(requester_id) {
            return Err(AppError::Forbidden(
                "Only the author may delete this offer".to_string(),
            ));
        }

        OfferRepository::delete(pool, id).await
    }

    async fn to_offer_response(pool: &PgPool, offer: Offer) -> AppResult<OfferResponse> {
        let author = UserRepository::username_by_id(pool, offer.author_id).await?;

        Ok(OfferResponse {
            id: offer.id,
            address: offer.address,
            size: offer.size,
            property_type: offer.property_type,
            price: offer.price,
            sharing: offer.sharing,
            text: offer.text,
            author: author.unwrap_or_default(),
        })
    }
}
