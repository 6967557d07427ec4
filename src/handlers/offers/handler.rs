//! Offer handler implementations
//!
//! Reads are open. Mutations require the `AuthenticatedUser` extractor,
//! which rejects unauthenticated requests with 403 before any row is
//! fetched.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::{
    error::AppResult, middleware::auth::AuthenticatedUser, services::OfferService, state::AppState,
};

use super::{
    request::{CreateOfferRequest, UpdateOfferRequest},
    response::OfferResponse,
};

/// List all offers
pub async fn list_offers(State(state): State<AppState>) -> AppResult<Json<Vec<OfferResponse>>> {
    let offers = OfferService::list_offers(state.db()).await?;
    Ok(Json(offers))
}

/// Create a new offer; the caller becomes the author
pub async fn create_offer(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreateOfferRequest>,
) -> AppResult<(StatusCode, Json<OfferResponse>)> {
    payload.validate()?;

    let offer = OfferService::create_offer(state.db(), auth_user.id, payload).await?;

    Ok((StatusCode::CREATED, Json(offer)))
}

/// Get a specific offer
pub async fn get_offer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<OfferResponse>> {
    let offer = OfferService::get_offer(state.db(), id).await?;
    Ok(Json(offer))
}

/// Update an offer (author only)
pub async fn update_offer(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateOfferRequest>,
) -> AppResult<Json<OfferResponse>> {
    payload.validate()?;

    let offer = OfferService::update_offer(state.db(), id, auth_user.id, payload).await?;

    Ok(Json(offer))
}

/// Delete an offer (author only)
pub async fn delete_offer(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    OfferService::delete_offer(state.db(), id, auth_user.id).await?;
    Ok(StatusCode::NO_CONTENT)
}
