//! Request handlers for the book CRUD surface.
//!
//! Each handler is an independent, stateless operation: validate input,
//! perform exactly one logical storage call, serialize the result. Unclassified
//! storage failures bubble through `AppError::Internal` via `?`.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::Value;
use uuid::Uuid;

use bookrack_http::error::AppError;

use super::models::{self, Book, BookPayload};
use super::repository::BookRepository;

/// Shared handler state: the component-scoped repository handle.
pub type BooksState = Arc<dyn BookRepository>;

/// Parse a raw request body and validate it against the record schema.
fn parse_payload(body: &str) -> Result<BookPayload, AppError> {
    let value: Value =
        serde_json::from_str(body).map_err(|err| AppError::malformed_body(err.to_string()))?;
    models::validate(&value).map_err(AppError::validation)
}

/// POST /book
pub async fn create_book(
    State(repository): State<BooksState>,
    body: String,
) -> Result<impl IntoResponse, AppError> {
    let payload = parse_payload(&body)?;

    // No preexisting-key check: a fresh v4 identifier colliding with a stored
    // one would silently overwrite it.
    let book = Book::from_payload(Uuid::new_v4().to_string(), payload);
    repository.put(&book).await?;

    Ok((StatusCode::CREATED, Json(book)))
}

/// GET /book/{isbn}
pub async fn get_book(
    State(repository): State<BooksState>,
    Path(isbn): Path<String>,
) -> Result<Json<Book>, AppError> {
    let book = repository
        .get(&isbn)
        .await?
        .ok_or_else(AppError::not_found)?;

    Ok(Json(book))
}

/// PUT /book/{isbn}
pub async fn update_book(
    State(repository): State<BooksState>,
    Path(isbn): Path<String>,
    body: String,
) -> Result<Json<Book>, AppError> {
    // Existence is checked before the body is parsed or validated.
    if repository.get(&isbn).await?.is_none() {
        return Err(AppError::not_found());
    }

    let payload = parse_payload(&body)?;
    let book = Book::from_payload(isbn, payload);
    repository.put(&book).await?;

    Ok(Json(book))
}

/// DELETE /book/{isbn}
pub async fn delete_book(
    State(repository): State<BooksState>,
    Path(isbn): Path<String>,
) -> Result<StatusCode, AppError> {
    if repository.get(&isbn).await?.is_none() {
        return Err(AppError::not_found());
    }

    repository.delete(&isbn).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /books
pub async fn list_books(
    State(repository): State<BooksState>,
) -> Result<Json<Vec<Book>>, AppError> {
    Ok(Json(repository.list().await?))
}
