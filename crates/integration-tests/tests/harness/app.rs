//! Demo user API exercising every part of the reporting boundary

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{Method, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{any, get};
use axum::{Json, Router};
use faultline_config::Config;
use faultline_core::{ClassifiedError, ResultExt, catalog};
use faultline_http::{ErrorResponse, JsonBody, fallback, reporting_layers, require_method};
use faultline_validate::{Validator, validate_id, validate_required};
use serde::{Deserialize, Serialize};

/// Email that always collides with an existing account
pub const TAKEN_EMAIL: &str = "admin@example.com";

/// User id whose lookup fails with a database error
pub const DATABASE_FAILURE_ID: i64 = 500;

#[derive(Debug, Serialize)]
struct User {
    id: i64,
    name: String,
    email: String,
}

#[derive(Debug, Deserialize)]
struct NewUser {
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

pub fn router(config: &Config) -> Router {
    let validator = Arc::new(Validator::new(config.validation.clone()));

    let app = Router::new()
        .route("/users/{id}", get(find_user))
        .route(
            "/users",
            any(create_user).layer(axum::middleware::from_fn(|req, next| {
                require_method(Method::POST, req, next)
            })),
        )
        .route("/panic", get(explode))
        .route("/io", get(io_failure))
        .fallback(fallback)
        .with_state(validator);

    reporting_layers(app, &config.reporting)
}

async fn find_user(Path(id): Path<String>) -> Result<Json<User>, ErrorResponse> {
    let id: i64 = id.parse().format_err("ID_INVALIDO")?;
    validate_id(id, "user")?;

    match id {
        DATABASE_FAILURE_ID => Err(ClassifiedError::database("DB_CONNECTION_FAILED", "Database connection failed")
            .with_detail("Connection timed out after 30 seconds")
            .into()),
        999 => Err(catalog::USER_NOT_FOUND.with_detail(format!("ID: {id}")).into()),
        _ => Ok(Json(User {
            id,
            name: "Maria Silva".to_owned(),
            email: "maria@example.com".to_owned(),
        })),
    }
}

async fn create_user(
    State(validator): State<Arc<Validator>>,
    JsonBody(user): JsonBody<NewUser>,
) -> Result<impl IntoResponse, ErrorResponse> {
    validate_required(&user.name, "name")?;
    validator.email(&user.email)?;
    validator.password(&user.password)?;

    if user.email == TAKEN_EMAIL {
        return Err(catalog::EMAIL_EXISTS.with_detail(format!("Email: {}", user.email)).into());
    }

    Ok((StatusCode::CREATED, Json(serde_json::json!({ "message": "User created" }))))
}

#[allow(clippy::unused_async)]
async fn explode() -> &'static str {
    panic!("lookup table corrupted")
}

async fn io_failure() -> Result<String, ErrorResponse> {
    let contents = std::fs::read_to_string("/nonexistent/faultline/settings.toml")?;
    Ok(contents)
}
