//! Handlers for the `/auth` resource (register, login).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use padoca_core::error::CoreError;
use padoca_core::roles::is_valid_role;
use padoca_core::types::DbId;
use padoca_db::models::user::CreateUser;
use padoca_db::repositories::UserRepo;

use crate::auth::jwt::generate_access_token;
use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Minimum password length enforced on registration.
const MIN_PASSWORD_LENGTH: usize = 8;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/register`.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub nome: String,
    pub email: String,
    pub senha: String,
    pub perfil: String,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub senha: String,
}

/// Public user info returned by register and login.
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: DbId,
    pub nome: String,
    pub email: String,
    pub perfil: String,
}

/// Successful authentication response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserInfo,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/register
///
/// Create an account. All fields are required and the role must belong to
/// the fixed vocabulary; a duplicate email surfaces as 409.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<UserInfo>)> {
    if input.nome.trim().is_empty() || input.email.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Name and email are required".into(),
        )));
    }
    if !is_valid_role(&input.perfil) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Unknown role: {}",
            input.perfil
        ))));
    }
    validate_password_strength(&input.senha, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let hashed = hash_password(&input.senha)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let create_dto = CreateUser {
        name: input.nome,
        email: input.email,
        password_hash: hashed,
        role: input.perfil,
    };
    let user = UserRepo::create(&state.pool, &create_dto).await?;

    Ok((
        StatusCode::CREATED,
        Json(UserInfo {
            id: user.id,
            nome: user.name,
            email: user.email,
            perfil: user.role,
        }),
    ))
}

/// POST /api/v1/auth/login
///
/// Authenticate with email + password. Returns a bearer token carrying the
/// user's role claim. Unknown email and wrong password produce the same
/// message so the endpoint does not reveal which one was wrong.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    if input.email.trim().is_empty() || input.senha.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Email and password are required".into(),
        )));
    }

    let user = UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Invalid email or password".into()))
        })?;

    let password_valid = verify_password(&input.senha, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid email or password".into(),
        )));
    }

    let token = generate_access_token(user.id, &user.role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    Ok(Json(LoginResponse {
        token,
        expires_in: state.config.jwt.access_token_expiry_mins * 60,
        user: UserInfo {
            id: user.id,
            nome: user.name,
            email: user.email,
            perfil: user.role,
        },
    }))
}
