use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde_json::json;

use crate::db;
use crate::error::AppError;
use crate::models::UserView;
use crate::password;
use crate::state::SharedState;
use crate::validation::{self, UserPayload};

pub async fn list(State(state): State<SharedState>) -> Result<Json<Vec<UserView>>, AppError> {
    let rows = db::users::list_with_team(&state.pool).await?;
    Ok(Json(rows.into_iter().map(UserView::from).collect()))
}

pub async fn get(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
) -> Result<Json<UserView>, AppError> {
    let row = db::users::find_with_team(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
    Ok(Json(UserView::from(row)))
}

pub async fn create(
    State(state): State<SharedState>,
    Json(req): Json<UserPayload>,
) -> Result<(StatusCode, Json<UserView>), AppError> {
    validation::validate_user(&req).map_err(AppError::Validation)?;

    if db::users::find_by_email(&state.pool, &req.email)
        .await?
        .is_some()
    {
        return Err(AppError::Conflict("Email already exists".to_string()));
    }
    check_team_ref(&state, req.teamid).await?;

    let password_hash = hash_password(&req)?;

    let user = db::users::create(
        &state.pool,
        &req.name,
        &req.email,
        &password_hash,
        &req.role,
        req.teamid,
    )
    .await
    .map_err(conflict_on_duplicate_email)?;

    tracing::info!(user_id = user.id, "User created");

    let row = db::users::find_with_team(&state.pool, user.id)
        .await?
        .ok_or_else(|| AppError::Internal("Created user vanished".to_string()))?;
    Ok((StatusCode::CREATED, Json(UserView::from(row))))
}

pub async fn update(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
    Json(req): Json<UserPayload>,
) -> Result<Json<UserView>, AppError> {
    validation::validate_user(&req).map_err(AppError::Validation)?;

    db::users::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    if db::users::find_by_email_excluding(&state.pool, &req.email, id)
        .await?
        .is_some()
    {
        return Err(AppError::Conflict("Email already exists".to_string()));
    }
    check_team_ref(&state, req.teamid).await?;

    let password_hash = hash_password(&req)?;

    db::users::update(
        &state.pool,
        id,
        &req.name,
        &req.email,
        &password_hash,
        &req.role,
        req.teamid,
    )
    .await
    .map_err(conflict_on_duplicate_email)?;

    let row = db::users::find_with_team(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
    Ok(Json(UserView::from(row)))
}

pub async fn delete(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
) -> Result<Json<serde_json::Value>, AppError> {
    let user = db::users::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    // Integrity guard: a populated team must keep at least one member.
    if let Some(team_id) = user.teamid {
        let members = db::users::count_by_team(&state.pool, team_id).await?;
        if members <= 1 {
            return Err(AppError::Conflict(
                "Cannot delete user: team must have at least 1 user".to_string(),
            ));
        }
    }

    db::users::delete(&state.pool, id).await?;
    tracing::info!(user_id = id, "User deleted");

    Ok(Json(json!({ "message": "User deleted successfully" })))
}

/// The one hashing step on the user write path; create and update both go
/// through here.
fn hash_password(req: &UserPayload) -> Result<String, AppError> {
    password::hash(&req.password).map_err(AppError::Internal)
}

/// A non-null team reference must point to an existing team.
async fn check_team_ref(state: &SharedState, teamid: Option<i32>) -> Result<(), AppError> {
    if let Some(team_id) = teamid {
        if !db::teams::exists(&state.pool, team_id).await? {
            return Err(AppError::Conflict("Team does not exist".to_string()));
        }
    }
    Ok(())
}

/// Backstop behind the application-level pre-check: the unique index on
/// email still wins any race.
fn conflict_on_duplicate_email(e: sqlx::Error) -> AppError {
    match e {
        sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
            AppError::Conflict("Email already exists".to_string())
        }
        _ => AppError::Database(e),
    }
}
