use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde_json::json;
use sqlx::PgPool;

use crate::db;
use crate::error::AppError;
use crate::models::{Team, TeamView};
use crate::state::SharedState;
use crate::validation::{self, TeamPayload};

pub async fn list(State(state): State<SharedState>) -> Result<Json<Vec<TeamView>>, AppError> {
    let teams = db::teams::list_all(&state.pool).await?;

    let mut views = Vec::with_capacity(teams.len());
    for team in teams {
        views.push(with_members(&state.pool, team).await?);
    }
    Ok(Json(views))
}

pub async fn get(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
) -> Result<Json<TeamView>, AppError> {
    let team = db::teams::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Team not found".to_string()))?;
    Ok(Json(with_members(&state.pool, team).await?))
}

pub async fn create(
    State(state): State<SharedState>,
    Json(req): Json<TeamPayload>,
) -> Result<(StatusCode, Json<TeamView>), AppError> {
    validation::validate_team(&req).map_err(AppError::FieldErrors)?;
    let member_ids = dedupe(&req.users);

    if db::teams::find_by_name(&state.pool, &req.name)
        .await?
        .is_some()
    {
        return Err(AppError::Conflict("Team name already exists".to_string()));
    }
    check_members_exist(&state.pool, &member_ids).await?;

    // Team row and member reassignment commit or roll back together.
    let mut tx = state.pool.begin().await?;
    let team = db::teams::create(&mut *tx, &req.name, req.description.as_deref())
        .await
        .map_err(conflict_on_duplicate_name)?;
    db::users::assign_team(&mut *tx, &member_ids, team.id).await?;
    tx.commit().await?;

    tracing::info!(team_id = team.id, members = member_ids.len(), "Team created");

    let view = with_members(&state.pool, team).await?;
    Ok((StatusCode::CREATED, Json(view)))
}

pub async fn update(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
    Json(req): Json<TeamPayload>,
) -> Result<Json<TeamView>, AppError> {
    validation::validate_team(&req).map_err(AppError::FieldErrors)?;
    let member_ids = dedupe(&req.users);

    db::teams::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Team not found".to_string()))?;

    if db::teams::find_by_name_excluding(&state.pool, &req.name, id)
        .await?
        .is_some()
    {
        return Err(AppError::Conflict("Team name already exists".to_string()));
    }
    check_members_exist(&state.pool, &member_ids).await?;

    let mut tx = state.pool.begin().await?;
    let team = db::teams::update(&mut *tx, id, &req.name, req.description.as_deref())
        .await
        .map_err(conflict_on_duplicate_name)?;
    db::users::assign_team(&mut *tx, &member_ids, team.id).await?;
    tx.commit().await?;

    Ok(Json(with_members(&state.pool, team).await?))
}

pub async fn delete(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
) -> Result<Json<serde_json::Value>, AppError> {
    db::teams::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Team not found".to_string()))?;

    // Deletion policy: clear remaining member references, then drop the
    // team, atomically. No dangling teamid is left behind.
    let mut tx = state.pool.begin().await?;
    db::users::clear_team(&mut *tx, id).await?;
    db::teams::delete(&mut *tx, id).await?;
    tx.commit().await?;

    tracing::info!(team_id = id, "Team deleted");

    Ok(Json(json!({ "message": "Team deleted successfully" })))
}

async fn with_members(pool: &PgPool, team: Team) -> Result<TeamView, AppError> {
    let members = db::users::list_by_team(pool, team.id).await?;
    Ok(TeamView::new(team, members))
}

/// Every listed member id must resolve to an existing user; any miss fails
/// the whole operation before a single row is written.
async fn check_members_exist(pool: &PgPool, ids: &[i32]) -> Result<(), AppError> {
    let found = db::users::count_existing(pool, ids).await?;
    if found != ids.len() as i64 {
        return Err(AppError::Conflict("Some users do not exist".to_string()));
    }
    Ok(())
}

// Repeated ids in the payload are harmless; collapse them so the existence
// count lines up.
fn dedupe(ids: &[i32]) -> Vec<i32> {
    let mut ids = ids.to_vec();
    ids.sort_unstable();
    ids.dedup();
    ids
}

fn conflict_on_duplicate_name(e: sqlx::Error) -> AppError {
    match e {
        sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
            AppError::Conflict("Team name already exists".to_string())
        }
        _ => AppError::Database(e),
    }
}
