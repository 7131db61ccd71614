use sqlx::PgPool;

use crate::models::{User, UserTeamRow};

const WITH_TEAM: &str = "SELECT u.id, u.name, u.email, u.role, u.created_at,
            t.id AS team_id, t.name AS team_name,
            t.description AS team_description, t.created_at AS team_created_at
     FROM users u LEFT JOIN teams t ON u.teamid = t.id";

pub async fn list_with_team(pool: &PgPool) -> Result<Vec<UserTeamRow>, sqlx::Error> {
    sqlx::query_as::<_, UserTeamRow>(&format!("{WITH_TEAM} ORDER BY u.id"))
        .fetch_all(pool)
        .await
}

pub async fn find_with_team(pool: &PgPool, id: i32) -> Result<Option<UserTeamRow>, sqlx::Error> {
    sqlx::query_as::<_, UserTeamRow>(&format!("{WITH_TEAM} WHERE u.id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await
}

pub async fn find_by_email_excluding(
    pool: &PgPool,
    email: &str,
    id: i32,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1 AND id <> $2")
        .bind(email)
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn create(
    pool: &PgPool,
    name: &str,
    email: &str,
    password_hash: &str,
    role: &str,
    teamid: Option<i32>,
) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "INSERT INTO users (name, email, password_hash, role, teamid)
         VALUES ($1, $2, $3, $4, $5) RETURNING *",
    )
    .bind(name)
    .bind(email)
    .bind(password_hash)
    .bind(role)
    .bind(teamid)
    .fetch_one(pool)
    .await
}

pub async fn update(
    pool: &PgPool,
    id: i32,
    name: &str,
    email: &str,
    password_hash: &str,
    role: &str,
    teamid: Option<i32>,
) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "UPDATE users SET name = $2, email = $3, password_hash = $4, role = $5, teamid = $6
         WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(name)
    .bind(email)
    .bind(password_hash)
    .bind(role)
    .bind(teamid)
    .fetch_one(pool)
    .await
}

pub async fn delete(pool: &PgPool, id: i32) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn list_by_team(pool: &PgPool, team_id: i32) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE teamid = $1 ORDER BY id")
        .bind(team_id)
        .fetch_all(pool)
        .await
}

pub async fn count_by_team(pool: &PgPool, team_id: i32) -> Result<i64, sqlx::Error> {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users WHERE teamid = $1")
        .bind(team_id)
        .fetch_one(pool)
        .await?;
    Ok(row.0)
}

pub async fn count_existing(pool: &PgPool, ids: &[i32]) -> Result<i64, sqlx::Error> {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users WHERE id = ANY($1)")
        .bind(ids)
        .fetch_one(pool)
        .await?;
    Ok(row.0)
}

pub async fn assign_team<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    ids: &[i32],
    team_id: i32,
) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE users SET teamid = $1 WHERE id = ANY($2)")
        .bind(team_id)
        .bind(ids)
        .execute(executor)
        .await?;
    Ok(())
}

pub async fn clear_team<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    team_id: i32,
) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE users SET teamid = NULL WHERE teamid = $1")
        .bind(team_id)
        .execute(executor)
        .await?;
    Ok(())
}
