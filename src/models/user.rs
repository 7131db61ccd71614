use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::TeamSummary;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: String,
    pub teamid: Option<i32>,
    pub created_at: DateTime<Utc>,
}

/// Flat row from the users ⋈ teams LEFT JOIN.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserTeamRow {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub team_id: Option<i32>,
    pub team_name: Option<String>,
    pub team_description: Option<String>,
    pub team_created_at: Option<DateTime<Utc>>,
}

/// API projection of a user: password excluded, timestamps date-only,
/// team joined when assigned.
#[derive(Debug, Clone, Serialize)]
pub struct UserView {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: String,
    pub created_at: NaiveDate,
    pub team: Option<TeamSummary>,
}

/// Member entry inside a team projection.
#[derive(Debug, Clone, Serialize)]
pub struct MemberView {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: String,
    pub created_at: NaiveDate,
}

impl From<UserTeamRow> for UserView {
    fn from(row: UserTeamRow) -> Self {
        let team = match (row.team_id, row.team_name, row.team_created_at) {
            (Some(id), Some(name), Some(created_at)) => Some(TeamSummary {
                id,
                name,
                description: row.team_description,
                created_at: created_at.date_naive(),
            }),
            _ => None,
        };

        UserView {
            id: row.id,
            name: row.name,
            email: row.email,
            role: row.role,
            created_at: row.created_at.date_naive(),
            team,
        }
    }
}

impl From<User> for MemberView {
    fn from(user: User) -> Self {
        MemberView {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
            created_at: user.created_at.date_naive(),
        }
    }
}
