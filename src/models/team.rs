use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{MemberView, User};

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Team {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Team fields as embedded in a user projection.
#[derive(Debug, Clone, Serialize)]
pub struct TeamSummary {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub created_at: NaiveDate,
}

/// API projection of a team with its current members.
#[derive(Debug, Clone, Serialize)]
pub struct TeamView {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub created_at: NaiveDate,
    pub users: Vec<MemberView>,
}

impl TeamView {
    pub fn new(team: Team, members: Vec<User>) -> Self {
        TeamView {
            id: team.id,
            name: team.name,
            description: team.description,
            created_at: team.created_at.date_naive(),
            users: members.into_iter().map(MemberView::from).collect(),
        }
    }
}
