pub mod team;
pub mod user;

pub use team::{Team, TeamSummary, TeamView};
pub use user::{MemberView, User, UserTeamRow, UserView};
