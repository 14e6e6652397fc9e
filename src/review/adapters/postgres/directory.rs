//! `PostgreSQL` directory adapter.

use super::models::{NewTeamRow, NewUserRow, UserRow};
use super::schema::{teams, users};
use crate::review::domain::{Team, TeamMember, TeamName, User, UserId};
use crate::review::ports::{DirectoryError, DirectoryResult, UserDirectory};
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use std::collections::BTreeSet;

/// `PostgreSQL`-backed team and user directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct PgUserDirectory;

impl PgUserDirectory {
    /// Creates the directory adapter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

fn row_to_user(row: UserRow) -> DirectoryResult<User> {
    let id = UserId::new(row.id).map_err(DirectoryError::backend)?;
    let team = TeamName::new(row.team_name).map_err(DirectoryError::backend)?;
    Ok(User::new(id, row.username, team, row.active))
}

fn member_rows(team: &Team) -> Vec<NewUserRow> {
    team.members()
        .iter()
        .map(|member| NewUserRow {
            id: member.id().as_str().to_owned(),
            username: member.username().to_owned(),
            team_name: team.name().as_str().to_owned(),
            active: member.active(),
        })
        .collect()
}

fn load_team(connection: &mut PgConnection, name: &TeamName) -> DirectoryResult<Team> {
    let rows = users::table
        .filter(users::team_name.eq(name.as_str()))
        .order(users::id.asc())
        .select(UserRow::as_select())
        .load::<UserRow>(connection)
        .map_err(DirectoryError::backend)?;
    let members = rows
        .into_iter()
        .map(|row| {
            let id = UserId::new(row.id).map_err(DirectoryError::backend)?;
            Ok(TeamMember::new(id, row.username, row.active))
        })
        .collect::<DirectoryResult<Vec<_>>>()?;
    Team::new(name.clone(), members).map_err(DirectoryError::backend)
}

impl UserDirectory<PgConnection> for PgUserDirectory {
    fn register_team(&self, session: &mut PgConnection, team: &Team) -> DirectoryResult<Team> {
        let team_row = NewTeamRow {
            name: team.name().as_str().to_owned(),
        };
        // The service pre-checks for an existing team; the primary key
        // still closes the TOCTOU window between check and insert.
        diesel::insert_into(teams::table)
            .values(&team_row)
            .execute(session)
            .map_err(|err| match err {
                DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                    DirectoryError::DuplicateTeam(team.name().clone())
                }
                _ => DirectoryError::backend(err),
            })?;

        let rows = member_rows(team);
        if !rows.is_empty() {
            diesel::insert_into(users::table)
                .values(&rows)
                .on_conflict(users::id)
                .do_update()
                .set((
                    users::username.eq(diesel::upsert::excluded(users::username)),
                    users::team_name.eq(diesel::upsert::excluded(users::team_name)),
                    users::active.eq(diesel::upsert::excluded(users::active)),
                ))
                .execute(session)
                .map_err(DirectoryError::backend)?;
        }

        load_team(session, team.name())
    }

    fn find_team(
        &self,
        session: &mut PgConnection,
        name: &TeamName,
    ) -> DirectoryResult<Option<Team>> {
        let known = teams::table
            .filter(teams::name.eq(name.as_str()))
            .select(teams::name)
            .first::<String>(session)
            .optional()
            .map_err(DirectoryError::backend)?;
        if known.is_none() {
            return Ok(None);
        }
        load_team(session, name).map(Some)
    }

    fn find_user(&self, session: &mut PgConnection, id: &UserId) -> DirectoryResult<Option<User>> {
        let row = users::table
            .filter(users::id.eq(id.as_str()))
            .select(UserRow::as_select())
            .first::<UserRow>(session)
            .optional()
            .map_err(DirectoryError::backend)?;
        row.map(row_to_user).transpose()
    }

    fn set_active(
        &self,
        session: &mut PgConnection,
        id: &UserId,
        active: bool,
    ) -> DirectoryResult<Option<User>> {
        let row = diesel::update(users::table.filter(users::id.eq(id.as_str())))
            .set(users::active.eq(active))
            .returning(UserRow::as_returning())
            .get_result::<UserRow>(session)
            .optional()
            .map_err(DirectoryError::backend)?;
        row.map(row_to_user).transpose()
    }

    fn active_candidates(
        &self,
        session: &mut PgConnection,
        team: &TeamName,
        exclude: &BTreeSet<UserId>,
    ) -> DirectoryResult<Vec<UserId>> {
        let excluded_ids: Vec<&str> = exclude.iter().map(UserId::as_str).collect();
        users::table
            .filter(users::team_name.eq(team.as_str()))
            .filter(users::active.eq(true))
            .filter(users::id.ne_all(excluded_ids))
            .order(users::id.asc())
            .select(users::id)
            .load::<String>(session)
            .map_err(DirectoryError::backend)?
            .into_iter()
            .map(|candidate| UserId::new(candidate).map_err(DirectoryError::backend))
            .collect()
    }
}
