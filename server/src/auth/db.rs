use crate::models::{NewSession, User};
use crate::schema::{sessions, users};
use chrono::{Duration, Utc};
use diesel::prelude::*;

use super::crypto::{generate_token, hash_token};

/// Issue a new session for `user_id` and return the raw token. Only the
/// token's hash is stored.
pub fn create_session(
    conn: &mut SqliteConnection,
    user_id: i32,
    ttl: Duration,
) -> Result<String, diesel::result::Error> {
    let token = generate_token();
    let token_hash = hash_token(&token);
    let expires_at = (Utc::now() + ttl).naive_utc();

    let new_session = NewSession {
        user_id,
        token_hash: &token_hash,
        expires_at,
    };

    diesel::insert_into(sessions::table)
        .values(&new_session)
        .execute(conn)?;

    Ok(token)
}

pub fn delete_session(
    conn: &mut SqliteConnection,
    token: &str,
) -> Result<usize, diesel::result::Error> {
    let token_hash = hash_token(token);
    diesel::delete(sessions::table.filter(sessions::token_hash.eq(&token_hash))).execute(conn)
}

/// Resolve an unexpired session token to its user.
pub fn find_user_by_token(
    conn: &mut SqliteConnection,
    token: &str,
) -> Result<Option<User>, diesel::result::Error> {
    let token_hash = hash_token(token);

    sessions::table
        .inner_join(users::table)
        .filter(sessions::token_hash.eq(&token_hash))
        .filter(sessions::expires_at.gt(Utc::now().naive_utc()))
        .select(User::as_select())
        .first(conn)
        .optional()
}
