mod cookie;
mod crypto;
mod db;
mod extractor;
mod middleware;

pub use cookie::{auth_cookie, expired_auth_cookie, AUTH_COOKIE};
pub use crypto::PasswordHashing;
pub use db::{create_session, delete_session};
pub use extractor::AuthUser;
pub use middleware::{require_auth, AuthError, SessionToken};
