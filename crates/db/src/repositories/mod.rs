//! Repository layer. Each repository is a zero-sized struct whose async
//! methods take a `&PgPool` and return `sqlx::Error` on failure.

pub mod user_repo;

pub use user_repo::UserRepo;
