/// Primary keys are read as PostgreSQL BIGINT.
pub type DbId = i64;
