/// Primary keys are PostgreSQL BIGSERIAL columns.
pub type DbId = i64;

/// All timestamps are stored and compared in UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
