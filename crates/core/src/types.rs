/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are stored and handled in UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
