/// Employee identifiers are time-ordered UUIDs (v7), generated by the store.
pub type EmployeeId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
