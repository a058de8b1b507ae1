/// Patient identifiers come from the roster document and are never
/// generated at runtime.
pub type PatientId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
