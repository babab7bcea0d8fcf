/// Flight identifiers are 64-bit integers assigned by the store.
///
/// Airports are keyed by their `airport_code` string instead.
pub type RecordId = i64;
