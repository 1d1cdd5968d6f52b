use uuid::Uuid;

/// All primary keys are UUIDs. The nil UUID is the "no identifier" sentinel.
pub type DbId = Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Returns `true` for the sentinel identifier callers use to mean "absent".
pub fn is_sentinel(id: DbId) -> bool {
    id.is_nil()
}

/// Resolve the identity of a record built from an inbound view.
///
/// The first non-sentinel candidate wins; when every candidate is absent or
/// nil a fresh v4 identifier is synthesized. Create and update share this rule:
/// the caller decides which path it is on by supplying an identifier or not.
pub fn resolve_id<I>(candidates: I) -> DbId
where
    I: IntoIterator<Item = Option<DbId>>,
{
    candidates
        .into_iter()
        .flatten()
        .find(|id| !is_sentinel(*id))
        .unwrap_or_else(Uuid::new_v4)
}
