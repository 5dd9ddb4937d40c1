use uuid::Uuid;

/// Caller identity derived from an authentication token.
///
/// Built once per request by the bearer-token extractor and dropped when the
/// request completes.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub user_id: Uuid,
    pub email: String,
    pub username: String,
}
