use actix_web::HttpResponse;

use crate::middleware::RequestIdentity;

/// Handler for GET /api/v1/user-profile
///
/// Returns the authenticated user's public profile. The password hash
/// never appears in the response.
///
/// ## Success (200 OK)
/// ```json
/// { "id": "...", "username": "alice", "email": "alice@example.com" }
/// ```
pub async fn user_profile(identity: RequestIdentity) -> HttpResponse {
    HttpResponse::Ok().json(identity.user.to_public())
}
