//! Handler for reading platform announcements.
//!
//! Announcements are written through the moderation surface but addressed
//! to everyone; any authenticated user can read them.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use skillswap_db::repositories::AnnouncementRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /announcements
// ---------------------------------------------------------------------------

/// All announcements, newest first. Clients that only want a banner take
/// the head of the list.
pub async fn list_announcements(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let announcements = AnnouncementRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: announcements }))
}
