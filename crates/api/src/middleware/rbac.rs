//! Role-based access control (RBAC) extractor.
//!
//! Roles live on the profile row, not in the token, so the gate resolves
//! the caller's profile from the database and checks its stored role.
//! Only `admin` is a privilege level; every other role is descriptive.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use skillswap_core::error::CoreError;
use skillswap_core::roles::ROLE_ADMIN;
use skillswap_db::models::user::User;
use skillswap_db::repositories::UserRepo;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the `admin` role. Rejects with 403 Forbidden otherwise.
///
/// Yields the full profile row so handlers can attribute moderation
/// actions to the acting admin.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(admin): RequireAdmin) -> AppResult<Json<()>> {
///     // admin.role == "admin" is guaranteed here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin(pub User);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth = AuthUser::from_request_parts(parts, state).await?;

        let user = UserRepo::find_by_auth_user_id(&state.pool, auth.auth_user_id)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::Forbidden("Admin role required".into()))
            })?;

        if user.role != ROLE_ADMIN {
            return Err(AppError::Core(CoreError::Forbidden(
                "Admin role required".into(),
            )));
        }
        Ok(RequireAdmin(user))
    }
}
