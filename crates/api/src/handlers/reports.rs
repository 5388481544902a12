//! Handler for filing abuse reports.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use skillswap_core::report;
use skillswap_db::models::report::CreateReport;
use skillswap_db::repositories::ReportRepo;

use crate::error::AppResult;
use crate::handlers::users::resolve_profile;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /reports
// ---------------------------------------------------------------------------

/// File a report against a session. Reports are append-only; there is no
/// per-user or per-session cap.
pub async fn file_report(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateReport>,
) -> AppResult<impl IntoResponse> {
    report::validate_reason(&input.reason)?;

    let me = resolve_profile(&state, &auth).await?;
    let created = ReportRepo::create(
        &state.pool,
        input.session_id,
        me.id,
        &input.reason,
        input.description.as_deref(),
    )
    .await?;

    tracing::info!(
        report_id = created.id,
        session_id = input.session_id,
        from_user_id = me.id,
        reason = %input.reason,
        "Report filed",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}
