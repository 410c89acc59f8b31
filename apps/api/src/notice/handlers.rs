//! Axum route handlers for notice generation.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::header,
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use tracing::info;

use crate::errors::AppError;
use crate::notice::request::NoticeQuery;
use crate::render::{compose_notice, NoticeFields, RenderError, TemplateSpec, TemplateVariant};
use crate::state::AppState;

/// Raw decoded query string. Pairs rather than a struct so repeated keys are accepted.
type QueryPairs = Vec<(String, String)>;

fn notice_query(query: Result<Query<QueryPairs>, QueryRejection>) -> Result<NoticeQuery, AppError> {
    let Query(pairs) = query.map_err(|rejection| AppError::Validation(rejection.body_text()))?;
    Ok(NoticeQuery::from_pairs(pairs))
}

/// GET /generate
pub async fn handle_generate(
    State(state): State<AppState>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> Result<Response, AppError> {
    generate(&state, TemplateVariant::Plain, notice_query(query)?).await
}

/// GET /generate-hw
pub async fn handle_generate_hw(
    State(state): State<AppState>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> Result<Response, AppError> {
    generate(&state, TemplateVariant::Homework, notice_query(query)?).await
}

async fn generate(
    state: &AppState,
    variant: TemplateVariant,
    query: NoticeQuery,
) -> Result<Response, AppError> {
    let spec = variant.spec();
    let fields = query.into_fields(spec, state.clock.as_ref())?;

    let png = render(state, spec, fields)
        .await
        .map_err(|source| AppError::Render {
            message: spec.failure_message_for(source.is_missing_asset()),
            source,
        })?;

    info!(template = ?variant, bytes = png.len(), "Generated notice");
    Ok(([(header::CONTENT_TYPE, "image/png")], Bytes::from(png)).into_response())
}

/// Loads the template background, then composes and encodes on the blocking pool.
async fn render(
    state: &AppState,
    spec: &'static TemplateSpec,
    fields: NoticeFields,
) -> Result<Vec<u8>, RenderError> {
    let background = state.assets.load(spec.background).await?;
    let typeface = state.typeface.clone();

    tokio::task::spawn_blocking(move || compose_notice(spec, &background, typeface, &fields))
        .await
        .map_err(|e| RenderError::Task(e.to_string()))?
}
