use axum::{extract::{State, Path, Query}, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, error};

use crate::api::dtos::requests::{CreateMemberRequest, ListMembersQuery, UpdateMemberRequest};
use crate::api::dtos::responses::MemberResponse;
use crate::error::AppError;
use crate::state::AppState;

fn matches_status_filter(response: &MemberResponse, filter: &str) -> bool {
    let wanted = filter.trim().to_lowercase().replace('-', " ");
    response.display_status.as_str().to_lowercase() == wanted
}

pub async fn create_member(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateMemberRequest>,
) -> Result<impl IntoResponse, AppError> {
    let created = state.membership_service.create_member(payload.into_draft()).await?;

    info!("Created member {} ({})", created.id, created.member_id);

    let today = Utc::now().date_naive();
    Ok((StatusCode::CREATED, Json(MemberResponse::from_member(created, today))))
}

pub async fn list_members(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListMembersQuery>,
) -> Result<impl IntoResponse, AppError> {
    let members = state.membership_service.list_members().await?;
    let today = Utc::now().date_naive();

    let mut responses: Vec<MemberResponse> = members
        .into_iter()
        .map(|m| MemberResponse::from_member(m, today))
        .collect();

    if let Some(filter) = params.status {
        responses.retain(|m| matches_status_filter(m, &filter));
    }

    Ok(Json(responses))
}

pub async fn get_member(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let member = state.membership_service.get_member(id).await?;
    let today = Utc::now().date_naive();
    Ok(Json(MemberResponse::from_member(member, today)))
}

pub async fn update_member(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateMemberRequest>,
) -> Result<impl IntoResponse, AppError> {
    let updated = state.membership_service.update_member(id, payload.into_patch()).await?;

    info!("Updated member {}", updated.id);

    let today = Utc::now().date_naive();
    Ok(Json(MemberResponse::from_member(updated, today)))
}

pub async fn delete_member(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    match state.membership_service.delete_member(id).await {
        Ok(removed) => {
            info!("Deleted member {}", id);
            let today = Utc::now().date_naive();
            Ok(Json(MemberResponse::from_member(removed, today)))
        }
        Err(e) => {
            error!("Failed to delete member {}: {:?}", id, e);
            Err(e)
        }
    }
}

pub async fn toggle_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let updated = state.membership_service.toggle_status(id).await?;

    info!("Toggled status of member {} to {}", updated.id, updated.status.as_str());

    let today = Utc::now().date_naive();
    Ok(Json(MemberResponse::from_member(updated, today)))
}
