use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        society::{
            JoinOutcome, JoinRequestDto, JoinRequestStatus, JoinResponseDto, JoinResultDto,
            PendingRequestsQuery, RequestToJoinDto, RespondToJoinRequestDto,
        },
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::occupancy::OccupancyService,
        state::AppState, util::validation::require,
    },
};

/// Tag for grouping join-request endpoints in OpenAPI documentation
pub static OCCUPANCY_TAG: &str = "occupancy";

/// Ask to join a flat addressed by wing name, floor number and flat number.
///
/// The wing is looked up in the first society (by ID) that has a wing with that
/// name. A vacant flat admits the requester immediately; an occupied flat queues a
/// pending request for its family members to answer.
///
/// # Access Control
/// - Any authenticated user; `userId` defaults to the caller
///
/// # Returns
/// - `200 OK` - `joined` or `queued`, with the flat after the transition
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - Requester, society, wing, floor or flat not found
/// - `409 Conflict` - Society changed concurrently
#[utoipa::path(
    post,
    path = "/api/v1/residents/request-to-join",
    tag = OCCUPANCY_TAG,
    request_body = RequestToJoinDto,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Joined or queued", body = JoinResultDto),
        (status = 400, description = "Missing wing or flat", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Requester or flat not found", body = ErrorDto),
        (status = 409, description = "Concurrent modification", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn request_to_join(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<RequestToJoinDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    require("Wing name", &payload.wing_name)?;
    require("Flat number", &payload.flat_number)?;

    let requester_id = payload.user_id.unwrap_or(caller.id);
    let (outcome, flat) = OccupancyService::new(&state.db)
        .request_to_join(
            requester_id,
            &payload.wing_name,
            payload.floor_number,
            &payload.flat_number,
        )
        .await?;

    let message = match outcome {
        JoinOutcome::Joined => "Successfully joined the flat",
        JoinOutcome::Queued => "Join request sent to family members",
    };

    Ok((
        StatusCode::OK,
        Json(JoinResultDto {
            message: message.to_string(),
            outcome,
            flat: flat.into_dto(),
        }),
    ))
}

/// Accept or reject a pending join request.
///
/// # Returns
/// - `200 OK` - New request status and the flat after the transition
/// - `400 Bad Request` - Action is neither `accept` nor `reject`
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - Flat, join request or accepted requester not found
/// - `409 Conflict` - Society changed concurrently
#[utoipa::path(
    post,
    path = "/api/v1/residents/respond-to-join-request",
    tag = OCCUPANCY_TAG,
    request_body = RespondToJoinRequestDto,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Request answered", body = JoinResponseDto),
        (status = 400, description = "Invalid action", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Flat or request not found", body = ErrorDto),
        (status = 409, description = "Concurrent modification", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn respond_to_join_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<RespondToJoinRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let (status, flat) = OccupancyService::new(&state.db)
        .respond_to_join_request(payload.flat_id, payload.user_id, &payload.action)
        .await?;

    let message = response_message(status)?;

    Ok((
        StatusCode::OK,
        Json(JoinResponseDto {
            message: message.to_string(),
            status,
            flat: flat.into_dto(),
        }),
    ))
}

/// Client message for the status a join response left the request in.
///
/// A response always resolves the request, so `Pending` here is a server fault.
fn response_message(status: JoinRequestStatus) -> Result<&'static str, AppError> {
    match status {
        JoinRequestStatus::Accepted => Ok("Request accepted successfully"),
        JoinRequestStatus::Rejected => Ok("Request rejected successfully"),
        JoinRequestStatus::Pending => Err(AppError::InternalError(
            "Join response left the request pending".to_string(),
        )),
    }
}

/// List pending join requests on a flat.
#[utoipa::path(
    get,
    path = "/api/v1/residents/requests/pending",
    tag = OCCUPANCY_TAG,
    params(PendingRequestsQuery),
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Pending requests", body = Vec<JoinRequestDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Society, wing, floor or flat not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pending_requests(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<PendingRequestsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let requests = OccupancyService::new(&state.db)
        .pending_requests(&query.wing_name, query.floor_number, &query.flat_number)
        .await?;
    let requests: Vec<JoinRequestDto> = requests.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(requests)))
}
