use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        society::{
            AddFlatDto, AddFloorDto, AddWingDto, CreateSocietyDto, FlatDto, FlatResultDto,
            FloorDto, FloorResultDto, SocietyDto, SocietyResultDto, UpdateSocietyDto, WingDto,
            WingResultDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::society::{AddFlatParam, CreateSocietyParam, UpdateSocietyParam},
        service::society::SocietyService,
        state::AppState,
    },
};

/// Tag for grouping society endpoints in OpenAPI documentation
pub static SOCIETY_TAG: &str = "society";

/// Create a society.
///
/// The owner defaults to the caller and must exist. The wings tree starts empty.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `201 Created` - Society created
/// - `400 Bad Request` - Missing fields or registration number already in use
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - Owner does not exist
#[utoipa::path(
    post,
    path = "/api/v1/residents/create",
    tag = SOCIETY_TAG,
    request_body = CreateSocietyDto,
    security(("bearer" = [])),
    responses(
        (status = 201, description = "Society created", body = SocietyResultDto),
        (status = 400, description = "Invalid society data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Owner not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_society(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateSocietyDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let param = CreateSocietyParam::from_dto(payload, caller.id)?;
    let society = SocietyService::new(&state.db).create_society(param).await?;

    Ok((
        StatusCode::CREATED,
        Json(SocietyResultDto {
            message: "Society created successfully".to_string(),
            society: society.into_dto(),
        }),
    ))
}

/// List all societies with their full trees, ordered by ID.
#[utoipa::path(
    get,
    path = "/api/v1/residents",
    tag = SOCIETY_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "All societies", body = Vec<SocietyDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_societies(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let societies = SocietyService::new(&state.db).get_all_societies().await?;
    let societies: Vec<SocietyDto> = societies.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(societies)))
}

#[utoipa::path(
    get,
    path = "/api/v1/residents/{id}",
    tag = SOCIETY_TAG,
    params(("id" = i32, Path, description = "Society ID")),
    security(("bearer" = [])),
    responses(
        (status = 200, description = "The society", body = SocietyDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Society not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_society(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let society = SocietyService::new(&state.db).get_society(id).await?;

    Ok((StatusCode::OK, Json(society.into_dto())))
}

/// Update top-level society fields.
///
/// The wings tree is never touched by this endpoint.
///
/// # Returns
/// - `200 OK` - Society updated
/// - `400 Bad Request` - Blank required field or registration number in use
/// - `404 Not Found` - Society not found
/// - `409 Conflict` - Society changed concurrently
#[utoipa::path(
    put,
    path = "/api/v1/residents/{id}",
    tag = SOCIETY_TAG,
    params(("id" = i32, Path, description = "Society ID")),
    request_body = UpdateSocietyDto,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Society updated", body = SocietyResultDto),
        (status = 400, description = "Invalid society data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Society not found", body = ErrorDto),
        (status = 409, description = "Concurrent modification", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_society(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateSocietyDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let param = UpdateSocietyParam::from_dto(payload)?;
    let society = SocietyService::new(&state.db)
        .update_society(id, param)
        .await?;

    Ok((
        StatusCode::OK,
        Json(SocietyResultDto {
            message: "Society updated successfully".to_string(),
            society: society.into_dto(),
        }),
    ))
}

/// Delete a society together with its whole tree.
#[utoipa::path(
    delete,
    path = "/api/v1/residents/{id}",
    tag = SOCIETY_TAG,
    params(("id" = i32, Path, description = "Society ID")),
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Society deleted", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Society not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_society(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    SocietyService::new(&state.db).delete_society(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Society deleted successfully")),
    ))
}

/// Add an empty wing to a society.
///
/// Wing names are not required to be unique within a society.
#[utoipa::path(
    post,
    path = "/api/v1/residents/{id}/wing",
    tag = SOCIETY_TAG,
    params(("id" = i32, Path, description = "Society ID")),
    request_body = AddWingDto,
    security(("bearer" = [])),
    responses(
        (status = 201, description = "Wing added", body = WingResultDto),
        (status = 400, description = "Wing name missing", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Society not found", body = ErrorDto),
        (status = 409, description = "Concurrent modification", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_wing(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<AddWingDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let wing = SocietyService::new(&state.db)
        .add_wing(id, payload.wing_name)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(WingResultDto {
            message: "Wing added to society".to_string(),
            wing: wing.into_dto(),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/residents/{id}/wings",
    tag = SOCIETY_TAG,
    params(("id" = i32, Path, description = "Society ID")),
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Wings of the society", body = Vec<WingDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Society not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_wings(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let wings = SocietyService::new(&state.db).get_wings(id).await?;
    let wings: Vec<WingDto> = wings.into_iter().map(|w| w.into_dto()).collect();

    Ok((StatusCode::OK, Json(wings)))
}

/// Add an empty floor to a wing.
///
/// Floor numbers are not required to be unique within a wing; lookups by number
/// resolve to the first match.
#[utoipa::path(
    post,
    path = "/api/v1/residents/{id}/wing/{wing_id}/floor",
    tag = SOCIETY_TAG,
    params(
        ("id" = i32, Path, description = "Society ID"),
        ("wing_id" = Uuid, Path, description = "Wing ID")
    ),
    request_body = AddFloorDto,
    security(("bearer" = [])),
    responses(
        (status = 201, description = "Floor added", body = FloorResultDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Society or wing not found", body = ErrorDto),
        (status = 409, description = "Concurrent modification", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_floor(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((id, wing_id)): Path<(i32, Uuid)>,
    Json(payload): Json<AddFloorDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let floor = SocietyService::new(&state.db)
        .add_floor(id, wing_id, payload.floor_number)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(FloorResultDto {
            message: "Floor added to wing".to_string(),
            floor: floor.into_dto(),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/residents/{id}/wing/{wing_id}/floors",
    tag = SOCIETY_TAG,
    params(
        ("id" = i32, Path, description = "Society ID"),
        ("wing_id" = Uuid, Path, description = "Wing ID")
    ),
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Floors of the wing", body = Vec<FloorDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Society or wing not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_floors(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((id, wing_id)): Path<(i32, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let floors = SocietyService::new(&state.db)
        .get_floors(id, wing_id)
        .await?;
    let floors: Vec<FloorDto> = floors.into_iter().map(|f| f.into_dto()).collect();

    Ok((StatusCode::OK, Json(floors)))
}

/// Add a vacant flat to the first floor with the given number.
///
/// # Returns
/// - `201 Created` - Flat added
/// - `400 Bad Request` - Missing flat number or unknown unit type, status or ownership
/// - `404 Not Found` - Society, wing or floor not found
/// - `409 Conflict` - Society changed concurrently
#[utoipa::path(
    post,
    path = "/api/v1/residents/{id}/wing/{wing_id}/floor/{floor_number}/flat",
    tag = SOCIETY_TAG,
    params(
        ("id" = i32, Path, description = "Society ID"),
        ("wing_id" = Uuid, Path, description = "Wing ID"),
        ("floor_number" = i32, Path, description = "Floor number")
    ),
    request_body = AddFlatDto,
    security(("bearer" = [])),
    responses(
        (status = 201, description = "Flat added", body = FlatResultDto),
        (status = 400, description = "Invalid flat data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Society, wing or floor not found", body = ErrorDto),
        (status = 409, description = "Concurrent modification", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_flat(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((id, wing_id, floor_number)): Path<(i32, Uuid, i32)>,
    Json(payload): Json<AddFlatDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let param = AddFlatParam::from_dto(payload)?;
    let flat = SocietyService::new(&state.db)
        .add_flat(id, wing_id, floor_number, param)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(FlatResultDto {
            message: "Flat added to floor".to_string(),
            flat: flat.into_dto(),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/residents/{id}/wing/{wing_id}/floor/{floor_number}/flats",
    tag = SOCIETY_TAG,
    params(
        ("id" = i32, Path, description = "Society ID"),
        ("wing_id" = Uuid, Path, description = "Wing ID"),
        ("floor_number" = i32, Path, description = "Floor number")
    ),
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Flats on the floor", body = Vec<FlatDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Society, wing or floor not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_flats(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((id, wing_id, floor_number)): Path<(i32, Uuid, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let flats = SocietyService::new(&state.db)
        .get_flats(id, wing_id, floor_number)
        .await?;
    let flats: Vec<FlatDto> = flats.into_iter().map(|f| f.into_dto()).collect();

    Ok((StatusCode::OK, Json(flats)))
}
