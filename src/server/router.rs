use axum::Router;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{auth, occupancy, society, user},
    state::AppState,
};

/// Registers the `bearer` scheme referenced by the authenticated endpoints.
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&BearerAuth),
    info(
        title = "Society Hub API",
        description = "Users, societies with their wing/floor/flat trees, and flat join requests."
    ),
    tags(
        (name = "auth", description = "Registration and login"),
        (name = "user", description = "User profiles"),
        (name = "society", description = "Societies, wings, floors and flats"),
        (name = "occupancy", description = "Flat join requests"),
    )
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::register))
        .routes(routes!(auth::login))
        .routes(routes!(user::get_users))
        .routes(routes!(
            user::get_user,
            user::update_user,
            user::delete_user
        ))
        .routes(routes!(user::change_password))
        .routes(routes!(society::create_society))
        .routes(routes!(society::get_societies))
        .routes(routes!(
            society::get_society,
            society::update_society,
            society::delete_society
        ))
        .routes(routes!(society::add_wing))
        .routes(routes!(society::get_wings))
        .routes(routes!(society::add_floor))
        .routes(routes!(society::get_floors))
        .routes(routes!(society::add_flat))
        .routes(routes!(society::get_flats))
        .routes(routes!(occupancy::request_to_join))
        .routes(routes!(occupancy::respond_to_join_request))
        .routes(routes!(occupancy::get_pending_requests))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api-docs/openapi.json", api))
}
