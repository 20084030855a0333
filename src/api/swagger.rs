use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Placement Service API",
        version = "1.0.0",
        description = "CRUD of student placement records stored in MongoDB.\n\n**Update semantics:** `PUT /api/users/{id}` only overwrites fields that are present and non-null in the body.\n\n**Legacy routes:** `POST /api/users/addUser` and `GET /api/users/getAllUser` remain available."
    ),
    paths(
        // Users
        crate::api::users::create_user,
        crate::api::users::list_users,
        crate::api::users::get_user,
        crate::api::users::update_user,
        crate::api::users::delete_user,
        crate::api::users::add_user,
        crate::api::users::get_all_user,

        // Health & Metrics
        crate::api::health::health_check,
        crate::api::metrics::get_metrics,
    ),
    components(
        schemas(
            crate::models::User,
            crate::models::UpdateUserRequest,
            crate::api::health::HealthResponse,
            crate::api::metrics::MetricsResponse,
        )
    ),
    tags(
        (name = "Users", description = "Create, read, update and delete placement records."),
        (name = "Users (legacy)", description = "Compatibility routes kept from the first version of the API."),
        (name = "Health", description = "Health check and system metrics endpoints for monitoring service status."),
    )
)]
pub struct ApiDoc;
