use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Management API",
        version = "0.1.0",
        description = "Create, read, update and delete user records"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = domain_users::entity::Model::URL, api = domain_users::handlers::ApiDoc)
    )
)]
pub struct ApiDoc;
