use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct CustomerDoc { pub id: i64, pub name: String, pub age: i32, pub email: String }

#[derive(ToSchema)]
pub struct CustomerRegistrationRequestDoc { pub name: String, pub age: i32, pub email: String }

/// Omitted or null fields are left unchanged.
#[derive(ToSchema)]
pub struct CustomerUpdateRequestDoc {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub email: Option<String>,
}

#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String, pub message: Option<String> }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::customers::list,
        crate::routes::customers::create,
        crate::routes::customers::get,
        crate::routes::customers::update,
        crate::routes::customers::delete,
    ),
    components(
        schemas(
            HealthResponse,
            CustomerDoc,
            CustomerRegistrationRequestDoc,
            CustomerUpdateRequestDoc,
            ErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "customers")
    )
)]
pub struct ApiDoc;
