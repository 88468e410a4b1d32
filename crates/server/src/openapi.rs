use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

/// Documentation mirror of the customer wire format.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDoc {
    pub id: i64,
    pub name: String,
    pub address: Option<String>,
    pub mobile_number: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDraftDoc {
    pub name: String,
    pub address: Option<String>,
    pub mobile_number: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorBodyDoc {
    pub timestamp: String,
    pub code: u16,
    pub status: String,
    pub message: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::customers::list,
        crate::routes::customers::get_by_id,
        crate::routes::customers::create,
        crate::routes::customers::update,
        crate::routes::customers::delete,
    ),
    components(schemas(CustomerDoc, CustomerDraftDoc, ErrorBodyDoc)),
    tags(
        (name = "health", description = "Liveness probe"),
        (name = "customer", description = "Customer record management")
    )
)]
pub struct ApiDoc;
