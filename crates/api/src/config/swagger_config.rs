use crate::handlers::{
    activity_facets::__path_list_activity_facets, activity_logs::__path_list_activity_logs,
    health::__path_health_check,
};
use mealtrail_primitives::models::*;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(list_activity_logs, list_activity_facets, health_check),
    components(schemas(
        ActivityLogRow,
        ActionKind,
        LogPageResponse,
        FacetsResponse,
        HealthStatus
    )),
    tags(
        (name = "Activity", description = "Activity log query endpoints"),
        (name = "Health", description = "Service health")
    )
)]
pub struct ApiDoc;
