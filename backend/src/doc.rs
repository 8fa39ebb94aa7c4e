//! OpenAPI document for the JSON API.
//!
//! Registers the employee endpoints, the health probes and the schema mirrors
//! from [`crate::inbound::http::schemas`]. Served by Swagger UI at `/docs` in
//! debug builds and printed by the `openapi-dump` binary.

use utoipa::OpenApi;

use crate::inbound::http::schemas::{
    DeletedSchema, EmployeePayloadSchema, EmployeeSchema, ErrorCodeSchema, ErrorSchema,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Personnel API",
        description = "Create, list, update and delete employee records."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::employees::get_employees,
        crate::inbound::http::employees::create_employee,
        crate::inbound::http::employees::update_employee,
        crate::inbound::http::employees::delete_employee,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        EmployeeSchema,
        EmployeePayloadSchema,
        DeletedSchema,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "employees", description = "Employee records"),
        (name = "health", description = "Liveness and readiness probes")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    fn object_has_field(schema: &RefOr<Schema>, field: &str) -> bool {
        match schema {
            RefOr::T(Schema::Object(obj)) => obj.properties.contains_key(field),
            _ => false,
        }
    }

    #[rstest]
    #[case("Employee", &["id", "name", "email", "age", "department", "salary"])]
    #[case("EmployeePayload", &["name", "email", "age", "department", "salary"])]
    #[case("Deleted", &["message"])]
    #[case("Error", &["code", "message", "traceId", "details"])]
    fn schemas_expose_wire_fields(#[case] name: &str, #[case] fields: &[&str]) {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let schema = schemas.get(name).expect("schema registered");
        for field in fields {
            assert!(object_has_field(schema, field), "{name} lacks {field}");
        }
    }

    #[rstest]
    fn resource_path_has_every_method() {
        let doc = ApiDoc::openapi();
        let item = doc
            .paths
            .paths
            .get("/api/v1/employees")
            .expect("employees path");
        assert!(item.get.is_some());
        assert!(item.post.is_some());
        assert!(item.put.is_some());
        assert!(item.delete.is_some());
    }

    #[rstest]
    fn health_probes_are_documented() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/health/ready"));
        assert!(doc.paths.paths.contains_key("/health/live"));
    }
}
