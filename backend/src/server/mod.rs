//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::{ServerConfig, ServerSettings};
pub use state_builders::{build_employee_repository, build_http_state};

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use personnel::Trace;
#[cfg(debug_assertions)]
use personnel::doc::ApiDoc;
use personnel::inbound::http::employees::{
    create_employee, delete_employee, get_employees, json_config, query_config, update_employee,
};
use personnel::inbound::http::health::{HealthState, live, ready};
use personnel::inbound::http::pages::{
    create_employee_submit, delete_employee_confirm, delete_employee_submit, edit_employee_form,
    edit_employee_submit, index, new_employee_form,
};
use personnel::inbound::http::state::HttpState;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let api = web::scope("/api/v1")
        .service(get_employees)
        .service(create_employee)
        .service(update_employee)
        .service(delete_employee);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(json_config())
        .app_data(query_config())
        .wrap(Trace)
        .service(api)
        .service(index)
        .service(new_employee_form)
        .service(create_employee_submit)
        .service(edit_employee_form)
        .service(edit_employee_submit)
        .service(delete_employee_confirm)
        .service(delete_employee_submit)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server over the given states.
///
/// The listener is bound before returning and readiness is flagged once the
/// bind succeeds.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    config: &ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || build_app(server_health_state.clone(), http_state.clone()))
        .bind(config.bind_addr())?
        .disable_signals()
        .run();

    health_state.mark_bound();
    Ok(server)
}
