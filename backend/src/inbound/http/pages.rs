//! Server-rendered admin pages.
//!
//! ```text
//! GET  /                        employee list, optional ?email= filter
//! GET  /employees/new           create form
//! POST /employees/new
//! GET  /employees/{id}/edit     edit form
//! POST /employees/{id}/edit
//! GET  /employees/{id}/delete   dismiss confirmation
//! POST /employees/{id}/delete
//! ```
//!
//! Pages call the same driving ports as the JSON endpoints. Successful
//! mutations redirect to the list with `303 See Other`.

use std::fmt::Write as _;

use actix_web::http::{StatusCode, header};
use actix_web::{HttpResponse, ResponseError, get, post, web};
use serde::Deserialize;

use crate::domain::{
    Employee, EmployeeDetails, EmployeeId, EmployeeRoster, Error, ErrorCode,
};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{narrow_to_i32, parse_whole_number};

/// Escape text for HTML element content and double-quoted attributes.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n</head>\n<body>\n<main>\n<h1>{title}</h1>\n{body}</main>\n\
         </body>\n</html>\n",
        title = escape(title),
    )
}

fn html(status: StatusCode, title: &str, body: &str) -> HttpResponse {
    HttpResponse::build(status)
        .content_type("text/html; charset=utf-8")
        .body(layout(title, body))
}

fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

fn error_page(err: &Error) -> HttpResponse {
    let message = match err.code() {
        ErrorCode::InternalError => "Internal server error",
        _ => err.message(),
    };
    let body = format!(
        "<p role=\"alert\">{}</p>\n<p><a href=\"/\">Back to the list</a></p>\n",
        escape(message)
    );
    html(err.status_code(), "Something went wrong", &body)
}

fn parse_path_id(raw: &str) -> Result<EmployeeId, Error> {
    raw.parse()
        .map_err(|_| Error::not_found(format!("employee {raw} not found")))
}

/// Form fields as submitted; numbers arrive as text.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EmployeeForm {
    pub name: String,
    pub email: String,
    pub age: String,
    pub department: String,
    pub salary: String,
}

impl EmployeeForm {
    fn from_employee(employee: &Employee) -> Self {
        Self {
            name: employee.name().to_owned(),
            email: employee.email().to_owned(),
            age: employee.age().to_string(),
            department: employee.department().to_owned(),
            salary: employee.salary().to_string(),
        }
    }

    /// Validate into domain details, or a message for the user.
    fn to_details(&self) -> Result<EmployeeDetails, String> {
        let age = parse_whole_number(&self.age)
            .and_then(narrow_to_i32)
            .map_err(|e| e.message("age"))?;
        let salary = parse_whole_number(&self.salary).map_err(|e| e.message("salary"))?;
        EmployeeDetails::new(
            self.name.as_str(),
            self.email.as_str(),
            age,
            self.department.as_str(),
            salary,
        )
        .map_err(|err| err.to_string())
    }
}

fn render_form(action: &str, form: &EmployeeForm, submit: &str, message: Option<&str>) -> String {
    let mut body = String::new();
    if let Some(message) = message {
        let _ = writeln!(body, "<p role=\"alert\">{}</p>", escape(message));
    }
    let _ = writeln!(body, "<form method=\"post\" action=\"{}\">", escape(action));
    let fields = [
        ("name", "Name", "text", form.name.as_str()),
        ("email", "Email", "email", form.email.as_str()),
        ("age", "Age", "number", form.age.as_str()),
        ("department", "Department", "text", form.department.as_str()),
        ("salary", "Salary", "number", form.salary.as_str()),
    ];
    for (name, label, kind, value) in fields {
        let _ = writeln!(
            body,
            "<label>{label} <input name=\"{name}\" type=\"{kind}\" value=\"{}\" required></label><br>",
            escape(value)
        );
    }
    let _ = writeln!(body, "<button type=\"submit\">{}</button>", escape(submit));
    body.push_str("<a href=\"/\">Cancel</a>\n</form>\n");
    body
}

fn render_table(employees: &[&Employee]) -> String {
    let mut body = String::from(
        "<table>\n<thead><tr><th>Name</th><th>Email</th><th>Age</th><th>Department</th>\
         <th>Salary</th><th></th></tr></thead>\n<tbody>\n",
    );
    for employee in employees {
        let id = employee.id();
        let _ = writeln!(
            body,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
             <td><a href=\"/employees/{id}/edit\">Edit</a> \
             <a href=\"/employees/{id}/delete\">Delete</a></td></tr>",
            escape(employee.name()),
            escape(employee.email()),
            employee.age(),
            escape(employee.department()),
            employee.salary(),
        );
    }
    body.push_str("</tbody>\n</table>\n");
    body
}

/// `?email=` filter for the list page.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub email: Option<String>,
}

async fn list_page(state: &HttpState, email: Option<&str>) -> Result<HttpResponse, Error> {
    let roster: EmployeeRoster = state.employees.list_employees().await?.into_iter().collect();
    let query = email.map(str::trim).filter(|q| !q.is_empty());

    let mut body = String::new();
    let _ = writeln!(
        body,
        "<form method=\"get\" action=\"/\"><input name=\"email\" type=\"search\" \
         placeholder=\"Email\" value=\"{}\"><button type=\"submit\">Search</button> \
         <a href=\"/\">Reset</a></form>",
        escape(query.unwrap_or_default())
    );
    body.push_str("<p><a href=\"/employees/new\">Add employee</a></p>\n");

    let all: Vec<&Employee> = roster.iter().collect();
    let shown = match query {
        Some(q) => {
            let hits = roster.find_by_email(q);
            if hits.is_empty() {
                let _ = writeln!(
                    body,
                    "<p role=\"status\">No employee found with email {}</p>",
                    escape(q)
                );
                all
            } else {
                hits
            }
        }
        None => all,
    };

    if shown.is_empty() {
        body.push_str("<p>No employees yet.</p>\n");
    } else {
        body.push_str(&render_table(&shown));
    }
    Ok(html(StatusCode::OK, "Employees", &body))
}

/// Employee list with exact-match email search.
#[get("/")]
pub async fn index(state: web::Data<HttpState>, query: web::Query<ListQuery>) -> HttpResponse {
    list_page(&state, query.email.as_deref())
        .await
        .unwrap_or_else(|err| error_page(&err))
}

#[get("/employees/new")]
pub async fn new_employee_form() -> HttpResponse {
    let body = render_form("/employees/new", &EmployeeForm::default(), "Create", None);
    html(StatusCode::OK, "New employee", &body)
}

#[post("/employees/new")]
pub async fn create_employee_submit(
    state: web::Data<HttpState>,
    form: web::Form<EmployeeForm>,
) -> HttpResponse {
    let details = match form.to_details() {
        Ok(details) => details,
        Err(message) => {
            let body = render_form("/employees/new", &form, "Create", Some(&message));
            return html(StatusCode::BAD_REQUEST, "New employee", &body);
        }
    };
    match state.employee_commands.create_employee(details).await {
        Ok(_) => see_other("/"),
        Err(err) => error_page(&err),
    }
}

async fn edit_page(state: &HttpState, raw_id: &str) -> Result<HttpResponse, Error> {
    let id = parse_path_id(raw_id)?;
    let employee = state.employees.get_employee(&id).await?;
    let action = format!("/employees/{id}/edit");
    let body = render_form(&action, &EmployeeForm::from_employee(&employee), "Save", None);
    Ok(html(StatusCode::OK, "Edit employee", &body))
}

#[get("/employees/{id}/edit")]
pub async fn edit_employee_form(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> HttpResponse {
    edit_page(&state, &path)
        .await
        .unwrap_or_else(|err| error_page(&err))
}

async fn edit_submit(
    state: &HttpState,
    raw_id: &str,
    form: &EmployeeForm,
) -> Result<HttpResponse, Error> {
    let id = parse_path_id(raw_id)?;
    let details = match form.to_details() {
        Ok(details) => details,
        Err(message) => {
            let action = format!("/employees/{id}/edit");
            let body = render_form(&action, form, "Save", Some(&message));
            return Ok(html(StatusCode::BAD_REQUEST, "Edit employee", &body));
        }
    };
    state.employee_commands.update_employee(&id, details).await?;
    Ok(see_other("/"))
}

#[post("/employees/{id}/edit")]
pub async fn edit_employee_submit(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    form: web::Form<EmployeeForm>,
) -> HttpResponse {
    edit_submit(&state, &path, &form)
        .await
        .unwrap_or_else(|err| error_page(&err))
}

async fn delete_page(state: &HttpState, raw_id: &str) -> Result<HttpResponse, Error> {
    let id = parse_path_id(raw_id)?;
    let employee = state.employees.get_employee(&id).await?;
    let body = format!(
        "<p>Dismiss {} ({})?</p>\n<form method=\"post\" action=\"/employees/{id}/delete\">\
         <button type=\"submit\">Dismiss</button> <a href=\"/\">Cancel</a></form>\n",
        escape(employee.name()),
        escape(employee.email()),
    );
    Ok(html(StatusCode::OK, "Dismiss employee", &body))
}

/// Dismiss confirmation.
#[get("/employees/{id}/delete")]
pub async fn delete_employee_confirm(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> HttpResponse {
    delete_page(&state, &path)
        .await
        .unwrap_or_else(|err| error_page(&err))
}

async fn delete_submit(state: &HttpState, raw_id: &str) -> Result<HttpResponse, Error> {
    let id = parse_path_id(raw_id)?;
    state.employee_commands.delete_employee(&id).await?;
    Ok(see_other("/"))
}

#[post("/employees/{id}/delete")]
pub async fn delete_employee_submit(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> HttpResponse {
    delete_submit(&state, &path)
        .await
        .unwrap_or_else(|err| error_page(&err))
}

#[cfg(test)]
#[path = "pages_tests.rs"]
mod tests;
