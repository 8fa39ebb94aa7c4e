//! Manage employees on a running server from the command line.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::{Context, Result};
use reqwest::Url;
use tokio::runtime::Builder;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use personnel::console::{AdminConsole, EmployeesClient, SearchOutcome};
use personnel::domain::{Employee, EmployeeDetails, EmployeeId};

/// `employee-admin` command arguments.
#[derive(Debug, Parser)]
#[command(
    name = "employee-admin",
    about = "List, search and edit employees through the HTTP API",
    version
)]
struct CliArgs {
    /// Server root, e.g. `http://localhost:8080/`.
    #[arg(long = "base-url", value_name = "url", default_value = "http://localhost:8080/")]
    base_url: Url,
    /// Request timeout in seconds.
    #[arg(long = "timeout", value_name = "seconds", default_value_t = 30)]
    timeout: u64,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List employees, optionally only those with an exact email.
    List {
        #[arg(long)]
        email: Option<String>,
    },
    /// Show one employee.
    Get { id: EmployeeId },
    /// Create an employee.
    Create(EmployeeFields),
    /// Overwrite every field of an employee.
    Update {
        id: EmployeeId,
        #[command(flatten)]
        fields: EmployeeFields,
    },
    /// Dismiss an employee.
    Delete { id: EmployeeId },
}

#[derive(Debug, Clone, Args)]
struct EmployeeFields {
    #[arg(long)]
    name: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    age: i32,
    #[arg(long)]
    department: String,
    #[arg(long)]
    salary: i64,
}

impl EmployeeFields {
    fn into_details(self) -> Result<EmployeeDetails> {
        EmployeeDetails::new(
            self.name,
            self.email,
            self.age,
            self.department,
            self.salary,
        )
        .wrap_err("invalid employee fields")
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let args = CliArgs::parse();
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .wrap_err("create Tokio runtime")?;
    let output = runtime.block_on(run(args))?;
    println!("{output}");
    Ok(())
}

async fn run(args: CliArgs) -> Result<String> {
    let client = EmployeesClient::new(&args.base_url, Duration::from_secs(args.timeout))?;
    match args.command {
        Command::List { email } => {
            let mut console = AdminConsole::load(client).await?;
            let notice = match email {
                Some(email) => match console.search(&email) {
                    SearchOutcome::Matched(_) => None,
                    SearchOutcome::NotFound => {
                        Some(format!("No employee found with email {}", email.trim()))
                    }
                },
                None => None,
            };
            let table = render_table(console.displayed().iter());
            Ok(match notice {
                Some(notice) => format!("{notice}\n{table}"),
                None => table,
            })
        }
        Command::Get { id } => {
            let employee = client.get(id).await?;
            Ok(render_table([&employee]))
        }
        Command::Create(fields) => {
            let details = fields.into_details()?;
            let mut console = AdminConsole::load(client).await?;
            let employee = console.create(&details).await?;
            Ok(with_roster(&format!("created employee {}", employee.id()), &console))
        }
        Command::Update { id, fields } => {
            let details = fields.into_details()?;
            let mut console = AdminConsole::load(client).await?;
            let employee = console.update(id, &details).await?;
            Ok(with_roster(&format!("updated employee {}", employee.id()), &console))
        }
        Command::Delete { id } => {
            let mut console = AdminConsole::load(client).await?;
            let message = console.delete(id).await?;
            Ok(with_roster(&message, &console))
        }
    }
}

/// A status line followed by the roster as the console now shows it.
fn with_roster(status: &str, console: &AdminConsole) -> String {
    format!("{status}\n{}", render_table(console.displayed().iter()))
}

const HEADERS: [&str; 6] = ["ID", "NAME", "EMAIL", "AGE", "DEPARTMENT", "SALARY"];

fn render_table<'a>(employees: impl IntoIterator<Item = &'a Employee>) -> String {
    let rows: Vec<[String; 6]> = employees
        .into_iter()
        .map(|e| {
            [
                e.id().to_string(),
                e.name().to_owned(),
                e.email().to_owned(),
                e.age().to_string(),
                e.department().to_owned(),
                e.salary().to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header = HEADERS.map(str::to_owned);
    std::iter::once(&header)
        .chain(&rows)
        .map(|row| format_row(row, &widths))
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_row(row: &[String; 6], widths: &[usize; 6]) -> String {
    row.iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_owned()
}

#[cfg(test)]
mod tests {
    //! Unit tests for argument parsing and table output.

    use std::net::TcpListener;
    use std::sync::Arc;

    use actix_web::dev::ServerHandle;
    use actix_web::{App, HttpServer, web};
    use clap::Parser;
    use rstest::rstest;

    use personnel::Trace;
    use personnel::inbound::http::employees::{
        DELETED_MESSAGE, create_employee, delete_employee, get_employees, json_config,
        query_config, update_employee,
    };
    use personnel::inbound::http::state::HttpState;
    use personnel::outbound::memory::InMemoryEmployeeRepository;

    use super::{CliArgs, Command, Employee, EmployeeDetails, EmployeeId, render_table, run};

    const ID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

    fn serve(employees: Vec<Employee>) -> (String, ServerHandle) {
        let state = web::Data::new(HttpState::from_repository(Arc::new(
            InMemoryEmployeeRepository::with_employees(employees),
        )));
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind test listener");
        let addr = listener.local_addr().expect("listener address");
        let server = HttpServer::new(move || {
            App::new()
                .app_data(state.clone())
                .app_data(json_config())
                .app_data(query_config())
                .wrap(Trace)
                .service(
                    web::scope("/api/v1")
                        .service(get_employees)
                        .service(create_employee)
                        .service(update_employee)
                        .service(delete_employee),
                )
        })
        .workers(1)
        .disable_signals()
        .listen(listener)
        .expect("listen")
        .run();
        let handle = server.handle();
        actix_web::rt::spawn(server);
        (format!("http://{addr}/"), handle)
    }

    fn args(base_url: &str, rest: &[&str]) -> CliArgs {
        let argv = ["employee-admin", "--base-url", base_url]
            .into_iter()
            .chain(rest.iter().copied());
        CliArgs::try_parse_from(argv).expect("args parse")
    }

    #[rstest]
    #[actix_web::test]
    async fn mutations_print_the_reconciled_roster() {
        let existing = Employee::new(
            EmployeeId::random(),
            EmployeeDetails::new("Андрей", "rfjbebv@prisma.io", 45, "IT", 45_000).expect("valid"),
        );
        let (base_url, handle) = serve(vec![existing]);

        let created = run(args(
            &base_url,
            &[
                "create",
                "--name",
                "Иван",
                "--email",
                "ivan@x.com",
                "--age",
                "25",
                "--department",
                "IT",
                "--salary",
                "50000",
            ],
        ))
        .await
        .expect("create");
        let status = created.lines().next().expect("status line");
        assert!(status.starts_with("created employee "));
        assert!(created.contains("ivan@x.com"));
        assert!(created.contains("rfjbebv@prisma.io"));

        let id = status.trim_start_matches("created employee ").to_owned();
        let deleted = run(args(&base_url, &["delete", &id])).await.expect("delete");
        assert!(deleted.starts_with(DELETED_MESSAGE));
        assert!(!deleted.contains("ivan@x.com"));
        assert!(deleted.contains("rfjbebv@prisma.io"));

        handle.stop(false).await;
    }

    #[rstest]
    #[actix_web::test]
    async fn failed_update_reports_server_error() {
        let (base_url, handle) = serve(Vec::new());

        let err = run(args(
            &base_url,
            &[
                "update",
                ID,
                "--name",
                "Иван",
                "--email",
                "ivan@x.com",
                "--age",
                "25",
                "--department",
                "IT",
                "--salary",
                "50000",
            ],
        ))
        .await
        .expect_err("unknown id");
        assert!(err.to_string().contains("404"));

        handle.stop(false).await;
    }

    #[rstest]
    fn table_aligns_columns_by_character_width() {
        let id: EmployeeId = ID.parse().expect("uuid");
        let employee = Employee::new(
            id,
            EmployeeDetails::new("Иван", "ivan@x.com", 25, "IT", 50_000).expect("valid"),
        );

        let table = render_table([&employee]);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("ID"));
        assert_eq!(
            lines[0].find("NAME").expect("name column"),
            lines[1].find("Иван").map(|byte| lines[1][..byte].chars().count()).expect("name")
        );
        assert!(lines[1].ends_with("50000"));
    }

    #[rstest]
    fn empty_table_prints_headers() {
        assert_eq!(
            render_table(std::iter::empty()),
            "ID  NAME  EMAIL  AGE  DEPARTMENT  SALARY"
        );
    }

    #[rstest]
    fn parses_update_with_all_fields() {
        let args = CliArgs::try_parse_from([
            "employee-admin",
            "update",
            ID,
            "--name",
            "Иван",
            "--email",
            "ivan@x.com",
            "--age",
            "25",
            "--department",
            "IT",
            "--salary",
            "55000",
        ])
        .expect("args parse");

        match args.command {
            Command::Update { id, fields } => {
                assert_eq!(id.to_string(), ID);
                assert_eq!(fields.salary, 55_000);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[rstest]
    #[case(&["employee-admin", "get", "not-a-uuid"])]
    #[case(&["employee-admin", "create", "--name", "Иван"])]
    fn rejects_malformed_arguments(#[case] argv: &[&str]) {
        assert!(CliArgs::try_parse_from(argv).is_err());
    }

    #[rstest]
    fn invalid_fields_fail_before_any_request() {
        let fields = super::EmployeeFields {
            name: "Иван".to_owned(),
            email: "not-an-email".to_owned(),
            age: 25,
            department: "IT".to_owned(),
            salary: 1,
        };
        assert!(fields.into_details().is_err());
    }
}
