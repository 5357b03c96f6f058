//! Demonstration sequence driven through the service container.
//!
//! Seeds one user and one todo, reads them back, completes the todo and
//! finally probes a user that does not exist. The same sequence runs over
//! either contract shape and must produce the same report.

use std::fmt::Write as _;

use serde::Serialize;

use common::{AppError, AppResult, Context};
use domain::{Todo, User};

use crate::container::{ContractShape, ServiceContainer};
use crate::service::{TodoService, UserService};

pub const SAMPLE_USER_ID: &str = "user1";
pub const SAMPLE_TODO_ID: &str = "todo1";
pub const MISSING_USER_ID: &str = "ghost";

/// Outcome of one demonstration run.
#[derive(Debug, Clone, Serialize)]
pub struct DemoReport {
    pub contract: ContractShape,
    pub user: User,
    pub todos_before: Vec<Todo>,
    pub todos_after: Vec<Todo>,
    /// Error code returned when listing todos of `MISSING_USER_ID`
    pub missing_user_error: Option<String>,
}

fn sample_user() -> User {
    User::new(SAMPLE_USER_ID, "Taro Yamada", "yamada@example.com")
}

fn sample_todo() -> Todo {
    Todo::new(
        SAMPLE_TODO_ID,
        SAMPLE_USER_ID,
        "Compare interface designs",
        "Check how a big interface and small interfaces differ",
    )
}

fn sorted(mut todos: Vec<Todo>) -> Vec<Todo> {
    todos.sort_by(|a, b| a.id.cmp(&b.id));
    todos
}

/// Run the demonstration sequence.
///
/// The context is checked between steps; a cancelled or expired context
/// stops the run with `Cancelled`.
pub async fn run(ctx: Context, services: &dyn ServiceContainer) -> AppResult<DemoReport> {
    let users = services.users();
    let todos = services.todos();

    ctx.ensure_live()?;
    users.create_user(ctx.clone(), sample_user()).await?;
    todos.create_todo(ctx.clone(), sample_todo()).await?;
    tracing::debug!(contract = %services.shape(), "sample data created");

    ctx.ensure_live()?;
    let user = users.get_user(ctx.clone(), SAMPLE_USER_ID).await?;
    let todos_before = sorted(todos.get_user_todos(ctx.clone(), SAMPLE_USER_ID).await?);

    ctx.ensure_live()?;
    todos.complete_todo(ctx.clone(), SAMPLE_TODO_ID).await?;
    let todos_after = sorted(todos.get_user_todos(ctx.clone(), SAMPLE_USER_ID).await?);

    ctx.ensure_live()?;
    let missing_user_error = match todos.get_user_todos(ctx, MISSING_USER_ID).await {
        Ok(_) => None,
        Err(err @ AppError::UserNotFound(_)) => Some(err.code().to_string()),
        Err(err) => return Err(err),
    };

    Ok(DemoReport {
        contract: services.shape(),
        user,
        todos_before,
        todos_after,
        missing_user_error,
    })
}

fn render_todos(out: &mut String, todos: &[Todo]) {
    for todo in todos {
        let status = if todo.completed { "done" } else { "pending" };
        let _ = writeln!(out, "- {}: {} ({})", todo.title, todo.description, status);
    }
}

/// Human-readable listing of a report
pub fn render(report: &DemoReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "===== {} contract =====", report.contract);
    let _ = writeln!(out, "User: {} ({})", report.user.name, report.user.email);
    let _ = writeln!(out, "Todos:");
    render_todos(&mut out, &report.todos_before);
    let _ = writeln!(out, "After completing {}:", SAMPLE_TODO_ID);
    render_todos(&mut out, &report.todos_after);
    if let Some(code) = &report.missing_user_error {
        let _ = writeln!(out, "Todos of {}: {}", MISSING_USER_ID, code);
    }
    out
}
