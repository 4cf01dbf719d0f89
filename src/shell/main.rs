use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing_subscriber::{EnvFilter, fmt};

use employee_directory::adapters::file::file_storage::FileStorage;
use employee_directory::application::employee_workflow::FormMode;
use employee_directory::application::errors::ApplicationError;
use employee_directory::core::employee::decide::DecideError;
use employee_directory::core::employee::model::{Department, EmployeeDraft, Field, Position};
use employee_directory::core::ports::Translator;
use employee_directory::core::route::Route;
use employee_directory::core::store::action::{
    clear_filters, set_current_page, set_department_filter, set_items_per_page, set_language,
    set_position_filter, set_view_mode,
};
use employee_directory::core::view::paginate::{find_employee, select_page};
use employee_directory::shell::app::App;
use employee_directory::shell::config::AppConfig;
use employee_directory::shell::console::{
    Command, ConsoleNotifier, parse_line, render_employee, render_page,
};

type Input = Lines<BufReader<Stdin>>;

fn prompt(text: &str) -> anyhow::Result<()> {
    print!("{text}");
    std::io::stdout().flush()?;
    Ok(())
}

async fn t(app: &App, key: &str) -> String {
    let language = app.store.select(|s| s.ui.language).await;
    app.translator.translate(language, key, &[])
}

fn choices(field: Field) -> Option<String> {
    let names: Vec<&str> = match field {
        Field::Department => Department::ALL.iter().map(|d| d.as_str()).collect(),
        Field::Position => Position::ALL.iter().map(|p| p.as_str()).collect(),
        _ => return None,
    };
    Some(names.join("/"))
}

/// Ask for every field, checking each one as it is left. `None` when input ends.
async fn fill_form(
    app: &App,
    input: &mut Input,
    mode: &FormMode,
    mut draft: EmployeeDraft,
) -> anyhow::Result<Option<EmployeeDraft>> {
    let language = app.store.select(|s| s.ui.language).await;
    for field in Field::ALL {
        loop {
            let label = t(app, &format!("employeeForm.{}", field.as_str())).await;
            let hint = choices(field).map(|c| format!(" ({c})")).unwrap_or_default();
            let current = draft.value(field);
            if current.is_empty() {
                prompt(&format!("{label}{hint}: "))?;
            } else {
                prompt(&format!("{label}{hint} [{current}]: "))?;
            }
            let Some(line) = input.next_line().await? else {
                return Ok(None);
            };
            let line = line.trim();
            if !line.is_empty() {
                draft.set(field, line);
            }
            let errors = app.workflow.check_field(mode, field, draft.value(field)).await;
            match errors.messages(app.translator.as_ref(), language).remove(&field) {
                Some(message) => println!("  {message}"),
                None => break,
            }
        }
    }
    Ok(Some(draft))
}

async fn run_form(app: &App, input: &mut Input, mode: FormMode) -> anyhow::Result<()> {
    let draft = match &mode {
        FormMode::Create => EmployeeDraft::default(),
        FormMode::Edit { employee_id } => match app.workflow.load_for_edit(employee_id).await {
            Ok(draft) => draft,
            Err(error) => {
                println!("{error}");
                app.workflow.open(Route::Employees).await;
                return Ok(());
            }
        },
    };
    let Some(draft) = fill_form(app, input, &mode, draft).await? else {
        return Ok(());
    };
    println!("...");
    match app.workflow.submit(&mode, &draft).await {
        Ok(()) => println!("{}", render_page(&app.store.get_state().await, app.translator.as_ref())),
        Err(ApplicationError::Invalid(errors)) => {
            let language = app.store.select(|s| s.ui.language).await;
            for (field, message) in errors.messages(app.translator.as_ref(), language) {
                println!("  {field}: {message}");
            }
        }
        // Already reported through the notifier.
        Err(_) => {}
    }
    Ok(())
}

async fn confirm(app: &App, input: &mut Input, key: &str) -> anyhow::Result<bool> {
    prompt(&format!("{} [y/N] ", t(app, key).await))?;
    let answer = input.next_line().await?.unwrap_or_default();
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes" | "e" | "evet"))
}

async fn open(app: &App, input: &mut Input, route: Route) -> anyhow::Result<()> {
    app.workflow.open(route.clone()).await;
    match route {
        Route::Employees => println!("{}", render_page(&app.store.get_state().await, app.translator.as_ref())),
        Route::AddEmployee => run_form(app, input, FormMode::Create).await?,
        Route::EditEmployee(employee_id) => run_form(app, input, FormMode::Edit { employee_id }).await?,
    }
    Ok(())
}

async fn change_page(app: &App, page: usize) {
    let window = app.store.select(|s| select_page(s).window).await;
    if window.accepts(page) {
        app.store.dispatch(set_current_page(page)).await;
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::from_env()?;
    tracing::info!(storage_dir = %config.storage_dir.display(), key = %config.storage_key, "starting");
    let storage = Arc::new(FileStorage::new(config.storage_dir.clone()));
    let app = App::build(&config, storage, Arc::new(ConsoleNotifier)).await?;
    let mut input = BufReader::new(tokio::io::stdin()).lines();

    println!("{}", render_page(&app.store.get_state().await, app.translator.as_ref()));
    loop {
        prompt("> ")?;
        let Some(line) = input.next_line().await? else {
            break;
        };
        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(error) => {
                // Also the path for `help`.
                let _ = error.print();
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::List => {}
            Command::Page { number } => change_page(&app, number).await,
            Command::Next => {
                let current = app.store.select(|s| s.ui.pagination.current_page).await;
                change_page(&app, current + 1).await;
            }
            Command::Previous => {
                let current = app.store.select(|s| s.ui.pagination.current_page).await;
                change_page(&app, current.saturating_sub(1)).await;
            }
            Command::PerPage { size } => {
                app.store.dispatch(set_items_per_page(size)).await;
            }
            Command::Type { term } => {
                app.search.input(term.join(" ")).await;
                continue;
            }
            Command::Search { term } => app.search.submit(term.join(" ")).await,
            Command::Dept { department } => {
                app.store.dispatch(set_department_filter(department.into())).await;
            }
            Command::Pos { position } => {
                app.store.dispatch(set_position_filter(position.into())).await;
            }
            Command::ClearFilters => {
                app.store.dispatch(clear_filters()).await;
            }
            Command::View { mode } => {
                app.store.dispatch(set_view_mode(mode.into())).await;
            }
            Command::Lang { language } => {
                app.store.dispatch(set_language(language.into())).await;
            }
            Command::Show { id } => {
                let state = app.store.get_state().await;
                match find_employee(&state, &id) {
                    Some(employee) => println!(
                        "{}",
                        render_employee(employee, app.translator.as_ref(), state.ui.language)
                    ),
                    None => println!("{}", DecideError::NotFound(id)),
                }
                continue;
            }
            Command::Add => {
                open(&app, &mut input, Route::AddEmployee).await?;
                continue;
            }
            Command::Edit { id } => {
                open(&app, &mut input, Route::EditEmployee(id)).await?;
                continue;
            }
            Command::Go { route } => {
                open(&app, &mut input, route).await?;
                continue;
            }
            Command::Delete { id } => {
                if confirm(&app, &mut input, "employees.confirmDelete").await? {
                    println!("...");
                    // Failures are reported through the notifier.
                    let _ = app.workflow.delete(&id).await;
                }
            }
        }
        println!("{}", render_page(&app.store.get_state().await, app.translator.as_ref()));
    }

    app.search.cancel().await;
    Ok(())
}
