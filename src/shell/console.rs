// Console front end: command parsing, page rendering and toast output.
//
// Purpose
// - Give the store a line oriented interface so the binary can drive every flow.
//
// Boundaries
// - No state lives here. Commands become store dispatches or workflow calls in main.

use crate::core::employee::model::{Department, Employee, Position};
use crate::core::ports::{Notifier, Translator};
use crate::core::route::Route;
use crate::core::store::state::{AppState, Language, ViewMode};
use crate::core::view::paginate::{PageWindow, select_page};
use clap::{Parser, Subcommand, ValueEnum};
use std::convert::Infallible;
use std::fmt::Write;

/// One line typed at the prompt. The first word names the command.
#[derive(Debug, Parser)]
#[command(name = "employees", multicall = true)]
struct ConsoleLine {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Show the current page
    #[command(visible_alias = "ls")]
    List,

    /// Jump to a page
    Page {
        #[arg(value_parser = positive)]
        number: usize,
    },

    /// Next page
    Next,

    /// Previous page
    #[command(visible_alias = "prev")]
    Previous,

    /// Change the page size
    PerPage {
        #[arg(value_parser = positive)]
        size: usize,
    },

    /// Type into the search box; the search runs once typing pauses
    Type {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        term: Vec<String>,
    },

    /// Search now; no term clears the search
    Search {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        term: Vec<String>,
    },

    /// Filter by department
    Dept {
        #[arg(value_enum, ignore_case = true)]
        department: DepartmentArg,
    },

    /// Filter by position
    Pos {
        #[arg(value_enum, ignore_case = true)]
        position: PositionArg,
    },

    /// Drop the search term and both filters
    ClearFilters,

    /// Switch between table and list view
    View {
        #[arg(value_enum, ignore_case = true)]
        mode: ViewModeArg,
    },

    /// Switch the display language
    Lang {
        #[arg(value_enum, ignore_case = true)]
        language: LanguageArg,
    },

    /// Print one employee
    Show { id: String },

    /// Fill in the form for a new employee
    Add,

    /// Fill in the form for an existing employee
    Edit { id: String },

    /// Delete an employee after confirmation
    #[command(visible_alias = "rm")]
    Delete { id: String },

    /// Open a route, e.g. /add-employee
    Go {
        #[arg(value_parser = route)]
        route: Route,
    },

    /// Leave the console
    #[command(visible_alias = "exit")]
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DepartmentArg {
    Tech,
    Analytics,
    All,
}

impl From<DepartmentArg> for Option<Department> {
    fn from(arg: DepartmentArg) -> Self {
        match arg {
            DepartmentArg::Tech => Some(Department::Tech),
            DepartmentArg::Analytics => Some(Department::Analytics),
            DepartmentArg::All => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PositionArg {
    Junior,
    Medior,
    Senior,
    All,
}

impl From<PositionArg> for Option<Position> {
    fn from(arg: PositionArg) -> Self {
        match arg {
            PositionArg::Junior => Some(Position::Junior),
            PositionArg::Medior => Some(Position::Medior),
            PositionArg::Senior => Some(Position::Senior),
            PositionArg::All => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ViewModeArg {
    Table,
    List,
}

impl From<ViewModeArg> for ViewMode {
    fn from(arg: ViewModeArg) -> Self {
        match arg {
            ViewModeArg::Table => ViewMode::Table,
            ViewModeArg::List => ViewMode::List,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LanguageArg {
    En,
    Tr,
}

impl From<LanguageArg> for Language {
    fn from(arg: LanguageArg) -> Self {
        match arg {
            LanguageArg::En => Language::En,
            LanguageArg::Tr => Language::Tr,
        }
    }
}

fn positive(raw: &str) -> Result<usize, String> {
    match raw.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(value) => Ok(value),
        Err(error) => Err(error.to_string()),
    }
}

fn route(raw: &str) -> Result<Route, Infallible> {
    Ok(Route::from_path(raw))
}

/// Parse one prompt line. `Ok(None)` for a blank line; `help` comes back as a
/// `DisplayHelp` error carrying the generated help text.
pub fn parse_line(line: &str) -> Result<Option<Command>, clap::Error> {
    let words: Vec<&str> = line.split_whitespace().collect();
    if words.is_empty() {
        return Ok(None);
    }
    ConsoleLine::try_parse_from(words).map(|parsed| Some(parsed.command))
}

/// Prints toasts to stdout.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn success(&self, message: &str) {
        tracing::info!(message, "success toast");
        println!("[ok] {message}");
    }

    fn error(&self, message: &str) {
        tracing::warn!(message, "error toast");
        println!("[error] {message}");
    }
}

fn pager(window: &PageWindow) -> String {
    let mut out = String::new();
    if window.has_previous {
        out.push_str("< ");
    }
    if window.show_first {
        out.push_str("1 ");
    }
    if window.show_first_ellipsis {
        out.push_str("... ");
    }
    for page in &window.pages {
        if *page == window.current_page {
            let _ = write!(out, "[{page}] ");
        } else {
            let _ = write!(out, "{page} ");
        }
    }
    if window.show_last_ellipsis {
        out.push_str("... ");
    }
    if window.show_last {
        let _ = write!(out, "{} ", window.total_pages);
    }
    if window.has_next {
        out.push('>');
    }
    out.trim_end().to_string()
}

fn row(employee: &Employee) -> String {
    format!(
        "{:<36} {:<24} {:<30} {:<18} {:<10} {:<10} {:<10} {}",
        employee.id,
        truncate(&employee.full_name(), 24),
        truncate(&employee.email, 30),
        employee.phone,
        employee.date_of_employment,
        employee.date_of_birth,
        employee.department,
        employee.position,
    )
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut cut: String = value.chars().take(width.saturating_sub(1)).collect();
    cut.push('~');
    cut
}

pub fn render_employee(employee: &Employee, translator: &dyn Translator, language: Language) -> String {
    let t = |key: &str| translator.translate(language, key, &[]);
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", employee.full_name(), employee.id);
    let _ = writeln!(out, "  {}: {}", t("employeeForm.email"), employee.email);
    let _ = writeln!(out, "  {}: {}", t("employeeForm.phone"), employee.phone);
    let _ = writeln!(out, "  {}: {}", t("employeeForm.dateOfBirth"), employee.date_of_birth);
    let _ = writeln!(out, "  {}: {}", t("employeeForm.dateOfEmployment"), employee.date_of_employment);
    let _ = writeln!(out, "  {}: {}", t("employeeForm.department"), employee.department);
    let _ = write!(out, "  {}: {}", t("employeeForm.position"), employee.position);
    out
}

/// The current page of the filtered list, in the active view mode and language.
pub fn render_page(state: &AppState, translator: &dyn Translator) -> String {
    let language = state.ui.language;
    let page = select_page(state);
    let mut out = String::new();
    let _ = writeln!(out, "{}", translator.translate(language, "employees.title", &[]));

    if page.items.is_empty() {
        let _ = writeln!(out, "{}", translator.translate(language, "employees.noEmployees", &[]));
    } else {
        match state.ui.view_mode {
            ViewMode::Table => {
                for employee in &page.items {
                    let _ = writeln!(out, "{}", row(employee));
                }
            }
            ViewMode::List => {
                for employee in &page.items {
                    let _ = writeln!(out, "{}", render_employee(employee, translator, language));
                }
            }
        }
    }

    let current = page.window.current_page.to_string();
    let total = page.window.total_pages.to_string();
    let count = page.total_items.to_string();
    let _ = writeln!(
        out,
        "{}",
        translator.translate(
            language,
            "employees.pageSummary",
            &[("current", &current), ("total", &total), ("count", &count)],
        )
    );
    let _ = write!(out, "{}", pager(&page.window));
    if state.employees.loading {
        out.push_str("\n...");
    }
    if let Some(error) = &state.employees.error {
        let _ = write!(out, "\n! {error}");
    }
    out
}

#[cfg(test)]
mod console_tests {
    use super::*;
    use crate::core::store::action::{set_current_page, set_employees, set_error, set_view_mode};
    use crate::core::store::evolve::evolve;
    use crate::shell::app::built_in_catalogs;
    use crate::core::view::paginate::find_employee;
    use crate::test_support::fixtures::employees::make_employees;
    use clap::error::ErrorKind;
    use rstest::rstest;

    fn parsed(line: &str) -> Command {
        parse_line(line).unwrap().unwrap()
    }

    #[rstest]
    #[case("list", Command::List)]
    #[case("ls", Command::List)]
    #[case("  page 3 ", Command::Page { number: 3 })]
    #[case("prev", Command::Previous)]
    #[case("per-page 20", Command::PerPage { size: 20 })]
    #[case("edit 42", Command::Edit { id: "42".into() })]
    #[case("rm 42", Command::Delete { id: "42".into() })]
    #[case("go /edit-employee/7", Command::Go { route: Route::EditEmployee("7".into()) })]
    #[case("go /nowhere", Command::Go { route: Route::Employees })]
    #[case("exit", Command::Quit)]
    fn it_should_parse_commands(#[case] line: &str, #[case] expected: Command) {
        assert_eq!(parsed(line), expected);
    }

    #[rstest]
    fn it_should_keep_every_word_of_a_search_term() {
        let Command::Search { term } = parsed("search ada  lovelace") else {
            panic!("expected a search");
        };
        assert_eq!(term.join(" "), "ada lovelace");
        assert_eq!(parsed("search"), Command::Search { term: vec![] });
        assert_eq!(parsed("type -ada"), Command::Type { term: vec!["-ada".into()] });
    }

    #[rstest]
    fn it_should_map_filter_and_display_arguments() {
        let Command::Dept { department } = parsed("dept analytics") else {
            panic!("expected a department filter");
        };
        assert_eq!(Option::<Department>::from(department), Some(Department::Analytics));

        let Command::Pos { position } = parsed("pos all") else {
            panic!("expected a position filter");
        };
        assert_eq!(Option::<Position>::from(position), None);

        let Command::View { mode } = parsed("view LIST") else {
            panic!("expected a view mode");
        };
        assert_eq!(ViewMode::from(mode), ViewMode::List);

        let Command::Lang { language } = parsed("lang tr") else {
            panic!("expected a language");
        };
        assert_eq!(Language::from(language), Language::Tr);
    }

    #[rstest]
    fn it_should_ignore_a_blank_line() {
        assert_eq!(parse_line("   ").unwrap(), None);
    }

    #[rstest]
    #[case("page", ErrorKind::MissingRequiredArgument)]
    #[case("page two", ErrorKind::ValueValidation)]
    #[case("page 0", ErrorKind::ValueValidation)]
    #[case("per-page 0", ErrorKind::ValueValidation)]
    #[case("dept sales", ErrorKind::InvalidValue)]
    #[case("lang de", ErrorKind::InvalidValue)]
    #[case("help", ErrorKind::DisplayHelp)]
    fn it_should_reject_malformed_commands(#[case] line: &str, #[case] expected: ErrorKind) {
        assert_eq!(parse_line(line).unwrap_err().kind(), expected);
    }

    #[rstest]
    fn it_should_reject_an_unknown_command() {
        assert!(parse_line("launch").is_err());
    }

    #[rstest]
    fn it_should_print_ids_that_resolve() {
        let mut state = evolve(AppState::default(), &set_employees(make_employees(1)));
        state.employees.list[0].id = "01a1445f-5676-7224-a74e-1f3b01f0bf6a".into();
        let out = render_page(&state, &built_in_catalogs().unwrap());

        let printed = out
            .lines()
            .find(|l| l.contains("employee0@x.com"))
            .and_then(|l| l.split_whitespace().next())
            .unwrap();
        assert_eq!(printed, "01a1445f-5676-7224-a74e-1f3b01f0bf6a");
        assert!(find_employee(&state, printed).is_some());
    }

    #[rstest]
    fn it_should_render_the_current_page_with_a_pager() {
        let state = evolve(AppState::default(), &set_employees(make_employees(100)));
        let state = evolve(state, &set_current_page(5));
        let out = render_page(&state, &built_in_catalogs().unwrap());

        assert!(out.starts_with("Employee List\n"));
        assert_eq!(out.lines().filter(|l| l.contains("@x.com")).count(), 10);
        assert!(out.contains("Page 5 of 10 (100 employees)"));
        assert!(out.ends_with("< 1 ... 3 4 [5] 6 7 ... 10 >"));
    }

    #[rstest]
    fn it_should_render_an_empty_list_in_turkish() {
        let state = evolve(AppState::default(), &crate::core::store::action::set_language(Language::Tr));
        let out = render_page(&state, &built_in_catalogs().unwrap());
        assert!(out.contains("Çalışan bulunamadı"));
        assert!(out.contains("Sayfa 1 / 0 (0 çalışan)"));
    }

    #[rstest]
    fn it_should_render_list_mode_and_the_last_error() {
        let state = evolve(AppState::default(), &set_employees(make_employees(1)));
        let state = evolve(state, &set_view_mode(ViewMode::List));
        let state = evolve(state, &set_error("employee service unavailable"));
        let out = render_page(&state, &built_in_catalogs().unwrap());

        assert!(out.contains("Ada Lovelace (0)"));
        assert!(out.contains("  Email Address: employee0@x.com"));
        assert!(out.ends_with("! employee service unavailable"));
    }
}
