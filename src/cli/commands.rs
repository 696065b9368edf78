use std::io::Write;

use strsim::levenshtein;

use crate::{
    cli::{help, output, CliError},
    config::Config,
    core::WorkingContextManager,
    domain::{Account, Displayable, Expense},
};

const MAX_SUGGESTION_DISTANCE: usize = 3;

/// A fully parsed command-line invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    Version,
    ListAccounts,
    SelectAccount(i64),
    CreateAccount {
        name: String,
        email: String,
    },
    ShowAccount,
    ListExpenses,
    AddExpense {
        name: String,
        value: f64,
        day: u32,
        description: Option<String>,
    },
    SwitchSpan {
        year: i32,
        month: u32,
    },
    SwitchToPresent,
}

impl Command {
    /// Parses `args` (without the program name).
    pub fn parse(args: &[String]) -> Result<Self, CliError> {
        let Some(group) = args.first() else {
            return Ok(Command::Help);
        };
        match group.as_str() {
            "help" | "--help" => Ok(Command::Help),
            "version" | "--version" => Ok(Command::Version),
            "acc" => parse_account(&args[1..]),
            "eps" => parse_expense(&args[1..]),
            other => Err(unknown(other, help::groups())),
        }
    }
}

fn parse_account(args: &[String]) -> Result<Command, CliError> {
    let option = required(args, 0, "an option for `acc`")?;
    match option {
        "-l" => Ok(Command::ListAccounts),
        "-i" => Ok(Command::ShowAccount),
        "--s" => {
            let raw = required(args, 1, "an account index")?;
            let index = raw
                .parse::<i64>()
                .map_err(|_| CliError::Input(format!("`{raw}` is not an account index")))?;
            Ok(Command::SelectAccount(index))
        }
        "--c" => Ok(Command::CreateAccount {
            name: required(args, 1, "an account name")?.to_string(),
            email: required(args, 2, "an email")?.to_string(),
        }),
        other => Err(unknown(other, help::options("acc"))),
    }
}

fn parse_expense(args: &[String]) -> Result<Command, CliError> {
    let option = required(args, 0, "an option for `eps`")?;
    match option {
        "-l" => Ok(Command::ListExpenses),
        "-add" => {
            let name = required(args, 1, "an expense name")?.to_string();
            let raw_value = required(args, 2, "a value")?;
            let value = raw_value
                .parse::<f64>()
                .map_err(|_| CliError::Input(format!("`{raw_value}` is not a number")))?;
            let raw_day = required(args, 3, "a day of the month")?;
            let day = raw_day
                .parse::<u32>()
                .map_err(|_| CliError::Input(format!("`{raw_day}` is not a day of the month")))?;
            let description = args.get(4).map(|text| text.to_string());
            Ok(Command::AddExpense {
                name,
                value,
                day,
                description,
            })
        }
        "-swt" => {
            let first = required(args, 1, "a year or `present`")?;
            if first == "present" {
                return Ok(Command::SwitchToPresent);
            }
            let year = first
                .parse::<i32>()
                .map_err(|_| CliError::Input(format!("`{first}` is not a year")))?;
            let raw_month = required(args, 2, "a month")?;
            let month = raw_month
                .parse::<u32>()
                .map_err(|_| CliError::Input(format!("`{raw_month}` is not a month")))?;
            Ok(Command::SwitchSpan { year, month })
        }
        other => Err(unknown(other, help::options("eps"))),
    }
}

fn required<'a>(args: &'a [String], position: usize, what: &str) -> Result<&'a str, CliError> {
    args.get(position)
        .map(String::as_str)
        .ok_or_else(|| CliError::Input(format!("missing {what}")))
}

fn unknown(input: &str, candidates: Vec<&'static str>) -> CliError {
    CliError::UnknownCommand {
        input: input.to_string(),
        suggestion: suggest(input, &candidates),
    }
}

/// Closest candidate within a small edit distance.
pub fn suggest(input: &str, candidates: &[&'static str]) -> Option<&'static str> {
    candidates
        .iter()
        .map(|candidate| (levenshtein(input, candidate), *candidate))
        .filter(|(distance, _)| *distance <= MAX_SUGGESTION_DISTANCE)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, candidate)| candidate)
}

pub fn format_account_line(account: &Account) -> String {
    format!("[{}] {}", account.id, account.display_label())
}

pub fn format_expense_line(expense: &Expense, config: &Config) -> String {
    let date = expense.date.format(config.effective_date_format());
    let line = format!(
        "[{}] {} - {}: {} {:.2} {}",
        expense.guid,
        date,
        expense.name,
        config.currency_symbol,
        expense.value,
        expense.description.as_deref().unwrap_or_default()
    );
    line.trim_end().to_string()
}

/// Runs a command that needs the working context.
pub fn execute(
    command: Command,
    manager: &mut WorkingContextManager,
    config: &Config,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    match command {
        Command::Help => help::print_overview(out)?,
        Command::Version => super::print_version(out)?,
        Command::ListAccounts => {
            let accounts = manager.list_accounts();
            if accounts.is_empty() {
                output::info(out, "No accounts registered")?;
            }
            for account in accounts {
                writeln!(out, "{}", format_account_line(account))?;
            }
        }
        Command::SelectAccount(index) => {
            let account = manager.select_account(index)?;
            output::success(out, format!("Account selected: {}", account.name))?;
        }
        Command::CreateAccount { name, email } => {
            let account = manager.create_account(&name, &email)?;
            output::success(
                out,
                format!("Account created: {}", format_account_line(account)),
            )?;
        }
        Command::ShowAccount => {
            let span = manager.active_span();
            let account = manager.selected_account()?;
            writeln!(out, "Name:  {}", account.name)?;
            writeln!(out, "Email: {}", account.email)?;
            writeln!(out, "Guid:  {}", account.guid)?;
            writeln!(out, "Span:  {span}")?;
        }
        Command::ListExpenses => {
            let span = manager.active_span();
            let expenses = manager.list_expenses()?;
            if expenses.is_empty() {
                output::info(out, format!("No expenses recorded for {span}"))?;
            }
            for expense in expenses {
                writeln!(out, "{}", format_expense_line(expense, config))?;
            }
        }
        Command::AddExpense {
            name,
            value,
            day,
            description,
        } => {
            let expense = manager.add_expense(&name, value, day, description)?;
            output::success(
                out,
                format!(
                    "Expense added: #{} {} on {}",
                    expense.id,
                    expense.name,
                    expense.date.format(config.effective_date_format())
                ),
            )?;
        }
        Command::SwitchSpan { year, month } => {
            let span = manager.switch_span(year, month)?;
            output::success(out, format!("Working span switched to {span}"))?;
        }
        Command::SwitchToPresent => {
            let span = manager.switch_to_present()?;
            output::success(out, format!("Working span switched to the present ({span})"))?;
        }
    }
    Ok(())
}
