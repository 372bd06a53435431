//! `tradedesk shell <resource>`: one controller, driven line by line.

use std::io::{BufRead as _, IsTerminal as _};
use std::ops::ControlFlow;
use std::str::FromStr;

use anyhow::{Context as _, Result};
use inquire::{InquireError, Text};
use tracing::{debug, instrument};
use tradedesk_business::{
    BusinessConfig, ConfirmPrompt, Notifier, RecordId, ResourceConfig, ResourceController,
    TableView,
};

use super::records::print_form;
use super::{CommandStatus, build_controller};
use crate::output::{Output, TablePrinter, format_table};
use crate::prompt::TerminalConfirm;

pub const HELP: &[(&str, &str)] = &[
    ("list", "show the current table again"),
    ("filter [text]", "filter the loaded records; no text shows everything"),
    ("edit <id>", "load a record into the form for updating"),
    ("set <field> <value>", "set a form input; no value empties it"),
    ("form", "show the form inputs"),
    ("save", "create, or update the record being edited"),
    ("clear", "stop editing and reset the form"),
    ("delete <id>", "delete a record after confirmation"),
    ("reload", "fetch the list again"),
    ("help", "show this help"),
    ("quit", "leave the shell"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    List,
    Filter(String),
    Edit(RecordId),
    Set { field: String, value: String },
    Form,
    Save,
    Clear,
    Delete(RecordId),
    Reload,
    Help,
    Quit,
}

fn record_id(verb: &str, rest: &str) -> Result<RecordId, String> {
    if rest.is_empty() {
        return Err(format!("usage: {verb} <id>"));
    }
    rest.parse()
        .map_err(|_err| format!("`{rest}` is not a valid record id"))
}

impl FromStr for ShellCommand {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(verb, rest)| (verb, rest.trim()));

        let no_args = |command: Self| {
            if rest.is_empty() {
                Ok(command)
            } else {
                Err(format!("`{verb}` takes no arguments"))
            }
        };

        match verb.to_lowercase().as_str() {
            "list" | "ls" => no_args(Self::List),
            "filter" | "f" => Ok(Self::Filter(rest.to_owned())),
            "edit" | "e" => record_id(verb, rest).map(Self::Edit),
            "set" => {
                let (field, value) = rest
                    .split_once(char::is_whitespace)
                    .map_or((rest, ""), |(field, value)| (field, value.trim()));
                if field.is_empty() {
                    return Err("usage: set <field> <value>".to_owned());
                }
                Ok(Self::Set {
                    field: field.to_owned(),
                    value: value.to_owned(),
                })
            }
            "form" => no_args(Self::Form),
            "save" => no_args(Self::Save),
            "clear" => no_args(Self::Clear),
            "delete" | "rm" => record_id(verb, rest).map(Self::Delete),
            "reload" => no_args(Self::Reload),
            "help" | "?" => no_args(Self::Help),
            "quit" | "exit" | "q" => no_args(Self::Quit),
            _ => Err(format!("unknown command `{verb}` (type `help`)")),
        }
    }
}

/// Parse one input line. Blank lines and `#` comments yield `None`.
pub fn parse_line(line: &str) -> Option<Result<ShellCommand, String>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    Some(line.parse())
}

pub fn print_help(out: &Output) {
    for (usage, description) in HELP {
        out.labeled_indent(usage, description, 2);
    }
}

/// Run one command against `controller`.
pub async fn execute<N, C, V>(
    controller: &mut ResourceController<N, C, V>,
    command: ShellCommand,
    out: &Output,
) -> ControlFlow<()>
where
    N: Notifier,
    C: ConfirmPrompt,
    V: TableView,
{
    debug!(?command, "shell command");
    match command {
        ShellCommand::List => out.print(format_table(&controller.render(controller.visible()))),
        ShellCommand::Filter(query) => controller.filter(&query),
        ShellCommand::Edit(id) => {
            if controller.begin_edit(id).await.is_done() {
                print_form(out, controller);
            }
        }
        ShellCommand::Set { field, value } => {
            if controller.resource().field(&field).is_some() {
                controller.set_input(&field, value);
            } else {
                out.error(format!(
                    "{} has no field `{field}`",
                    controller.resource().plural
                ));
            }
        }
        ShellCommand::Form => print_form(out, controller),
        ShellCommand::Save => {
            controller.submit().await;
        }
        ShellCommand::Clear => {
            controller.clear_edit();
            out.dim("Form cleared.");
        }
        ShellCommand::Delete(id) => {
            controller.delete(id).await;
        }
        ShellCommand::Reload => {
            controller.load().await;
        }
        ShellCommand::Help => print_help(out),
        ShellCommand::Quit => return ControlFlow::Break(()),
    }
    ControlFlow::Continue(())
}

fn prompt_label<N, C, V>(controller: &ResourceController<N, C, V>) -> String
where
    N: Notifier,
    C: ConfirmPrompt,
    V: TableView,
{
    match controller.editing_id() {
        Some(id) => format!("{} #{id}>", controller.resource().key),
        None => format!("{}>", controller.resource().key),
    }
}

/// Next input line; `None` ends the session.
fn read_line(label: &str, interactive: bool) -> Result<Option<String>> {
    if interactive {
        match Text::new(label).prompt() {
            Ok(line) => Ok(Some(line)),
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
            Err(err) => Err(err).context("Failed to read shell input"),
        }
    } else {
        let mut line = String::new();
        let read = std::io::stdin()
            .lock()
            .read_line(&mut line)
            .context("Failed to read shell input")?;
        Ok((read > 0).then_some(line))
    }
}

#[instrument(skip_all, name = "shell", fields(resource = resource.key))]
pub async fn run_shell(
    config: BusinessConfig,
    resource: &'static ResourceConfig,
) -> Result<CommandStatus> {
    let out = Output::new();
    let interactive = std::io::stdin().is_terminal();
    let mut controller = build_controller(
        config,
        resource,
        TerminalConfirm::new(false),
        TablePrinter::immediate(),
    );

    out.header(format!("{} shell (type `help` for commands)", resource.plural));
    controller.load().await;

    while let Some(line) = read_line(&prompt_label(&controller), interactive)? {
        let command = match parse_line(&line) {
            None => continue,
            Some(Ok(command)) => command,
            Some(Err(message)) => {
                out.error(message);
                continue;
            }
        };
        if execute(&mut controller, command, &out).await.is_break() {
            break;
        }
    }

    Ok(CommandStatus::Success)
}
