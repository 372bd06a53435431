//! One-shot record commands: `list`, `show`, `create`, `edit`, `delete`.

use anyhow::{Result, bail};
use tracing::instrument;
use tradedesk_business::{
    ActionOutcome, BusinessConfig, ConfirmPrompt, FormValues, Notifier, RecordId, ResourceConfig,
    ResourceController, TableView,
};

use super::{CliController, CommandStatus, build_controller};
use crate::output::{Output, TablePrinter};
use crate::prompt::TerminalConfirm;

fn one_shot(config: BusinessConfig, resource: &'static ResourceConfig) -> CliController {
    build_controller(
        config,
        resource,
        TerminalConfirm::new(false),
        TablePrinter::deferred(),
    )
}

/// Form values from `--set field=value` pairs, rejecting fields the resource does not declare.
pub fn form_from_assignments(
    resource: &ResourceConfig,
    assignments: &[(String, String)],
) -> Result<FormValues> {
    let mut form = FormValues::new();
    for (field, value) in assignments {
        if resource.field(field).is_none() {
            let known: Vec<&str> = resource.fields.iter().map(|f| f.name).collect();
            bail!(
                "{} has no field `{field}` (fields: {})",
                resource.plural,
                known.join(", ")
            );
        }
        form.set(field, value.as_str());
    }
    Ok(form)
}

/// Print the form inputs of `controller`, one labeled line per field.
pub fn print_form<N, C, V>(out: &Output, controller: &ResourceController<N, C, V>)
where
    N: Notifier,
    C: ConfirmPrompt,
    V: TableView,
{
    let resource = controller.resource();
    match controller.editing_id() {
        Some(id) => out.header(format!("{} {id}", resource.singular)),
        None => out.header(format!("new {}", resource.singular)),
    }
    for field in resource.fields {
        let marker = if field.required { "*" } else { "" };
        out.labeled_indent(
            format!("{}{marker} ({})", field.label, field.name),
            controller.form().get(field.name),
            2,
        );
    }
}

#[instrument(
    skip_all,
    name = "list",
    fields(resource = resource.key, filter = filter.as_deref().unwrap_or(""))
)]
pub async fn run_list(
    config: BusinessConfig,
    resource: &'static ResourceConfig,
    filter: Option<String>,
) -> Result<CommandStatus> {
    let mut controller = one_shot(config, resource);
    let outcome = controller.load().await;
    if outcome.is_done() {
        if let Some(query) = filter {
            controller.filter(&query);
        }
        controller.view().print_last();
    }
    Ok(outcome.into())
}

#[instrument(skip_all, name = "show", fields(resource = resource.key, %id))]
pub async fn run_show(
    config: BusinessConfig,
    resource: &'static ResourceConfig,
    id: RecordId,
) -> Result<CommandStatus> {
    let mut controller = one_shot(config, resource);
    let outcome = controller.begin_edit(id).await;
    if outcome.is_done() {
        print_form(&Output::new(), &controller);
    }
    Ok(outcome.into())
}

#[instrument(skip_all, name = "create", fields(resource = resource.key))]
pub async fn run_create(
    config: BusinessConfig,
    resource: &'static ResourceConfig,
    assignments: &[(String, String)],
) -> Result<CommandStatus> {
    let values = form_from_assignments(resource, assignments)?;
    let mut controller = one_shot(config, resource);
    controller.set_inputs(&values);
    Ok(controller.submit().await.into())
}

#[instrument(skip_all, name = "edit", fields(resource = resource.key, %id))]
pub async fn run_edit(
    config: BusinessConfig,
    resource: &'static ResourceConfig,
    id: RecordId,
    assignments: &[(String, String)],
) -> Result<CommandStatus> {
    let values = form_from_assignments(resource, assignments)?;
    let mut controller = one_shot(config, resource);

    let outcome = controller.begin_edit(id).await;
    if outcome != ActionOutcome::Done {
        return Ok(outcome.into());
    }
    controller.set_inputs(&values);
    Ok(controller.submit().await.into())
}

#[instrument(skip_all, name = "delete", fields(resource = resource.key, %id))]
pub async fn run_delete(
    config: BusinessConfig,
    resource: &'static ResourceConfig,
    id: RecordId,
    yes: bool,
) -> Result<CommandStatus> {
    let mut controller = build_controller(
        config,
        resource,
        TerminalConfirm::new(yes),
        TablePrinter::deferred(),
    );
    let outcome = controller.delete(id).await;
    if outcome == ActionOutcome::Declined {
        Output::new().dim("Nothing deleted.");
    }
    Ok(outcome.into())
}
