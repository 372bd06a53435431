//! Generic list + live filter + single-record edit controller.
//!
//! One controller instance manages one resource: it owns the last fetched
//! list, the current filter text, the form inputs and the edit session. All
//! remote failures are turned into a notification and an [`ActionOutcome`];
//! nothing is returned as an error.
//!
//! Every operation takes `&mut self`, so a single controller never has two
//! requests in flight.

use log::{info, warn};

use crate::BusinessConfig;
use crate::api;
use crate::collaborators::{ConfirmPrompt, Notifier, TableView};
use crate::error::ApiError;
use crate::record::{FormValues, Record, RecordId};
use crate::render::{RenderedTable, RowAction, filter_records, render};
use crate::resource::ResourceConfig;

/// How a controller operation ended, from the user's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Done,
    /// Local validation failed; nothing was sent.
    Invalid,
    /// The user declined the confirmation; nothing was sent.
    Declined,
    /// Transport, HTTP or decode failure.
    Failed,
}

impl ActionOutcome {
    pub fn is_done(self) -> bool {
        matches!(self, Self::Done)
    }
}

/// Whether the form targets a new record or an existing one.
///
/// `editing_id` is either absent (next save creates) or the id of a record
/// fetched from the remote service (next save updates it in place).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditSession {
    editing_id: Option<RecordId>,
}

impl EditSession {
    pub fn editing_id(&self) -> Option<RecordId> {
        self.editing_id
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    fn begin(&mut self, id: RecordId) {
        self.editing_id = Some(id);
    }

    fn clear(&mut self) {
        self.editing_id = None;
    }
}

pub struct ResourceController<N, C, V> {
    config: BusinessConfig,
    resource: &'static ResourceConfig,
    notifier: N,
    confirm: C,
    view: V,
    /// Last full fetch. Replaced wholesale, never patched.
    records: Vec<Record>,
    /// Subsequence currently shown.
    visible: Vec<Record>,
    filter_text: String,
    session: EditSession,
    form: FormValues,
}

impl<N, C, V> std::fmt::Debug for ResourceController<N, C, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceController")
            .field("resource", &self.resource.key)
            .field("api_base_url", &self.config.api_base_url)
            .field("records", &self.records.len())
            .field("visible", &self.visible.len())
            .field("filter_text", &self.filter_text)
            .field("session", &self.session)
            .field("form", &self.form)
            .finish()
    }
}

impl<N, C, V> ResourceController<N, C, V>
where
    N: Notifier,
    C: ConfirmPrompt,
    V: TableView,
{
    pub fn new(
        config: BusinessConfig,
        resource: &'static ResourceConfig,
        notifier: N,
        confirm: C,
        view: V,
    ) -> Self {
        Self {
            config,
            resource,
            notifier,
            confirm,
            view,
            records: Vec::new(),
            visible: Vec::new(),
            filter_text: String::new(),
            session: EditSession::default(),
            form: resource.default_form(),
        }
    }

    // =====================
    // Operations
    // =====================

    /// Fetch the full collection and show it unfiltered.
    ///
    /// On failure the previous list stays in place.
    pub async fn load(&mut self) -> ActionOutcome {
        match api::list_records(&self.config, self.resource.path).await {
            Ok(records) => {
                info!(
                    "Loaded {} {} from /{}/",
                    records.len(),
                    self.resource.plural,
                    self.resource.path
                );
                self.records = records;
                self.filter_text.clear();
                self.show(self.records.clone());
                ActionOutcome::Done
            }
            Err(err) => {
                warn!("Loading {} failed: {err}", self.resource.plural);
                self.notifier
                    .notify(&format!("Could not load {}.", self.resource.plural));
                ActionOutcome::Failed
            }
        }
    }

    /// Pure rendering of `records` with this resource's columns.
    pub fn render(&self, records: &[Record]) -> RenderedTable {
        render(self.resource, records)
    }

    /// Show the cached records matching `query`. Never touches the network.
    pub fn filter(&mut self, query: &str) {
        self.filter_text = query.to_owned();
        let filtered = filter_records(self.resource, &self.records, query);
        self.show(filtered);
    }

    /// Fetch one record and put it in the form for editing.
    pub async fn begin_edit(&mut self, id: RecordId) -> ActionOutcome {
        match api::get_record(&self.config, self.resource.path, id).await {
            Ok(record) => {
                self.form = self.resource.form_from_record(&record);
                self.session.begin(record.id());
                info!("Editing {} {}", self.resource.singular, record.id());
                ActionOutcome::Done
            }
            Err(err) => {
                warn!("Fetching {} {id} failed: {err}", self.resource.singular);
                self.notifier.notify(&format!(
                    "Could not load the {}.",
                    self.resource.singular
                ));
                ActionOutcome::Failed
            }
        }
    }

    /// Create or update from `values`, depending on the edit session.
    pub async fn save(&mut self, values: FormValues) -> ActionOutcome {
        let payload = match self.resource.build_payload(&values) {
            Ok(payload) => payload,
            Err(message) => {
                self.notifier.notify(&message);
                return ActionOutcome::Invalid;
            }
        };

        let result = match self.session.editing_id() {
            None => api::create_record(&self.config, self.resource.path, &payload).await,
            Some(id) => api::update_record(&self.config, self.resource.path, id, &payload).await,
        };

        match result {
            Ok(saved) => {
                info!("Saved {} {}", self.resource.singular, saved.id());
                self.session.clear();
                self.form = self.resource.default_form();
                self.load().await;
                self.notifier
                    .notify(&format!("{} saved.", capitalize(self.resource.singular)));
                ActionOutcome::Done
            }
            Err(err) => {
                warn!("Saving {} failed: {err}", self.resource.singular);
                let message = failure_message(&err, || {
                    self.resource
                        .save_failure_hint
                        .map(str::to_owned)
                        .unwrap_or_else(|| {
                            format!("Could not save the {}.", self.resource.singular)
                        })
                });
                self.notifier.notify(&message);
                ActionOutcome::Failed
            }
        }
    }

    /// Save whatever is currently in the form.
    pub async fn submit(&mut self) -> ActionOutcome {
        let values = self.form.clone();
        self.save(values).await
    }

    /// Delete after an explicit confirmation.
    pub async fn delete(&mut self, id: RecordId) -> ActionOutcome {
        if !self.confirm.confirm(self.resource.delete_prompt) {
            return ActionOutcome::Declined;
        }

        match api::delete_record(&self.config, self.resource.path, id).await {
            Ok(()) => {
                info!("Deleted {} {id}", self.resource.singular);
                if self.session.editing_id() == Some(id) {
                    self.session.clear();
                    self.form = self.resource.default_form();
                }
                self.load().await;
                self.notifier
                    .notify(&format!("{} deleted.", capitalize(self.resource.singular)));
                ActionOutcome::Done
            }
            Err(err) => {
                warn!("Deleting {} {id} failed: {err}", self.resource.singular);
                let message = failure_message(&err, || {
                    format!("Could not delete the {}.", self.resource.singular)
                });
                self.notifier.notify(&message);
                ActionOutcome::Failed
            }
        }
    }

    /// Leave update mode and reset the form, whatever the network state.
    pub fn clear_edit(&mut self) {
        self.session.clear();
        self.form = self.resource.default_form();
    }

    /// Dispatch a row action bound by the view.
    pub async fn on_row_action(&mut self, action: RowAction) -> ActionOutcome {
        match action {
            RowAction::Edit(id) => self.on_row_edit(id).await,
            RowAction::Delete(id) => self.on_row_delete(id).await,
        }
    }

    pub async fn on_row_edit(&mut self, id: RecordId) -> ActionOutcome {
        self.begin_edit(id).await
    }

    pub async fn on_row_delete(&mut self, id: RecordId) -> ActionOutcome {
        self.delete(id).await
    }

    // =====================
    // Form inputs
    // =====================

    pub fn form(&self) -> &FormValues {
        &self.form
    }

    pub fn set_input(&mut self, field: &str, value: impl Into<String>) {
        self.form.set(field, value);
    }

    pub fn set_inputs(&mut self, values: &FormValues) {
        self.form.merge(values);
    }

    // =====================
    // Getters
    // =====================

    pub fn config(&self) -> &BusinessConfig {
        &self.config
    }

    pub fn resource(&self) -> &'static ResourceConfig {
        self.resource
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn visible(&self) -> &[Record] {
        &self.visible
    }

    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    pub fn editing_id(&self) -> Option<RecordId> {
        self.session.editing_id()
    }

    pub fn is_editing(&self) -> bool {
        self.session.is_editing()
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn confirm_prompt_mut(&mut self) -> &mut C {
        &mut self.confirm
    }

    fn show(&mut self, records: Vec<Record>) {
        let table = render(self.resource, &records);
        self.view.show(&table);
        self.visible = records;
    }
}

/// The server's detail when it sent one, otherwise `fallback`.
fn failure_message(err: &ApiError, fallback: impl FnOnce() -> String) -> String {
    err.detail().map(str::to_owned).unwrap_or_else(fallback)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("country"), "Country");
        assert_eq!(capitalize("operation detail"), "Operation detail");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_edit_session_transitions() {
        let mut session = EditSession::default();
        assert!(!session.is_editing());

        session.begin(RecordId(2));
        assert_eq!(session.editing_id(), Some(RecordId(2)));

        session.clear();
        assert_eq!(session.editing_id(), None);
    }

    #[test]
    fn test_outcome_is_done() {
        assert!(ActionOutcome::Done.is_done());
        assert!(!ActionOutcome::Declined.is_done());
        assert!(!ActionOutcome::Invalid.is_done());
        assert!(!ActionOutcome::Failed.is_done());
    }
}
