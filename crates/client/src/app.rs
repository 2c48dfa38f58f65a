//! Client application state and its update cycle.
//!
//! [`App::handle_key`] is pure state transition: it never touches the
//! network and returns a [`Command`] when the server has to be asked
//! something. [`App::execute`] runs that command and folds the outcome
//! back into the state, re-fetching the list after every mutation.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use roster_core::employee::{Employee, EmployeePayload};
use roster_core::types::EmployeeId;

use crate::api::EmployeeApi;
use crate::form::{Field, FormState};
use crate::notice::Notice;

pub const MSG_CREATED: &str = "Employee created successfully!";
pub const MSG_UPDATED: &str = "Employee updated successfully!";
pub const MSG_DELETED: &str = "Employee deleted successfully!";
pub const MSG_CREATE_FAILED: &str = "Failed to create employee";
pub const MSG_UPDATE_FAILED: &str = "Failed to update employee";
pub const MSG_DELETE_FAILED: &str = "Failed to delete employee";
pub const MSG_FETCH_FAILED: &str = "Failed to fetch employees";

#[derive(Debug, Clone)]
pub enum Mode {
    Browse,
    Form(FormState),
    ConfirmDelete(EmployeeId),
}

/// Work for the server, produced by a key press.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Refresh,
    Create(EmployeePayload),
    Update(EmployeeId, EmployeePayload),
    Delete(EmployeeId),
    Quit,
}

#[derive(Debug, Clone)]
pub struct App {
    /// Last fetched list, newest first.
    pub employees: Vec<Employee>,
    pub selected: usize,
    pub mode: Mode,
    pub notice: Option<Notice>,
    /// A request is in flight.
    pub loading: bool,
}

impl Default for App {
    fn default() -> Self {
        Self {
            employees: Vec::new(),
            selected: 0,
            mode: Mode::Browse,
            notice: None,
            loading: false,
        }
    }
}

impl App {
    pub fn selected_employee(&self) -> Option<&Employee> {
        self.employees.get(self.selected)
    }

    pub fn employee(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    /// Drop the notice once it has been shown long enough.
    pub fn tick(&mut self, now: Instant) {
        if self.notice.as_ref().is_some_and(|n| n.is_expired(now)) {
            self.notice = None;
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Command> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Command::Quit);
        }

        match self.mode {
            Mode::Browse => self.handle_browse_key(key),
            Mode::Form(_) => self.handle_form_key(key),
            Mode::ConfirmDelete(id) => self.handle_confirm_key(key, id),
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent) -> Option<Command> {
        match key.code {
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            KeyCode::Down => {
                if self.selected + 1 < self.employees.len() {
                    self.selected += 1;
                }
                None
            }
            KeyCode::Char('a') => {
                self.mode = Mode::Form(FormState::new());
                None
            }
            KeyCode::Char('e') | KeyCode::Enter => {
                if let Some(employee) = self.selected_employee() {
                    self.mode = Mode::Form(FormState::from_employee(employee));
                }
                None
            }
            KeyCode::Char('d') => {
                if let Some(employee) = self.selected_employee() {
                    self.mode = Mode::ConfirmDelete(employee.id);
                }
                None
            }
            KeyCode::Char('r') => Some(Command::Refresh),
            KeyCode::Char('q') => Some(Command::Quit),
            _ => None,
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) -> Option<Command> {
        let Mode::Form(form) = &mut self.mode else {
            return None;
        };

        match key.code {
            KeyCode::Esc => {
                self.mode = Mode::Browse;
                None
            }
            KeyCode::Tab => {
                form.focus_next();
                None
            }
            KeyCode::BackTab => {
                form.focus_prev();
                None
            }
            KeyCode::Enter => {
                let payload = form.submit()?;
                Some(match form.editing {
                    Some(id) => Command::Update(id, payload),
                    None => Command::Create(payload),
                })
            }
            KeyCode::Char(' ') if form.focus == Field::IsActive => {
                form.toggle_active();
                None
            }
            _ => {
                form.edit(key);
                None
            }
        }
    }

    fn handle_confirm_key(&mut self, key: KeyEvent, id: EmployeeId) -> Option<Command> {
        match key.code {
            KeyCode::Char('y') => {
                self.mode = Mode::Browse;
                Some(Command::Delete(id))
            }
            KeyCode::Char('n') | KeyCode::Esc => {
                self.mode = Mode::Browse;
                None
            }
            _ => None,
        }
    }

    /// Run a command against the API. `Quit` is the caller's business and
    /// is ignored here.
    pub async fn execute(&mut self, api: &EmployeeApi, command: Command) {
        match command {
            Command::Refresh => self.refresh(api).await,
            Command::Create(payload) => {
                let result = api.create(&payload).await.map(|_| ());
                self.finish_save(api, result, MSG_CREATED, MSG_CREATE_FAILED)
                    .await;
            }
            Command::Update(id, payload) => {
                let result = api.update(id, &payload).await.map(|_| ());
                self.finish_save(api, result, MSG_UPDATED, MSG_UPDATE_FAILED)
                    .await;
            }
            Command::Delete(id) => match api.delete(id).await {
                Ok(_) => {
                    self.notice = Some(Notice::success(MSG_DELETED));
                    self.refresh(api).await;
                }
                Err(e) => {
                    tracing::warn!(error = %e, %id, "Delete failed");
                    self.notice = Some(Notice::failure(e.notice_text(MSG_DELETE_FAILED)));
                }
            },
            Command::Quit => {}
        }
    }

    async fn finish_save(
        &mut self,
        api: &EmployeeApi,
        result: crate::error::Result<()>,
        success: &str,
        fallback: &str,
    ) {
        match result {
            Ok(()) => {
                self.mode = Mode::Browse;
                self.notice = Some(Notice::success(success));
                self.refresh(api).await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Save failed");
                if let (Mode::Form(form), Some(errors)) = (&mut self.mode, e.field_errors()) {
                    form.errors = errors.clone();
                }
                self.notice = Some(Notice::failure(e.notice_text(fallback)));
            }
        }
    }

    async fn refresh(&mut self, api: &EmployeeApi) {
        match api.list().await {
            Ok(employees) => {
                self.employees = employees;
                self.selected = self.selected.min(self.employees.len().saturating_sub(1));
            }
            Err(e) => {
                tracing::warn!(error = %e, "Fetching employees failed");
                self.notice = Some(Notice::failure(e.notice_text(MSG_FETCH_FAILED)));
            }
        }
    }
}
