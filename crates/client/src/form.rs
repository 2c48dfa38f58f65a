//! Create/edit form state.
//!
//! The form keeps raw text for every field and checks it with the same
//! validator the server uses before anything is sent.

use crossterm::event::{Event, KeyEvent};
use roster_core::employee::{Employee, EmployeePayload};
use roster_core::error::FieldErrors;
use roster_core::types::EmployeeId;
use roster_core::validation::validate_employee;
use serde_json::Value;
use tui_input::backend::crossterm::EventHandler;
use tui_input::Input;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Role,
    Department,
    Salary,
    JoinDate,
    IsActive,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::Name,
        Field::Email,
        Field::Role,
        Field::Department,
        Field::Salary,
        Field::JoinDate,
        Field::IsActive,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Role => "Role",
            Field::Department => "Department",
            Field::Salary => "Salary",
            Field::JoinDate => "Join date (YYYY-MM-DD)",
            Field::IsActive => "Active",
        }
    }

    /// Wire name, as used in field errors.
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Role => "role",
            Field::Department => "department",
            Field::Salary => "salary",
            Field::JoinDate => "joinDate",
            Field::IsActive => "isActive",
        }
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    fn next(self) -> Field {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    fn prev(self) -> Field {
        let len = Self::ALL.len();
        Self::ALL[(self.position() + len - 1) % len]
    }
}

#[derive(Debug, Clone)]
pub struct FormState {
    /// `Some` when editing an existing record.
    pub editing: Option<EmployeeId>,
    pub focus: Field,
    pub errors: FieldErrors,
    name: Input,
    email: Input,
    role: Input,
    department: Input,
    salary: Input,
    join_date: Input,
    is_active: bool,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    /// Blank form for a new record.
    pub fn new() -> Self {
        Self {
            editing: None,
            focus: Field::Name,
            errors: FieldErrors::new(),
            name: Input::default(),
            email: Input::default(),
            role: Input::default(),
            department: Input::default(),
            salary: Input::default(),
            join_date: Input::default(),
            is_active: true,
        }
    }

    /// Form pre-filled from a stored record.
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            editing: Some(employee.id),
            focus: Field::Name,
            errors: FieldErrors::new(),
            name: Input::new(employee.name.clone()),
            email: Input::new(employee.email.clone()),
            role: Input::new(employee.role.clone()),
            department: Input::new(employee.department.clone()),
            salary: Input::new(employee.salary.to_string()),
            join_date: Input::new(employee.join_date.format("%Y-%m-%d").to_string()),
            is_active: employee.is_active,
        }
    }

    pub fn title(&self) -> &'static str {
        if self.editing.is_some() {
            " Edit Employee "
        } else {
            " Add Employee "
        }
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn toggle_active(&mut self) {
        self.is_active = !self.is_active;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Text input behind a field; `None` for the active toggle.
    pub fn input(&self, field: Field) -> Option<&Input> {
        match field {
            Field::Name => Some(&self.name),
            Field::Email => Some(&self.email),
            Field::Role => Some(&self.role),
            Field::Department => Some(&self.department),
            Field::Salary => Some(&self.salary),
            Field::JoinDate => Some(&self.join_date),
            Field::IsActive => None,
        }
    }

    fn input_mut(&mut self, field: Field) -> Option<&mut Input> {
        match field {
            Field::Name => Some(&mut self.name),
            Field::Email => Some(&mut self.email),
            Field::Role => Some(&mut self.role),
            Field::Department => Some(&mut self.department),
            Field::Salary => Some(&mut self.salary),
            Field::JoinDate => Some(&mut self.join_date),
            Field::IsActive => None,
        }
    }

    /// Feed a key to the focused text input.
    pub fn edit(&mut self, key: KeyEvent) {
        let focus = self.focus;
        if let Some(input) = self.input_mut(focus) {
            input.handle_event(&Event::Key(key));
        }
    }

    pub fn error_for(&self, field: Field) -> Option<&str> {
        self.errors.get(field.key())
    }

    /// The body sent to the server. Empty text stays empty so the
    /// validator reports it as missing.
    pub fn to_payload(&self) -> EmployeePayload {
        let join_date = self.join_date.value().trim();
        EmployeePayload {
            name: Some(text(&self.name)),
            email: Some(text(&self.email)),
            role: Some(text(&self.role)),
            department: Some(text(&self.department)),
            salary: Some(text(&self.salary)),
            join_date: (!join_date.is_empty()).then(|| Value::from(join_date)),
            is_active: Some(self.is_active),
        }
    }

    /// Check the form locally. On failure the errors are kept for display
    /// and `None` is returned.
    pub fn submit(&mut self) -> Option<EmployeePayload> {
        let payload = self.to_payload();
        match validate_employee(&payload) {
            Ok(_) => {
                self.errors = FieldErrors::new();
                Some(payload)
            }
            Err(errors) => {
                tracing::debug!(%errors, "Form rejected locally");
                self.errors = errors;
                None
            }
        }
    }
}

fn text(input: &Input) -> Value {
    Value::from(input.value())
}
