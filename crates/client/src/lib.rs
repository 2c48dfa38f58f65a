//! Terminal client for the roster API.
//!
//! [`api::EmployeeApi`] talks HTTP; [`app::App`] is the whole UI state,
//! driven by key events and rendered by [`ui::draw`].

pub mod api;
pub mod app;
pub mod error;
pub mod form;
pub mod notice;
pub mod ui;
