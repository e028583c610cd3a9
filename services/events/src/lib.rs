//! Event management backend
//!
//! Users register and authenticate, organizers create, edit and delete
//! events, attendees search events and leave feedback. Each operation is a
//! service in [`services`] backed by a repository in [`repositories`], and
//! exposed over HTTP by [`routes`].

pub mod config;
pub mod database;
pub mod error;
pub mod extract;
pub mod identity;
pub mod models;
pub mod password;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod validation;

pub use state::AppState;
