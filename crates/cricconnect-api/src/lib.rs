pub mod catalog;
pub mod config;
pub mod error;
pub mod matches;
pub mod messages;
pub mod pagination;
pub mod predictions;
pub mod presentation;
pub mod root;
pub mod router;
pub mod state;
pub mod stats;
pub mod validation;
