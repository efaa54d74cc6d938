pub mod config;
pub mod controller;
pub mod error;
pub mod form;
pub mod models;
pub mod submission;
pub mod views;
pub mod workflow;

pub use controller::{FormController, FormEvent};
