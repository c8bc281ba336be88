//! Domain models for the patient-flow engine.

mod action;
mod doctor;
mod patient;
mod slot;
mod token;

pub use action::*;
pub use doctor::*;
pub use patient::*;
pub use slot::*;
pub use token::*;
