//! UI modules for the picker requirement calculator.

pub mod app_shell;
pub mod constants;
pub mod controls;
pub mod dashboard;
