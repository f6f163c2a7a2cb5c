//! Client error module - reports forwarded by browser-side error listeners.

mod report;

pub use report::{ClientErrorInput, ClientErrorReport, ErrorLevel, MAX_MESSAGE_LENGTH, MAX_STACK_LENGTH};
