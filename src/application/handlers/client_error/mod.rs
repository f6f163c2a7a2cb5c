//! Client error command handlers.

mod record_client_error;

pub use record_client_error::{
    RecordClientErrorCommand, RecordClientErrorError, RecordClientErrorHandler,
};
