//! UV alert Lambda: geocode the ZIP code, look up the UV index, classify it,
//! and publish the alert.

pub mod handler;

pub use handler::{
    function_handler, handle, AlertResponse, Dependencies, HandlerError, SUCCESS_MESSAGE,
};
