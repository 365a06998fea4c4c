pub mod api_error;
pub mod secret;
pub mod timestamp;
pub mod validation;
