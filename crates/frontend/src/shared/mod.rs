pub mod api_utils;
pub mod date_utils;
pub mod forms;
pub mod http;
pub mod modal_stack;
pub mod notify;
pub mod resource;
