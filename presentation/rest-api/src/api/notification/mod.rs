pub mod dto;
pub mod routes;
pub mod toast_queue;
