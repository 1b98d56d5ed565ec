pub mod catalog_http;
pub mod client;
