// Handlers module
// HTTP handlers for the service

pub mod hello;

pub use hello::hello;
