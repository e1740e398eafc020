// Models module

pub mod greeting;

pub use greeting::Greeting;
