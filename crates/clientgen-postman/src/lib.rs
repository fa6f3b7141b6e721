pub mod collection;
pub mod generator;
pub mod url;

pub use generator::{PostmanError, PostmanGenerator};
