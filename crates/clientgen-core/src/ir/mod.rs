pub mod endpoint;
pub mod schema;
pub mod types;

pub use endpoint::*;
pub use schema::SchemaSummary;
pub use types::{ApiInfo, ApiSpec, TagGroups, UNTAGGED};
