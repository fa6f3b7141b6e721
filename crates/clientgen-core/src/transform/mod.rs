pub mod collation;
pub mod collection;
pub mod endpoint_builder;
pub mod identifiers;
pub mod normalize;
pub mod schema_summary;

pub use collection::{build_api_spec, build_tag_groups};
