pub mod dispatch;
pub mod generate;
pub mod plan;
pub mod schema;
pub mod shared;
pub mod validate;
