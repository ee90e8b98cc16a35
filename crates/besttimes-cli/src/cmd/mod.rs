pub mod record;
pub mod schema;
pub mod show;
pub mod sync;
pub mod validate;
