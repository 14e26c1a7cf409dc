pub use electives::load_electives;
pub use schema::load_schema;
pub use store::{load_existing, save_store};

mod electives;
mod json;
mod schema;
mod store;
