pub mod models;
pub mod traits;
pub mod value_objects;
