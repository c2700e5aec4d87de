pub mod entities;
pub mod value_objects;

pub use entities::SalesQuote;
pub use value_objects::{AccessoryPackage, ExteriorFinish, UnknownSelection};
