pub mod events;
pub mod model;

pub use events::{AppEvent, LookupRequest};
pub use model::{Definition, Entry, Label, LookupResult};
