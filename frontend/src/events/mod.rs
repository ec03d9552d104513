mod responder_event;
mod row_event;

pub use responder_event::ResponderEvent;
pub use row_event::{RowEvent, RowSection};
