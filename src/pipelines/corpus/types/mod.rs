/*! Record and per-record outcome types. !*/
mod outcome;
mod record;

pub use outcome::{Outcome, SkipReason};
pub use record::{Record, CONTENT_FIELD};
