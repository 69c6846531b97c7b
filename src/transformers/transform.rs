//! Transform trait.

use crate::pipelines::corpus::types::Record;
pub trait Transform {
    /// Takes ownership of [Record] and returns it.
    fn transform_own(&self, record: Record) -> Record;
}
