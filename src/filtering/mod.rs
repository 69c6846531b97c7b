/*! Filtering utilities

Filters decide whether a piece of content enters the pipeline.

Filters implement [filter::Filter]: a pure detection (2 successive equal
inputs -> 2 equal outputs). The only filter currently shipped is the script
gate, [script::TargetScript].
! */
mod filter;
mod script;

pub use filter::Filter;
pub use script::TargetScript;
