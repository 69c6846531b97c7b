/*! Reading and writing of record collections. !*/
pub mod reader;
pub mod writer;
