mod recordreader;

pub use recordreader::RecordReader;
