mod corpuswriter;

pub use corpuswriter::CorpusWriter;
