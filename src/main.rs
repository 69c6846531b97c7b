//! # Shuddhi
//!
//! Shuddhi turns directories of raw Malayalam text records into a cleaned,
//! deduplicated, length-bounded corpus.
//!
//! ## Getting started
//!
//! ```sh
//! shuddhi 0.1.0
//! corpus cleaning tool.
//!
//! USAGE:
//!     shuddhi <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     dedup       Deduplicate a generated corpus
//!     help        Prints this message or the help of the given subcommand(s)
//!     pipeline    Run the cleaning pipeline over a directory of JSON/JSONL records
//! ```
use log::{debug, info};
use structopt::StructOpt;

use shuddhi::cli;
use shuddhi::error::Error;
use shuddhi::pipelines::{CorpusClean, Pipeline};
use shuddhi::processing;
use shuddhi::reporting::LogSink;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Shuddhi::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Shuddhi::Pipeline(p) => {
            let config = p.to_config();
            let sink = LogSink;

            let pipeline = CorpusClean::new(p.src, p.dst, config, &sink)?;
            let summary = pipeline.run()?;
            info!("run summary: {:?}", summary);
        }

        cli::Shuddhi::Dedup(d) => {
            let sink = LogSink;
            processing::dedup::dedup(&d.src, &d.dst, &sink)?;
        }
    };

    Ok(())
}
