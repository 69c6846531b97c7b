//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;
use unicode_script::Script;

use crate::config::{PipelineConfig, ScriptRange};

#[derive(Debug, StructOpt)]
#[structopt(name = "shuddhi", about = "corpus cleaning tool.")]
/// Holds every command that is callable by the `shuddhi` command.
pub enum Shuddhi {
    #[structopt(about = "Run the cleaning pipeline over a directory of JSON/JSONL records")]
    Pipeline(Pipeline),
    #[structopt(about = "Deduplicate a generated corpus")]
    Dedup(Dedup),
}

#[derive(Debug, StructOpt)]
/// Pipeline command and parameters.
///
/// Every configuration knob defaults to the values in
/// [PipelineConfig::default] and can be overridden independently.
pub struct Pipeline {
    #[structopt(parse(from_os_str), help = "source directory (JSON/JSONL documents)")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "destination corpus file (JSONL)")]
    pub dst: PathBuf,
    #[structopt(
        long = "script-range",
        help = "codepoint range kept by normalization, e.g. U+0D00-U+0D7F"
    )]
    pub keep_script_range: Option<ScriptRange>,
    #[structopt(
        long = "script",
        help = "target script full name, e.g. Malayalam",
        parse(try_from_str = parse_script)
    )]
    pub target_script: Option<Script>,
    #[structopt(long, help = "minimum phrase length for repetition counting")]
    pub min_phrase_words: Option<usize>,
    #[structopt(long, help = "maximum phrase window for repetition counting")]
    pub max_window_words: Option<usize>,
    #[structopt(long, help = "occurrence bound over which phrase windows are skipped")]
    pub max_repeats_phrase: Option<usize>,
    #[structopt(long, help = "occurrence bound over which a sentence is dropped")]
    pub max_repeats_sentence: Option<usize>,
    #[structopt(long, help = "near-duplicate similarity threshold, within [0, 1]")]
    pub similarity_threshold: Option<f64>,
    #[structopt(long, help = "maximum words per chunk")]
    pub max_chunk_words: Option<usize>,
    #[structopt(long, help = "words shared by consecutive chunks")]
    pub overlap_words: Option<usize>,
    #[structopt(long, help = "minimum words for a window to be emitted")]
    pub min_chunk_words: Option<usize>,
}

impl Pipeline {
    /// Builds the effective configuration: defaults, overridden by whatever
    /// was passed on the command line.
    pub fn to_config(&self) -> PipelineConfig {
        let mut config = PipelineConfig::default();

        if let Some(range) = &self.keep_script_range {
            config.keep_script_range = range.clone();
        }
        if let Some(script) = self.target_script {
            config.target_script = script;
        }
        if let Some(v) = self.min_phrase_words {
            config.min_phrase_words = v;
        }
        if let Some(v) = self.max_window_words {
            config.max_window_words = v;
        }
        if let Some(v) = self.max_repeats_phrase {
            config.max_repeats_phrase = v;
        }
        if let Some(v) = self.max_repeats_sentence {
            config.max_repeats_sentence = v;
        }
        if let Some(v) = self.similarity_threshold {
            config.similarity_threshold = v;
        }
        if let Some(v) = self.max_chunk_words {
            config.max_chunk_words = v;
        }
        if let Some(v) = self.overlap_words {
            config.overlap_words = v;
        }
        if let Some(v) = self.min_chunk_words {
            config.min_chunk_words = v;
        }

        config
    }
}

#[derive(Debug, StructOpt)]
/// Dedup command and parameters.
pub struct Dedup {
    #[structopt(parse(from_os_str), help = "source corpus location")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "destination corpus location")]
    pub dst: PathBuf,
}

fn parse_script(name: &str) -> Result<Script, String> {
    Script::from_full_name(name).ok_or_else(|| format!("unknown Unicode script: {}", name))
}

#[cfg(test)]
mod tests {
    use structopt::StructOpt;
    use unicode_script::Script;

    use crate::config::PipelineConfig;

    use super::Shuddhi;

    #[test]
    fn test_defaults_match_config() {
        let opt = Shuddhi::from_iter(["shuddhi", "pipeline", "in", "out.jsonl"]);

        let pipeline = match opt {
            Shuddhi::Pipeline(p) => p,
            other => panic!("expected pipeline command, got {:?}", other),
        };
        let defaults = PipelineConfig::default();
        let config = pipeline.to_config();

        assert_eq!(config.min_phrase_words, defaults.min_phrase_words);
        assert_eq!(config.max_chunk_words, defaults.max_chunk_words);
        assert_eq!(config.target_script, Script::Malayalam);
    }

    #[test]
    fn test_overrides() {
        let opt = Shuddhi::from_iter([
            "shuddhi",
            "pipeline",
            "in",
            "out.jsonl",
            "--max-chunk-words",
            "64",
            "--script",
            "Devanagari",
            "--script-range",
            "U+0900-U+097F",
        ]);

        let pipeline = match opt {
            Shuddhi::Pipeline(p) => p,
            other => panic!("expected pipeline command, got {:?}", other),
        };
        let config = pipeline.to_config();

        assert_eq!(config.max_chunk_words, 64);
        assert_eq!(config.target_script, Script::Devanagari);
        assert!(config.keep_script_range.contains('ह'));
        // untouched knobs keep their defaults
        assert_eq!(config.overlap_words, 50);
    }
}
