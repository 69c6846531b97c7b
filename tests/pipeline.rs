use std::fs;
use std::path::PathBuf;

use serde_json::json;

use shuddhi::config::PipelineConfig;
use shuddhi::pipelines::corpus::types::Record;
use shuddhi::pipelines::{CorpusClean, Pipeline};
use shuddhi::reporting::{Level, MemorySink};

/// four 5-word sentences, 20 distinct words
const LONG_CONTENT: &str = "കേരളം ഒരു ചെറിയ സംസ്ഥാനം ആണ്. \
    മലയാളം അവിടത്തെ പ്രധാന ഭാഷ ആകുന്നു. \
    പുസ്തകം വായന നല്ല ശീലം തന്നെ. \
    കുട്ടികൾ പാട്ടു പാടി കളിച്ചു നടന്നു.";

/// small chunks so LONG_CONTENT (20 words) expands into 4 chunks
fn test_config() -> PipelineConfig {
    let mut config = PipelineConfig::default();
    config.max_chunk_words = 8;
    config.overlap_words = 3;
    config.min_chunk_words = 4;
    config
}

fn write_sources(src: &PathBuf) {
    // single-object document
    fs::write(
        src.join("a.json"),
        serde_json::to_string(&json!({
            "content": "എന്റെ വീട് മനോഹരം ആണ്.",
            "source": "a"
        }))
        .unwrap(),
    )
    .unwrap();

    // array document: three identical records and a wrong-script one
    let duplicated = json!({"content": LONG_CONTENT, "source": "b"});
    fs::write(
        src.join("b.json"),
        serde_json::to_string(&json!([
            duplicated,
            duplicated,
            duplicated,
            {"content": "just english words", "source": "en"}
        ]))
        .unwrap(),
    )
    .unwrap();

    // line-delimited document with one malformed line
    fs::write(
        src.join("c.jsonl"),
        "{\"content\": \"നല്ല ദിവസം ആശംസകൾ നേരുന്നു.\", \"source\": \"c\"}\nnot json\n",
    )
    .unwrap();
}

#[test_log::test]
fn test_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("input");
    let dst = dir.path().join("output/corpus.jsonl");
    fs::create_dir(&src).unwrap();
    write_sources(&src);

    let sink = MemorySink::default();
    let pipeline = CorpusClean::new(src, dst.clone(), test_config(), &sink).unwrap();
    let summary = pipeline.run().unwrap();

    assert_eq!(summary.records_read, 6);
    assert_eq!(summary.skipped_malformed, 1);
    assert_eq!(summary.skipped_wrong_script, 1);
    assert_eq!(summary.skipped_empty, 0);
    // the triplet expands to 3 x 4 identical chunks; 8 are duplicates
    assert_eq!(summary.duplicates_removed, 8);
    assert_eq!(summary.records_written, 6);

    let written = fs::read_to_string(&dst).unwrap();
    let records: Vec<Record> = written
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(records.len(), 6);

    // the long record came out as 4 overlapping chunks
    let chunks: Vec<&Record> = records
        .iter()
        .filter(|r| r.fields()["source"] == json!("b"))
        .collect();
    assert_eq!(chunks.len(), 4);

    for chunk in &chunks {
        let metadata = &chunk.fields()["chunk"];
        assert_eq!(metadata["total_chunks"], 4);
        assert!(chunk.content().split_whitespace().count() <= 8);
        assert_eq!(
            metadata["source_record_ref"],
            chunks[0].fields()["chunk"]["source_record_ref"]
        );
    }

    // consecutive chunks overlap by exactly overlap_words
    let mut offsets: Vec<(u64, u64)> = chunks
        .iter()
        .map(|c| {
            let metadata = &c.fields()["chunk"];
            (
                metadata["start_word_offset"].as_u64().unwrap(),
                metadata["end_word_offset"].as_u64().unwrap(),
            )
        })
        .collect();
    offsets.sort();
    for pair in offsets.windows(2) {
        assert_eq!(pair[0].1 - pair[1].0, 3);
    }

    // short records keep their cleaned content and a single-chunk metadata
    let short = records
        .iter()
        .find(|r| r.fields()["source"] == json!("a"))
        .unwrap();
    assert_eq!(short.content(), "എന്റെ വീട് മനോഹരം ആണ്");
    assert_eq!(short.fields()["chunk"]["total_chunks"], 1);

    // the malformed line was reported through the sink
    assert!(sink
        .messages()
        .iter()
        .any(|(level, message)| *level == Level::Warn && message.contains("malformed")));
}

#[test]
fn test_rerun_is_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("input");
    fs::create_dir(&src).unwrap();
    write_sources(&src);

    let sink = MemorySink::default();
    let first_dst = dir.path().join("first.jsonl");
    let first = CorpusClean::new(src.clone(), first_dst.clone(), test_config(), &sink)
        .unwrap()
        .run()
        .unwrap();

    let second_dst = dir.path().join("second.jsonl");
    let second = CorpusClean::new(src, second_dst.clone(), test_config(), &sink)
        .unwrap()
        .run()
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(
        fs::read_to_string(&first_dst).unwrap(),
        fs::read_to_string(&second_dst).unwrap()
    );
}
