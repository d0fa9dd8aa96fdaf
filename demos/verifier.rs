use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, LineWriter, Write};

use wordseg_rs::core::char_util::regularize_str;
use wordseg_rs::{Configuration, SegConfig, Segmenter, SuffixSegmenter, WordDictionary};

fn main() {
    env_logger::init();
    // simple command line interface: config, input file, output file
    let args: Vec<_> = std::env::args().collect();
    assert!(
        args.len() == 4,
        "should only specify the config file, input file and output file"
    );
    let cfg = SegConfig::from_file(&args[1]).expect("invalid config");
    let dict = WordDictionary::load(&cfg).expect("dictionary load error");
    let segmenter = SuffixSegmenter::from_config(dict, &cfg).expect("invalid config");

    let input_file = File::open(&args[2]).expect("input file not exists");
    let lines = io::BufReader::new(input_file).lines();

    let mut opts = OpenOptions::new();
    opts.create(true).write(true).truncate(true);
    let output_file = opts.open(&args[3]).expect("output file not exists");
    let mut writer = LineWriter::new(output_file);

    for line in lines {
        let line = line.unwrap();
        let text = line.trim();
        // 与词典保持一致的归一化
        let source = if cfg.normalize_words() {
            regularize_str(text)
        } else {
            text.to_string()
        };
        let result = match segmenter.segment_to_string(&source) {
            Ok(words) => words,
            Err(e) => format!("<{}>", e),
        };
        writeln!(writer, "{}\t{}", text, result).unwrap();
    }
    writer.flush().unwrap();
}
