//! Process command implementation

use anyhow::{Context, Result};
use clap::Args;
use rayon::prelude::*;
use sentoken_core::{segment_corpus, CharClasses, SegmentStats, Sentence, SentenceSink};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config_source::ConfigSource;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{create_sink, OutputFormat, SharedSink};
use crate::progress::ProgressReporter;

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Character-class configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Keep apostrophes and double quotes attached to words
    #[arg(long)]
    pub no_apostrophes: bool,

    /// Segment input files in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads (default: number of CPUs)
    #[arg(short, long, value_name = "COUNT", requires = "parallel")]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting text processing");
        log::debug!("Arguments: {self:?}");

        let source = ConfigSource::from_arg(self.config.clone());
        let classes = source.load(self.no_apostrophes)?;
        log::info!("Using {}", source.display_name());

        let files = resolve_patterns(&self.input)?;
        log::info!("Found {} file(s) to process", files.len());

        let writer: Box<dyn Write> = match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(BufWriter::new(io::stdout().lock())),
        };
        let mut sink = create_sink(self.format, writer);

        let mut progress = ProgressReporter::new(self.quiet || files.len() < 2);
        progress.init_files(files.len() as u64);

        let stats = if self.parallel && files.len() > 1 {
            self.process_parallel(&files, &classes, sink.as_mut(), &progress)?
        } else {
            process_sequential(&files, &classes, sink.as_mut(), &progress)?
        };

        sink.finish().context("Failed to write output")?;
        progress.finish();

        log::info!(
            "Segmented {} file(s): {} paragraphs, {} lines, {} tokens, {} sentences",
            files.len(),
            stats.paragraphs,
            stats.lines,
            stats.tokens,
            stats.sentences
        );
        Ok(())
    }

    /// Segment every file on a worker pool, then replay sentences in input order
    fn process_parallel(
        &self,
        files: &[PathBuf],
        classes: &CharClasses,
        sink: &mut dyn SentenceSink,
        progress: &ProgressReporter,
    ) -> Result<SegmentStats> {
        let threads = self.threads.unwrap_or_else(num_cpus::get);
        log::debug!("Segmenting {} files with {threads} threads", files.len());

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .context("Failed to build thread pool")?;

        let results: Vec<Result<(Vec<Sentence>, SegmentStats)>> = pool.install(|| {
            files
                .par_iter()
                .map(|path| {
                    let mut sentences = Vec::new();
                    let stats = segment_file(path, classes, &mut sentences)?;
                    progress.file_completed(&path.display().to_string());
                    Ok((sentences, stats))
                })
                .collect()
        });

        let mut total = SegmentStats::default();
        for result in results {
            let (sentences, stats) = result?;
            for sentence in sentences {
                sink.put(sentence).context("Failed to write output")?;
            }
            total += stats;
        }
        Ok(total)
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when running inside tests
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

/// Stream each file straight into the shared sink
fn process_sequential(
    files: &[PathBuf],
    classes: &CharClasses,
    sink: &mut dyn SentenceSink,
    progress: &ProgressReporter,
) -> Result<SegmentStats> {
    let mut total = SegmentStats::default();
    for path in files {
        total += segment_file(path, classes, SharedSink(&mut *sink))?;
        progress.file_completed(&path.display().to_string());
    }
    Ok(total)
}

/// Segment one file as a self-contained corpus
fn segment_file<S: SentenceSink>(path: &Path, classes: &CharClasses, sink: S) -> Result<SegmentStats> {
    let size = FileReader::file_size(path)?;
    log::debug!("Segmenting {} ({size} bytes)", path.display());

    let reader = FileReader::open(path)?;
    let stats = segment_corpus(reader, sink, classes.clone())
        .map_err(|e| CliError::ProcessingError(format!("{}: {e}", path.display())))?;
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(input: Vec<String>, output: PathBuf, format: OutputFormat) -> ProcessArgs {
        ProcessArgs {
            input,
            output: Some(output),
            format,
            config: None,
            no_apostrophes: false,
            parallel: false,
            threads: None,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_process_single_file() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("in.txt");
        let output = temp_dir.path().join("out.txt");
        fs::write(&input, "Bonjour. Ça va?\n").unwrap();

        let args = args(vec![input.display().to_string()], output.clone(), OutputFormat::Text);
        args.execute().unwrap();

        assert_eq!(fs::read_to_string(output).unwrap(), "Bonjour .\n\nÇa va ?\n");
    }

    #[test]
    fn test_parallel_matches_sequential_order() {
        let temp_dir = TempDir::new().unwrap();
        let mut inputs = Vec::new();
        for (i, text) in ["Un. Deux.", "Trois! Quatre?", "Cinq (six. sept)."]
            .iter()
            .enumerate()
        {
            let path = temp_dir.path().join(format!("{i}.txt"));
            fs::write(&path, text).unwrap();
            inputs.push(path.display().to_string());
        }

        let sequential_out = temp_dir.path().join("seq.json");
        args(inputs.clone(), sequential_out.clone(), OutputFormat::Json)
            .execute()
            .unwrap();

        let parallel_out = temp_dir.path().join("par.json");
        let mut parallel = args(inputs, parallel_out.clone(), OutputFormat::Json);
        parallel.parallel = true;
        parallel.threads = Some(2);
        parallel.execute().unwrap();

        let sequential = fs::read_to_string(sequential_out).unwrap();
        assert_eq!(sequential, fs::read_to_string(parallel_out).unwrap());

        let value: serde_json::Value = serde_json::from_str(&sequential).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 5);
    }

    #[test]
    fn test_missing_input() {
        let temp_dir = TempDir::new().unwrap();
        let args = args(
            vec!["/nonexistent/*.txt".to_string()],
            temp_dir.path().join("out.txt"),
            OutputFormat::Text,
        );
        assert!(args.execute().is_err());
    }

    #[test]
    fn test_empty_line_is_never_an_error_from_files() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("in.txt");
        let output = temp_dir.path().join("out.txt");
        fs::write(&input, "\n\n   \nFin.\n\n").unwrap();

        args(vec![input.display().to_string()], output.clone(), OutputFormat::Vertical)
            .execute()
            .unwrap();
        assert_eq!(fs::read_to_string(output).unwrap(), "Fin\n.\n");
    }
}
