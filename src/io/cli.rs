//! Command-line interface for batch sample generation
//!
//! Accepts a single sample file or a directory of samples. Text (`.txt`),
//! JSON (`.json`), and PNG (`.png`) samples are supported; results land next
//! to their input with a suffix, in the input's own format.

use crate::generator::{PropagationResult, TileMapGenerator};
use crate::heuristic::{
    Heuristic, MinEntropyBucketHeuristic, MinEntropyHeapHeuristic, MinEntropyHeuristic,
    ScanlineHeuristic,
};
use crate::io::configuration::{
    DEFAULT_MAX_ATTEMPTS, DEFAULT_OUTPUT_HEIGHT, DEFAULT_OUTPUT_WIDTH, DEFAULT_PATTERN_SIZE,
    DEFAULT_SEED, OUTPUT_SUFFIX, UNKNOWN_CHAR,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{export_png, load_png_sample};
use crate::io::progress::ProgressManager;
use crate::io::sample::{load_json_sample, load_text_sample, save_json_grid, save_text_grid};
use crate::model::OverlappingModel;
use crate::propagator::{
    Ac2001Propagator, Ac3Propagator, Ac4Propagator, Propagator, RecursivePropagator,
    SimplePropagator,
};
use crate::spatial::mapped::{MapData, MappedGrid};
use clap::{Parser, ValueEnum};
use std::hash::Hash;
use std::path::{Path, PathBuf};

/// Cell-selection strategy options
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum HeuristicChoice {
    /// First undecided cell in row-major order
    Scanline,
    /// Full-scan minimum Shannon entropy
    Entropy,
    /// Priority-queue minimum entropy
    Heap,
    /// Bucketed minimum entropy
    Bucket,
}

impl HeuristicChoice {
    /// Construct the selected heuristic
    pub fn build(self) -> Box<dyn Heuristic> {
        match self {
            Self::Scanline => Box::new(ScanlineHeuristic::new()),
            Self::Entropy => Box::new(MinEntropyHeuristic::new()),
            Self::Heap => Box::new(MinEntropyHeapHeuristic::new()),
            Self::Bucket => Box::new(MinEntropyBucketHeuristic::new()),
        }
    }
}

/// Constraint propagation strategy options
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PropagatorChoice {
    /// Depth-bounded depth-first revision
    Recursive,
    /// Worklist with full support rescans
    Ac3,
    /// Incremental support counters
    Ac4,
    /// Worklist with resumable witnesses
    Ac2001,
    /// Bounded full-grid sweeps
    Simple,
}

impl PropagatorChoice {
    /// Construct the selected propagator
    pub fn build(self) -> Box<dyn Propagator> {
        match self {
            Self::Recursive => Box::new(RecursivePropagator::default()),
            Self::Ac3 => Box::new(Ac3Propagator::new()),
            Self::Ac4 => Box::new(Ac4Propagator::new()),
            Self::Ac2001 => Box::new(Ac2001Propagator::new()),
            Self::Simple => Box::new(SimplePropagator::default()),
        }
    }
}

#[derive(Parser)]
#[command(name = "tilewave")]
#[command(
    author,
    version,
    about = "Generate tile maps from samples with wave function collapse"
)]
/// Command-line arguments for the generation tool
pub struct Cli {
    /// Input sample file (txt, json, or png) or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Output width in cells
    #[arg(short = 'w', long, default_value_t = DEFAULT_OUTPUT_WIDTH)]
    pub width: usize,

    /// Output height in cells
    #[arg(short = 'H', long, default_value_t = DEFAULT_OUTPUT_HEIGHT)]
    pub height: usize,

    /// Pattern window side length
    #[arg(short = 'n', long, default_value_t = DEFAULT_PATTERN_SIZE)]
    pub pattern_size: usize,

    /// Treat the sample as wrapping at its edges
    #[arg(short = 'p', long)]
    pub periodic_input: bool,

    /// Include rotated and reflected pattern variants
    #[arg(short = 'y', long)]
    pub symmetry: bool,

    /// Cell-selection heuristic
    #[arg(long, value_enum, default_value_t = HeuristicChoice::Heap)]
    pub heuristic: HeuristicChoice,

    /// Constraint propagator
    #[arg(long, value_enum, default_value_t = PropagatorChoice::Ac4)]
    pub propagator: PropagatorChoice,

    /// Retry cap for contradicted attempts (0 retries forever)
    #[arg(short, long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub attempts: usize,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Retry cap as an option, with zero meaning unbounded
    pub const fn attempt_cap(&self) -> Option<usize> {
        if self.attempts == 0 {
            None
        } else {
            Some(self.attempts)
        }
    }
}

const SUPPORTED_EXTENSIONS: [&str; 3] = ["txt", "json", "png"];

/// Orchestrates batch processing of sample files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation or file processing fails
    pub fn process(&mut self) -> Result<()> {
        if self.cli.width == 0 || self.cli.height == 0 {
            return Err(invalid_parameter(
                "width/height",
                &format!("{}x{}", self.cli.width, self.cli.height),
                &"output dimensions must be at least 1x1",
            ));
        }

        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for file in &files {
            if let Some(ref pm) = self.progress_manager {
                pm.start_file(file);
            }
            self.process_file(file)?;
            if let Some(ref pm) = self.progress_manager {
                pm.complete_file();
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if Self::is_supported(&self.cli.target) {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(invalid_parameter(
                    "target",
                    &self.cli.target.display(),
                    &"must be a txt, json, or png sample",
                ))
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target)? {
                let path = entry?.path();
                if Self::is_supported(&path) && self.should_process_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &self.cli.target.display(),
                &"must be a sample file or directory",
            ))
        }
    }

    fn is_supported(path: &Path) -> bool {
        path.extension()
            .and_then(|s| s.to_str())
            .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext))
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::output_path(input_path);
        if output_path.exists() {
            // Allow print for user feedback for progress messages
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    /// Run generation for one sample; `None` means every attempt contradicted
    fn run<T: Clone + Eq + Hash>(&self, sample: MappedGrid<T>) -> Result<Option<Vec<T>>> {
        let model = Box::new(OverlappingModel::new(
            self.cli.pattern_size,
            self.cli.periodic_input,
            self.cli.symmetry,
        ));
        let mut generator = TileMapGenerator::new(
            sample,
            model,
            self.cli.heuristic.build(),
            self.cli.propagator.build(),
            self.cli.width,
            self.cli.height,
            self.cli.seed,
        );
        let result = generator.generate_until_collapsed(self.cli.attempt_cap())?;
        if result == PropagationResult::Collapsed {
            Ok(Some(generator.to_symbols()))
        } else {
            Ok(None)
        }
    }

    // Allow print for user feedback on exhausted attempts
    #[allow(clippy::print_stderr)]
    fn process_file(&mut self, input_path: &Path) -> Result<()> {
        let output_path = Self::output_path(input_path);
        let extension = input_path.extension().and_then(|s| s.to_str());

        let collapsed = match extension {
            Some("txt") => {
                let sample = load_text_sample(input_path)?;
                match self.run(sample)? {
                    Some(symbols) => {
                        save_text_grid(&output_path, &symbols, self.cli.width)?;
                        true
                    }
                    None => false,
                }
            }
            Some("json") => {
                let sample = load_json_sample(input_path)?;
                match self.run(sample)? {
                    Some(symbols) => {
                        let data = MapData {
                            grid: symbols,
                            width: self.cli.width,
                            height: self.cli.height,
                            unknown: UNKNOWN_CHAR,
                        };
                        save_json_grid(&output_path, &data)?;
                        true
                    }
                    None => false,
                }
            }
            _ => {
                let sample = load_png_sample(input_path)?;
                match self.run(sample)? {
                    Some(symbols) => {
                        export_png(&output_path, &symbols, self.cli.width, self.cli.height)?;
                        true
                    }
                    None => false,
                }
            }
        };

        if !collapsed && !self.cli.quiet {
            eprintln!(
                "No solution for {} within {} attempts (contradicted)",
                input_path.display(),
                self.cli.attempts
            );
        }

        Ok(())
    }

    fn output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let extension = input_path.extension().unwrap_or_default();
        let output_name = format!(
            "{}{}.{}",
            stem.to_string_lossy(),
            OUTPUT_SUFFIX,
            extension.to_string_lossy()
        );

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}
