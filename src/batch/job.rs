use std::fmt;
use std::path::{Path, PathBuf};

use crate::utils::error::{OmdError, OmdResult};
use crate::utils::path::relative_to;

/// Where a MIDI file sits relative to the origin root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Depth {
    /// Directly inside the origin root
    TopLevel,
    /// Inside one of the origin's subdirectories
    Nested,
}

impl Depth {
    /// Depth as reported by a directory walk rooted at the origin
    pub fn from_walk_depth(depth: usize) -> Self {
        if depth <= 1 {
            Depth::TopLevel
        } else {
            Depth::Nested
        }
    }
}

/// One MIDI file to convert and the places its output passes through
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    /// The MIDI file handed to the converter
    pub input: PathBuf,
    /// The file the converter is expected to write next to the input
    pub output: PathBuf,
    /// Final location of the output inside the destination tree
    pub destination: PathBuf,
    pub depth: Depth,
}

impl Job {
    pub fn new(
        input: PathBuf,
        origin: &Path,
        destination_root: &Path,
        output_extension: &str,
        depth: Depth,
    ) -> OmdResult<Self> {
        let output = output_path_for(&input, output_extension);
        let relative = relative_to(&output, origin).ok_or_else(|| {
            OmdError::Config(format!(
                "{} is not inside the source directory {}",
                output.display(),
                origin.display()
            ))
        })?;

        Ok(Job {
            destination: destination_root.join(relative),
            input,
            output,
            depth,
        })
    }
}

/// Path the converter writes for `input`: same name, extension replaced
pub fn output_path_for(input: &Path, output_extension: &str) -> PathBuf {
    input.with_extension(output_extension)
}

/// Counts of files converted and moved during one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub top_level: usize,
    pub nested: usize,
}

impl BatchSummary {
    pub fn record(&mut self, depth: Depth) {
        match depth {
            Depth::TopLevel => self.top_level += 1,
            Depth::Nested => self.nested += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.top_level + self.nested
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Converted {} midi files to .omd files successfully.", self.total())
    }
}
