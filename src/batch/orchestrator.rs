use std::collections::HashMap;
use std::path::{Path, PathBuf};
use glob::{MatchOptions, Pattern};
use log::{debug, error, info};
use walkdir::WalkDir;

use crate::batch::job::{BatchSummary, Depth, Job};
use crate::config::Config;
use crate::converter::Converter;
use crate::directory;
use crate::utils::error::{OmdError, OmdResult};
use crate::utils::fs::move_file;
use crate::utils::path::{clean_path, normalize};

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: false,
    require_literal_separator: false,
    require_literal_leading_dot: true,
};

/// Clear the destination, mirror the origin's subdirectories, then convert every MIDI file
pub fn convert_all(config: &Config, converter: &dyn Converter) -> OmdResult<BatchSummary> {
    directory::clear_destination(&config.destination)?;

    let created = directory::mirror_subdirectories(&config.source, &config.destination)?;
    info!("Created {} output directories in {}", created, normalize(&config.destination));

    run(config, converter)
}

/// Convert and relocate every MIDI file under the origin.
///
/// The first failure aborts the batch.
pub fn run(config: &Config, converter: &dyn Converter) -> OmdResult<BatchSummary> {
    let jobs = collect_jobs(config)?;
    info!(
        "Found {} midi files in {}, converting with {}",
        jobs.len(),
        normalize(&config.source),
        converter.name()
    );

    let mut summary = BatchSummary::default();
    for job in &jobs {
        if let Err(e) = process_job(converter, job) {
            error!(
                "Aborting after {} of {} midi files were converted",
                summary.total(),
                jobs.len()
            );
            return Err(e);
        }
        summary.record(job.depth);
    }

    info!(
        "Converted {} top-level and {} nested midi files",
        summary.top_level, summary.nested
    );
    Ok(summary)
}

/// Enumerate the origin once, in file name order, and build a job for each MIDI file
pub fn collect_jobs(config: &Config) -> OmdResult<Vec<Job>> {
    let patterns = config
        .extensions
        .iter()
        .map(|ext| Pattern::new(&format!("*.{}", Pattern::escape(ext))))
        .collect::<Result<Vec<_>, _>>()?;

    let destination = clean_path(std::path::absolute(&config.destination)?);
    let walker = WalkDir::new(&config.source)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !(entry.file_type().is_dir() && is_same_dir(entry.path(), &destination)));

    let mut jobs: Vec<Job> = Vec::new();
    let mut claimed: HashMap<PathBuf, PathBuf> = HashMap::new();
    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let matched = {
            let name = entry.file_name().to_string_lossy();
            patterns.iter().any(|pattern| pattern.matches_with(&name, MATCH_OPTIONS))
        };
        if !matched {
            continue;
        }

        let depth = Depth::from_walk_depth(entry.depth());
        let job = Job::new(
            entry.into_path(),
            &config.source,
            &config.destination,
            &config.output_extension,
            depth,
        )?;

        // song.mid and song.midi would both produce song.omd
        if let Some(first) = claimed.get(&job.output) {
            return Err(OmdError::Config(format!(
                "{} and {} would both be converted to {}",
                first.display(),
                job.input.display(),
                job.output.display()
            )));
        }
        claimed.insert(job.output.clone(), job.input.clone());
        jobs.push(job);
    }

    Ok(jobs)
}

fn process_job(converter: &dyn Converter, job: &Job) -> OmdResult<()> {
    debug!("Converting .mid file '{}'...", normalize(&job.input));
    converter.convert(&job.input)?;

    if !job.output.is_file() {
        return Err(OmdError::OutputMissing {
            input: job.input.clone(),
            expected: job.output.clone(),
        });
    }

    debug!("Moving generated .omd file '{}'...", normalize(&job.output));
    move_file(&job.output, &job.destination)
}

fn is_same_dir(path: &Path, other: &Path) -> bool {
    std::path::absolute(path).map_or(false, |abs| clean_path(abs) == other)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::ffi::OsStr;
    use std::fs;
    use tempfile::{tempdir, TempDir};

    use crate::converter::ExternalConverter;

    /// Writes `<input stem>.omd` next to the input, like omdconvert does
    #[derive(Default)]
    struct FakeConverter {
        calls: RefCell<Vec<PathBuf>>,
        skip_output_for: Option<&'static str>,
    }

    impl Converter for FakeConverter {
        fn name(&self) -> String {
            "fake".to_string()
        }

        fn convert(&self, input: &Path) -> OmdResult<()> {
            self.calls.borrow_mut().push(input.to_path_buf());
            let skip = self
                .skip_output_for
                .map_or(false, |name| input.file_name() == Some(OsStr::new(name)));
            if !skip {
                fs::write(input.with_extension("omd"), b"omd")?;
            }
            Ok(())
        }
    }

    fn workspace(files: &[&str]) -> (TempDir, Config) {
        let dir = tempdir().unwrap();
        let source = dir.path().join("midi");
        fs::create_dir(&source).unwrap();
        for file in files {
            let path = source.join(file);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, b"MThd").unwrap();
        }

        let config = Config {
            source,
            destination: dir.path().join("omd"),
            ..Config::default()
        };
        (dir, config)
    }

    #[test]
    fn test_one_file_per_subdirectory() {
        let (_dir, config) = workspace(&["x/out.mid", "y/out.mid"]);
        let converter = FakeConverter::default();

        let summary = convert_all(&config, &converter).unwrap();

        assert_eq!(summary.total(), 2);
        assert_eq!(summary.nested, 2);
        assert!(config.destination.join("x").join("out.omd").is_file());
        assert!(config.destination.join("y").join("out.omd").is_file());
        assert!(!config.source.join("x").join("out.omd").exists());
    }

    #[test]
    fn test_top_level_and_nested_files_in_one_pass() {
        let (_dir, config) = workspace(&["intro.mid", "a/b.mid", "a/notes.txt", "c.midi"]);
        let converter = FakeConverter::default();

        let summary = convert_all(&config, &converter).unwrap();

        assert_eq!(summary.top_level, 2);
        assert_eq!(summary.nested, 1);
        assert_eq!(converter.calls.borrow().len(), 3);
        assert!(config.destination.join("intro.omd").is_file());
        assert!(config.destination.join("c.omd").is_file());
        assert!(config.destination.join("a").join("b.omd").is_file());
        assert!(!config.destination.join("a").join("notes.txt").exists());
    }

    #[test]
    fn test_extensions_match_case_insensitively() {
        let (_dir, config) = workspace(&["LOUD.MID"]);
        let jobs = collect_jobs(&config).unwrap();

        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].depth, Depth::TopLevel);
        assert_eq!(jobs[0].destination, config.destination.join("LOUD.omd"));
    }

    #[test]
    fn test_colliding_outputs_are_rejected_before_conversion() {
        let (_dir, config) = workspace(&["x/song.mid", "x/song.midi"]);
        let converter = FakeConverter::default();

        let err = convert_all(&config, &converter).unwrap_err();

        assert!(matches!(err, OmdError::Config(_)));
        assert!(err.to_string().contains("song.omd"));
        assert!(converter.calls.borrow().is_empty());
        assert_eq!(fs::read_dir(config.destination.join("x")).unwrap().count(), 0);
    }

    #[test]
    fn test_same_stem_in_different_directories_is_fine() {
        let (_dir, config) = workspace(&["x/song.mid", "y/song.midi"]);

        let summary = convert_all(&config, &FakeConverter::default()).unwrap();

        assert_eq!(summary.total(), 2);
        assert!(config.destination.join("x").join("song.omd").is_file());
        assert!(config.destination.join("y").join("song.omd").is_file());
    }

    #[test]
    fn test_stemless_names_are_not_midi_files() {
        let (_dir, config) = workspace(&[".mid", "x/.midi", "x/real.mid"]);

        let jobs = collect_jobs(&config).unwrap();

        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].input, config.source.join("x").join("real.mid"));
    }

    #[test]
    fn test_stale_output_is_cleared_first() {
        let (_dir, config) = workspace(&["x/new.mid"]);
        fs::create_dir_all(config.destination.join("stale")).unwrap();
        fs::write(config.destination.join("old.omd"), b"old").unwrap();

        convert_all(&config, &FakeConverter::default()).unwrap();

        assert!(!config.destination.join("old.omd").exists());
        assert!(!config.destination.join("stale").exists());
        assert!(config.destination.join("x").join("new.omd").is_file());
    }

    #[test]
    fn test_two_levels_deep_fails_to_relocate() {
        let (_dir, config) = workspace(&["a/b/deep.mid"]);

        let err = convert_all(&config, &FakeConverter::default()).unwrap_err();

        assert!(matches!(err, OmdError::Relocate { .. }));
        assert!(config.destination.join("a").is_dir());
        assert!(!config.destination.join("a").join("b").exists());
    }

    #[test]
    fn test_missing_output_is_reported() {
        let (_dir, config) = workspace(&["a.mid", "b.mid"]);
        let converter = FakeConverter {
            skip_output_for: Some("b.mid"),
            ..Default::default()
        };

        let err = convert_all(&config, &converter).unwrap_err();

        assert!(matches!(err, OmdError::OutputMissing { .. }));
        assert!(config.destination.join("a.omd").is_file());
    }

    #[test]
    fn test_missing_converter_aborts_before_relocation() {
        let (dir, mut config) = workspace(&["x/song.mid"]);
        config.converter = dir.path().join("bin").join("omdconvert.exe");
        let converter = ExternalConverter::new(config.converter.clone());

        let err = convert_all(&config, &converter).unwrap_err();

        assert!(matches!(err, OmdError::MissingConverter { .. }));
        assert_eq!(fs::read_dir(config.destination.join("x")).unwrap().count(), 0);
    }

    #[test]
    fn test_destination_inside_origin_is_not_scanned() {
        let (_dir, mut config) = workspace(&["x/song.mid"]);
        config.destination = config.source.join("omd");
        fs::create_dir_all(config.destination.join("leftover")).unwrap();
        fs::write(config.destination.join("leftover").join("ghost.mid"), b"MThd").unwrap();

        let jobs = collect_jobs(&config).unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].input, config.source.join("x").join("song.mid"));

        let summary = convert_all(&config, &FakeConverter::default()).unwrap();

        assert_eq!(summary.total(), 1);
        assert!(config.destination.join("x").join("song.omd").is_file());
        assert!(!config.destination.join("omd").exists());
    }
}
