use std::env;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use log::debug;

use crate::utils::error::{OmdError, OmdResult};

/// Something that turns one MIDI file into an output file next to it
pub trait Converter {
    /// Name used in log messages
    fn name(&self) -> String;

    /// Convert `input`, writing the result alongside it
    fn convert(&self, input: &Path) -> OmdResult<()>;
}

/// Converter backed by an external executable such as `omdconvert.exe`
pub struct ExternalConverter {
    program: PathBuf,
}

impl ExternalConverter {
    pub fn new<P: Into<PathBuf>>(program: P) -> Self {
        ExternalConverter {
            program: resolve_program(program.into()),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl Converter for ExternalConverter {
    fn name(&self) -> String {
        self.program.display().to_string()
    }

    fn convert(&self, input: &Path) -> OmdResult<()> {
        let absolute_path = std::path::absolute(input)?;
        debug!("Running {} {}", self.program.display(), absolute_path.display());

        let status = Command::new(&self.program)
            .arg(&absolute_path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .status()
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => OmdError::MissingConverter {
                    program: self.program.clone(),
                },
                _ => OmdError::Launch {
                    program: self.program.clone(),
                    source: e,
                },
            })?;

        if !status.success() {
            return Err(OmdError::ConversionFailed {
                program: self.program.clone(),
                input: absolute_path,
                code: status.code(),
            });
        }

        Ok(())
    }
}

/// Prefer a bare program name found in the working directory over `PATH`
fn resolve_program(program: PathBuf) -> PathBuf {
    match env::current_dir() {
        Ok(cwd) => resolve_program_in(program, &cwd),
        Err(_) => program,
    }
}

fn resolve_program_in(program: PathBuf, dir: &Path) -> PathBuf {
    let is_bare = program.components().count() == 1 && !program.is_absolute();
    if is_bare && dir.join(&program).is_file() {
        dir.join(program)
    } else {
        program
    }
}
