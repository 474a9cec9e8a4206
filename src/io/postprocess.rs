//! Hand-off to the external plotting and fitting script

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::io::configuration::{MATLAB_FUNCTION, PLOT_SCRIPT, PYTHON_PROGRAM};
use crate::io::error::{FractalError, Result};

/// Invocation of the plotting script on a results file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlotCommand {
    /// Interpreter to run
    pub program: String,
    /// Script passed to the interpreter
    pub script: PathBuf,
    /// Results file produced by the analysis
    pub results: PathBuf,
    /// Image name shown in the plot title
    pub image: PathBuf,
}

impl PlotCommand {
    /// Default `python plot_fractal.py <results> <image>` invocation
    pub fn new(results: &Path, image: &Path) -> Self {
        Self {
            program: PYTHON_PROGRAM.to_string(),
            script: PathBuf::from(PLOT_SCRIPT),
            results: results.to_path_buf(),
            image: image.to_path_buf(),
        }
    }

    /// Command line as a user would type it
    pub fn display(&self) -> String {
        format!(
            "{} {} {} {}",
            self.program,
            self.script.display(),
            self.results.display(),
            self.image.display()
        )
    }

    /// Instructions for running the plot by hand, one line per entry
    pub fn guidance(&self) -> Vec<String> {
        vec![
            format!("Use {PLOT_SCRIPT} or {MATLAB_FUNCTION}.m to fit and plot the results."),
            format!("Python: {}", self.display()),
            format!(
                "MATLAB: {MATLAB_FUNCTION} {} {}",
                self.results.display(),
                self.image.display()
            ),
        ]
    }

    /// Run the script and wait for it to finish
    ///
    /// # Errors
    ///
    /// Returns an error if the interpreter cannot be started or exits
    /// unsuccessfully
    pub fn run(&self) -> Result<()> {
        let status = Command::new(&self.program)
            .arg(&self.script)
            .arg(&self.results)
            .arg(&self.image)
            .status()
            .map_err(|e| FractalError::PostProcess {
                command: self.display(),
                reason: e.to_string(),
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(FractalError::PostProcess {
                command: self.display(),
                reason: format!("exited with {status}"),
            })
        }
    }
}
