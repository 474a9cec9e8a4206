//! Tests for the plotting script hand-off

#[cfg(test)]
mod tests {
    use fractal2d::FractalError;
    use fractal2d::io::postprocess::PlotCommand;
    use std::path::{Path, PathBuf};

    // Tests the default invocation mirrors the documented command line
    #[test]
    fn test_default_command() {
        let plot = PlotCommand::new(Path::new("fern_output.txt"), Path::new("fern.png"));

        assert_eq!(plot.program, "python");
        assert_eq!(plot.script, PathBuf::from("plot_fractal.py"));
        assert_eq!(
            plot.display(),
            "python plot_fractal.py fern_output.txt fern.png"
        );
    }

    // Tests guidance offers both Python and MATLAB routes
    #[test]
    fn test_guidance_lines() {
        let plot = PlotCommand::new(Path::new("fern_output.txt"), Path::new("fern.png"));
        let guidance = plot.guidance();

        assert_eq!(guidance.len(), 3);
        assert!(guidance.iter().any(|line| line.starts_with("Python: python")));
        assert!(
            guidance
                .iter()
                .any(|line| line == "MATLAB: plot_fractal fern_output.txt fern.png")
        );
    }

    // Tests a missing interpreter is a post-processing error
    #[test]
    fn test_run_missing_program() {
        let plot = PlotCommand {
            program: "fractal2d-no-such-interpreter".to_string(),
            ..PlotCommand::new(Path::new("a_output.txt"), Path::new("a.png"))
        };

        match plot.run() {
            Err(FractalError::PostProcess { command, .. }) => {
                assert!(command.starts_with("fractal2d-no-such-interpreter"));
            }
            other => unreachable!("expected PostProcess, got {other:?}"),
        }
    }
}
