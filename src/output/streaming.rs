//! Streaming output formatter
//!
//! `StreamingFormatter` prints one path per line as visits arrive, with
//! errors going to a separate stream.

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::error::WalkError;
use crate::fs::FileType;
use crate::walk::{StreamingOutput, VisitRecord, WalkSummary};

use super::config::OutputConfig;

/// Plain path-per-line formatter.
pub struct StreamingFormatter<W: WriteColor = StandardStream> {
    config: OutputConfig,
    stdout: W,
    stderr: W,
}

impl StreamingFormatter<StandardStream> {
    pub fn new(config: OutputConfig) -> Self {
        let choice = if config.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self {
            config,
            stdout: StandardStream::stdout(choice),
            stderr: StandardStream::stderr(choice),
        }
    }
}

impl<W: WriteColor> StreamingFormatter<W> {
    pub fn with_writers(config: OutputConfig, stdout: W, stderr: W) -> Self {
        Self {
            config,
            stdout,
            stderr,
        }
    }

    pub fn into_writers(self) -> (W, W) {
        (self.stdout, self.stderr)
    }
}

fn color_for(file_type: Option<FileType>) -> Option<ColorSpec> {
    let mut spec = ColorSpec::new();
    match file_type? {
        FileType::Dir => spec.set_fg(Some(Color::Blue)).set_bold(true),
        FileType::Symlink => spec.set_fg(Some(Color::Cyan)),
        FileType::Other => spec.set_fg(Some(Color::Yellow)),
        FileType::File => return None,
    };
    Some(spec)
}

impl<W: WriteColor> StreamingOutput for StreamingFormatter<W> {
    fn output_visit(&mut self, visit: &VisitRecord<'_>) -> io::Result<()> {
        if self.config.use_color {
            if let Some(spec) = color_for(visit.file_type) {
                self.stdout.set_color(&spec)?;
            }
        }
        write!(self.stdout, "{}", visit.path)?;
        self.stdout.reset()?;
        writeln!(self.stdout)
    }

    fn output_error(&mut self, path: &str, err: &WalkError) -> io::Result<()> {
        if self.config.use_color {
            self.stderr
                .set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
        }
        write!(self.stderr, "stepwalk:")?;
        self.stderr.reset()?;
        match err {
            WalkError::Stat { source, .. } => {
                writeln!(self.stderr, " cannot access '{}': {}", path, source)
            }
            WalkError::InvalidPath { .. } => {
                writeln!(self.stderr, " cannot access '{}': invalid path", path)
            }
            // the message already names the path
            _ => writeln!(self.stderr, " {}", err),
        }
    }

    fn finish(&mut self, summary: &WalkSummary) -> io::Result<()> {
        if self.config.show_summary {
            writeln!(self.stdout)?;
            write!(
                self.stdout,
                "{} directories, {} files",
                summary.dirs, summary.files
            )?;
            if summary.errors > 0 {
                write!(self.stdout, ", {} errors", summary.errors)?;
            }
            writeln!(self.stdout)?;
        }
        self.stdout.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use termcolor::Buffer;

    fn formatter(config: OutputConfig) -> StreamingFormatter<Buffer> {
        StreamingFormatter::with_writers(config, Buffer::no_color(), Buffer::no_color())
    }

    #[test]
    fn test_paths_and_summary() {
        let mut f = formatter(OutputConfig {
            use_color: false,
            show_summary: true,
        });
        f.output_visit(&VisitRecord {
            path: ".",
            name: ".",
            file_type: Some(FileType::Dir),
            depth: 0,
        })
        .unwrap();
        f.output_visit(&VisitRecord {
            path: "a.txt",
            name: "a.txt",
            file_type: Some(FileType::File),
            depth: 1,
        })
        .unwrap();
        f.output_error(
            "sub",
            &WalkError::Injected {
                path: "sub".to_string(),
                message: "boom".to_string(),
            },
        )
        .unwrap();
        f.finish(&WalkSummary {
            dirs: 0,
            files: 1,
            errors: 1,
            root_failed: false,
        })
        .unwrap();

        let (out, err) = f.into_writers();
        let out = String::from_utf8(out.into_inner()).unwrap();
        let err = String::from_utf8(err.into_inner()).unwrap();
        assert_eq!(out, ".\na.txt\n\n0 directories, 1 files, 1 errors\n");
        assert_eq!(err, "stepwalk: read dir sub: boom\n");
    }

    #[test]
    fn test_root_failure_names_path_once() {
        let mut f = formatter(OutputConfig::default());
        let err = WalkError::stat(
            "nope",
            io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        );
        f.output_error("nope", &err).unwrap();
        let (_, stderr) = f.into_writers();
        let stderr = String::from_utf8(stderr.into_inner()).unwrap();
        assert_eq!(stderr, "stepwalk: cannot access 'nope': No such file or directory\n");
    }

    #[test]
    fn test_no_summary() {
        let mut f = formatter(OutputConfig {
            use_color: false,
            show_summary: false,
        });
        f.finish(&WalkSummary::default()).unwrap();
        let (out, _) = f.into_writers();
        assert!(out.into_inner().is_empty());
    }

    #[test]
    fn test_color_only_for_special_types() {
        assert!(color_for(Some(FileType::File)).is_none());
        assert!(color_for(None).is_none());
        assert!(color_for(Some(FileType::Dir)).is_some());
    }
}
