//! JSON lines output
//!
//! One object per visit or error, then a final summary object.

use std::io::{self, Write};

use serde::Serialize;

use crate::error::WalkError;
use crate::walk::{StreamingOutput, VisitRecord, WalkSummary};

#[derive(Serialize)]
struct ErrorRecord<'a> {
    path: &'a str,
    error: String,
}

#[derive(Serialize)]
struct SummaryRecord<'a> {
    summary: &'a WalkSummary,
}

/// Writes each visit as a JSON object on its own line.
pub struct JsonFormatter<W: Write> {
    out: W,
}

impl JsonFormatter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> JsonFormatter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line<T: Serialize>(&mut self, value: &T) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, value).map_err(io::Error::other)?;
        writeln!(self.out)
    }
}

impl<W: Write> StreamingOutput for JsonFormatter<W> {
    fn output_visit(&mut self, visit: &VisitRecord<'_>) -> io::Result<()> {
        self.write_line(visit)
    }

    fn output_error(&mut self, path: &str, err: &WalkError) -> io::Result<()> {
        self.write_line(&ErrorRecord {
            path,
            error: err.to_string(),
        })
    }

    fn finish(&mut self, summary: &WalkSummary) -> io::Result<()> {
        self.write_line(&SummaryRecord { summary })?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::FileType;

    #[test]
    fn test_json_lines() {
        let mut formatter = JsonFormatter::new(Vec::new());
        formatter
            .output_visit(&VisitRecord {
                path: "src/lib.rs",
                name: "lib.rs",
                file_type: Some(FileType::File),
                depth: 2,
            })
            .unwrap();
        formatter
            .output_error(
                "src",
                &WalkError::Injected {
                    path: "src".to_string(),
                    message: "denied".to_string(),
                },
            )
            .unwrap();
        formatter
            .finish(&WalkSummary {
                dirs: 1,
                files: 1,
                errors: 1,
                root_failed: false,
            })
            .unwrap();

        let text = String::from_utf8(formatter.into_inner()).unwrap();
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0]["path"], "src/lib.rs");
        assert_eq!(lines[0]["type"], "file");
        assert_eq!(lines[0]["depth"], 2);
        assert_eq!(lines[1]["error"], "read dir src: denied");
        assert_eq!(lines[2]["summary"]["errors"], 1);
    }
}
