//! Result rendering for text and JSON output.

use std::io::{self, Write};

use longnumber_core::ConversionKind;
use serde::Serialize;

use crate::config::OutputFormat;
use crate::error::ApiError;

/// A successful conversion, as written in JSON mode.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Converted<'a> {
    pub input: &'a str,
    pub kind: ConversionKind,
    pub long_form: &'a str,
}

/// A failed conversion, as written in JSON mode.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Failed<'a> {
    pub input: &'a str,
    pub kind: ConversionKind,
    pub error: &'a ApiError,
}

/// Writes conversion results in one format.
pub struct Reporter<O, E> {
    format: OutputFormat,
    out: O,
    err: E,
}

impl<O: Write, E: Write> Reporter<O, E> {
    pub fn new(format: OutputFormat, out: O, err: E) -> Self {
        Reporter { format, out, err }
    }

    pub fn success(&mut self, input: &str, kind: ConversionKind, long_form: &str) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.out, "{}", long_form),
            OutputFormat::Json => {
                let record = Converted {
                    input,
                    kind,
                    long_form,
                };
                write_json_line(&mut self.out, &record)
            }
        }
    }

    pub fn failure(&mut self, input: &str, kind: ConversionKind, error: &ApiError) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.err, "error: {:?}: {}", input, error),
            OutputFormat::Json => {
                let record = Failed { input, kind, error };
                write_json_line(&mut self.out, &record)
            }
        }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()?;
        self.err.flush()
    }

    /// Returns the underlying writers.
    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}

fn write_json_line<W: Write, T: Serialize>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_text_output_splits_streams() {
        let mut reporter = Reporter::new(OutputFormat::Text, Vec::new(), Vec::new());
        reporter
            .success("20", ConversionKind::Number, "Twenty")
            .unwrap();
        let error = ApiError::bad_request(ErrorCode::ValidationError, "bad");
        reporter
            .failure("2x", ConversionKind::Number, &error)
            .unwrap();

        let (out, err) = reporter.into_inner();
        assert_eq!(String::from_utf8(out).unwrap(), "Twenty\n");
        assert_eq!(
            String::from_utf8(err).unwrap(),
            "error: \"2x\": [400 ValidationError] bad\n"
        );
    }

    #[test]
    fn test_json_output_lines() {
        let mut reporter = Reporter::new(OutputFormat::Json, Vec::new(), Vec::new());
        reporter
            .success("$1", ConversionKind::Currency, "One dollar")
            .unwrap();
        let error = ApiError::bad_request(ErrorCode::OutOfRange, "too big");
        reporter.failure("5", ConversionKind::Scale, &error).unwrap();

        let (out, err) = reporter.into_inner();
        let out = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines[0],
            r#"{"input":"$1","kind":"currency","longForm":"One dollar"}"#
        );
        assert_eq!(
            lines[1],
            r#"{"input":"5","kind":"scale","error":{"status":400,"code":"OUT_OF_RANGE","message":"too big"}}"#
        );
        assert!(err.is_empty());
    }
}
