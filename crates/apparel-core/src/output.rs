//! JSON output for describe results.

use serde::Serialize;
use std::io::{self, Write};

use crate::types::ApparelResult;

/// Writes results as JSON, one document per call.
pub struct OutputWriter<W: Write> {
    writer: W,
    pretty: bool,
}

impl<W: Write> OutputWriter<W> {
    pub fn new(writer: W, pretty: bool) -> Self {
        Self { writer, pretty }
    }

    /// Write a single item followed by a newline.
    pub fn write<T: Serialize>(&mut self, item: &T) -> io::Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, item).map_err(io::Error::other)?;
        } else {
            serde_json::to_writer(&mut self.writer, item).map_err(io::Error::other)?;
        }
        writeln!(self.writer)
    }

    /// Write a describe outcome; a failed call is written as `null`.
    pub fn write_result(&mut self, result: Option<&ApparelResult>) -> io::Result<()> {
        self.write(&result)
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    /// Consume the writer and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> ApparelResult {
        serde_json::from_value(json!({ "category": "Bottoms", "main_color": "Blue" })).unwrap()
    }

    #[test]
    fn test_write_compact() {
        let mut writer = OutputWriter::new(Vec::new(), false);
        writer.write_result(Some(&sample())).unwrap();

        let output = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(output, "{\"category\":\"Bottoms\",\"main_color\":\"Blue\"}\n");
    }

    #[test]
    fn test_write_pretty_keeps_field_order() {
        let mut writer = OutputWriter::new(Vec::new(), true);
        writer.write_result(Some(&sample())).unwrap();

        let output = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(
            output,
            "{\n  \"category\": \"Bottoms\",\n  \"main_color\": \"Blue\"\n}\n"
        );
    }

    #[test]
    fn test_failed_call_writes_null() {
        let mut writer = OutputWriter::new(Vec::new(), true);
        writer.write_result(None).unwrap();
        assert_eq!(String::from_utf8(writer.into_inner()).unwrap(), "null\n");
    }
}
