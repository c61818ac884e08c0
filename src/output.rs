//! Weight output for the demo binary: one line per frame on a writer.

use serde::Serialize;
use std::io::{self, Write};

/// Line format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// `H:412 e:388 ...`
    Text,

    /// `{"frame":12,"weights":[412,388,...]}`
    JsonLines,
}

#[derive(Serialize)]
struct FrameRecord<'a> {
    frame: u64,
    text: &'a str,
    weights: &'a [u16],
}

/// Writes each frame's weights paired with the text's characters
pub struct WeightPrinter<W: Write> {
    writer: W,
    format: OutputFormat,
    chars: Vec<char>,
    text: String,
}

impl<W: Write> WeightPrinter<W> {
    pub fn new(writer: W, format: OutputFormat, text: &str) -> Self {
        Self {
            writer,
            format,
            chars: text.chars().collect(),
            text: text.to_string(),
        }
    }

    /// Number of characters weights are expected for
    pub fn char_count(&self) -> usize {
        self.chars.len()
    }

    pub fn write_frame(&mut self, frame: u64, weights: &[u16]) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => {
                let line = self
                    .chars
                    .iter()
                    .zip(weights)
                    .map(|(c, w)| format!("{}:{}", c, w))
                    .collect::<Vec<_>>()
                    .join(" ");
                writeln!(self.writer, "{}", line)
            }
            OutputFormat::JsonLines => {
                let record = FrameRecord {
                    frame,
                    text: &self.text,
                    weights,
                };
                serde_json::to_writer(&mut self.writer, &record)?;
                writeln!(self.writer)
            }
        }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
