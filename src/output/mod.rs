//! Report writers for a computed [`TcoResult`].

pub mod json;
pub mod terminal;

pub use json::JsonWriter;
pub use terminal::TerminalWriter;

use crate::tco::TcoResult;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Terminal,
}

pub trait OutputWriter {
    fn write_result(&mut self, result: &TcoResult) -> anyhow::Result<()>;
}

pub fn create_writer<'a, W: Write + 'a>(format: OutputFormat, writer: W) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
    }
}
