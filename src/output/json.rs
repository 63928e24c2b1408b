use crate::output::OutputWriter;
use crate::tco::TcoResult;
use std::io::Write;

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_result(&mut self, result: &TcoResult) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(result)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}
