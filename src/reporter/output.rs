use anyhow::Result;
use std::fs::OpenOptions;
use std::io::Write;

pub struct OutputWriter;

impl OutputWriter {
    /// Append one result line. The file is opened and closed per call; no
    /// handle is held across requests.
    pub fn append(path: &str, line: &str) -> Result<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        writeln!(file, "{}", line)?;

        Ok(())
    }
}
