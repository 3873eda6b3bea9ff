use crate::sequence::SequenceRecord;
use orthomap_core::OrthomapError;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write records as two-line FASTA (`>id` then the sequence on one line)
pub fn write_fasta<P: AsRef<Path>>(path: P, records: &[SequenceRecord]) -> Result<(), OrthomapError> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    write_fasta_to_writer(&mut writer, records)?;
    writer.flush()?;
    Ok(())
}

pub fn write_fasta_to_writer<W: Write>(
    writer: &mut W,
    records: &[SequenceRecord],
) -> Result<(), OrthomapError> {
    for record in records {
        if record.id.chars().any(char::is_whitespace) {
            // The aligner truncates ids at the first whitespace
            return Err(OrthomapError::InvalidInput(format!(
                "sequence id '{}' contains whitespace",
                record.id
            )));
        }
        writeln!(writer, "{}", record.header())?;
        writeln!(writer, "{}", record.sequence)?;
    }
    Ok(())
}
