use std::io::Write;
use anyhow::Result;

use crate::rank::SpecificityResult;

/// Layout of scored profiles on output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Write scored profiles. A single result from direct input is written bare;
/// batch output labels each text block and wraps JSON in an array.
pub fn write_results<W: Write + ?Sized>(
    writer: &mut W,
    results: &[SpecificityResult],
    format: OutputFormat,
    batch: bool,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for result in results {
                if batch {
                    writeln!(writer, "# {}", result.profile)?;
                }
                writeln!(writer, "rank:  {}", result.host_rank)?;
                writeln!(writer, "index: {:?}", result.host_index)?;
                if batch {
                    writeln!(writer)?;
                }
            }
        }
        OutputFormat::Tsv => {
            writeln!(writer, "species\tgenera\tfamilies\torders\tclasses\trank\tindex")?;
            for result in results {
                let p = &result.profile;
                writeln!(
                    writer,
                    "{}\t{}\t{}\t{}\t{}\t{}\t{:.4}",
                    p.species, p.genera, p.families, p.orders, p.classes,
                    result.host_rank,
                    result.host_index,
                )?;
            }
        }
        OutputFormat::Json => {
            match (batch, results) {
                (false, [single]) => serde_json::to_writer_pretty(&mut *writer, single)?,
                _ => serde_json::to_writer_pretty(&mut *writer, results)?,
            }
            writeln!(writer)?;
        }
    }

    Ok(())
}
