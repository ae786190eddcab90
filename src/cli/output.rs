//! Output formatting for CLI commands.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, WikiSearchArgs};
use crate::error::Result;
use crate::query::RankedHit;

/// Types that have a human-readable rendering.
pub trait HumanOutput {
    /// Write the human-readable form of `self`.
    fn write_human<W: Write>(&self, out: &mut W, verbosity: u8) -> Result<()>;
}

/// Result structure for search operations.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResults {
    pub query: String,
    pub total_hits: usize,
    pub duration_ms: u64,
    pub hits: Vec<RankedHit>,
}

/// A term and the number of documents containing it.
#[derive(Debug, Serialize, Deserialize)]
pub struct TermStats {
    pub term: String,
    pub doc_freq: usize,
}

/// Result structure for listing terms.
#[derive(Debug, Serialize, Deserialize)]
pub struct TermsList {
    pub terms: Vec<TermStats>,
}

/// One titled block of ranked hits.
#[derive(Debug, Serialize, Deserialize)]
pub struct ResultSection {
    pub title: String,
    pub hits: Vec<RankedHit>,
}

/// Result structure for the demo command.
#[derive(Debug, Serialize, Deserialize)]
pub struct DemoResults {
    pub sections: Vec<ResultSection>,
}

/// Output a result in the selected format.
pub fn output_result<T, W>(out: &mut W, result: &T, args: &WikiSearchArgs) -> Result<()>
where
    T: Serialize + HumanOutput,
    W: Write,
{
    match args.output_format {
        OutputFormat::Human => result.write_human(out, args.verbosity()),
        OutputFormat::Json => output_json(out, result, args.pretty),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize, W: Write>(out: &mut W, result: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    writeln!(out, "{json}")?;
    Ok(())
}

/// Write hits one per line as `id = score`.
fn write_hits<W: Write>(out: &mut W, hits: &[RankedHit]) -> Result<()> {
    for hit in hits {
        writeln!(out, "{} = {}", hit.id, hit.score)?;
    }
    Ok(())
}

impl HumanOutput for SearchResults {
    fn write_human<W: Write>(&self, out: &mut W, verbosity: u8) -> Result<()> {
        write_hits(out, &self.hits)?;

        if verbosity > 0 {
            writeln!(out)?;
            writeln!(
                out,
                "Showing {} of {} hits for {} ({}ms)",
                self.hits.len(),
                self.total_hits,
                self.query,
                self.duration_ms
            )?;
        }
        Ok(())
    }
}

impl HumanOutput for TermsList {
    fn write_human<W: Write>(&self, out: &mut W, verbosity: u8) -> Result<()> {
        for stats in &self.terms {
            writeln!(out, "{} ({} documents)", stats.term, stats.doc_freq)?;
        }

        if verbosity > 0 {
            writeln!(out)?;
            writeln!(out, "Total terms: {}", self.terms.len())?;
        }
        Ok(())
    }
}

impl HumanOutput for DemoResults {
    fn write_human<W: Write>(&self, out: &mut W, _verbosity: u8) -> Result<()> {
        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                writeln!(out)?;
            }
            writeln!(out, "=== {} ===", section.title)?;
            write_hits(out, &section.hits)?;
        }
        Ok(())
    }
}
