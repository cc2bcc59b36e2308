use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use anyhow::{Result, Context};
use log::{debug, info};

use crate::error::SpecificityError;
use crate::profile::HostProfile;

/// Reads host profiles from a batch file: a JSON array of profile objects,
/// or one whitespace/tab/comma separated row of five counts per line
pub struct ProfileReader {
    path: PathBuf,
}

impl ProfileReader {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        ProfileReader {
            path: path.as_ref().to_owned(),
        }
    }

    fn is_json(&self) -> bool {
        self.path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false)
    }

    /// Read every profile in the file, in file order
    pub fn read_all(&self) -> Result<Vec<HostProfile>> {
        info!("Reading profiles from {}", self.path.display());

        let file = File::open(&self.path)
            .with_context(|| format!("Failed to open file: {}", self.path.display()))?;
        let reader = BufReader::new(file);

        let profiles: Vec<HostProfile> = if self.is_json() {
            serde_json::from_reader(reader)
                .with_context(|| format!("Failed to parse JSON profiles: {}", self.path.display()))?
        } else {
            let mut profiles = Vec::new();
            for (idx, line) in reader.lines().enumerate() {
                let line = line.with_context(|| format!("Failed to read {}", self.path.display()))?;
                if let Some(profile) = parse_record(idx + 1, &line)? {
                    profiles.push(profile);
                }
            }
            profiles
        };

        info!("Read {} profiles", profiles.len());
        Ok(profiles)
    }
}

/// Parse one delimited line. Blank lines, `#` comments and a header row
/// starting with `species` yield `None`.
pub fn parse_record(line_no: usize, line: &str) -> std::result::Result<Option<HostProfile>, SpecificityError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    if line
        .get(..7)
        .map(|head| head.eq_ignore_ascii_case("species"))
        .unwrap_or(false)
    {
        debug!("Skipping header on line {}", line_no);
        return Ok(None);
    }

    let fields: Vec<&str> = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|field| !field.is_empty())
        .collect();
    if fields.len() != 5 {
        return Err(SpecificityError::MalformedRecord {
            line: line_no,
            reason: format!("expected 5 counts, found {}", fields.len()),
        });
    }

    let mut counts = [0i64; 5];
    for (count, field) in counts.iter_mut().zip(&fields) {
        *count = field.parse().map_err(|_| SpecificityError::MalformedRecord {
            line: line_no,
            reason: format!("'{}' is not an integer", field),
        })?;
    }

    let [species, genera, families, orders, classes] = counts;
    Ok(Some(HostProfile::new(species, genera, families, orders, classes)))
}
