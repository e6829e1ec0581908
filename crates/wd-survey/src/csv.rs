//! CSV-file candidate source.
//!
//! Reads survey exports with the header
//! `bssid,ssid,lat,lon,signal_dbm,encryption` — the column set a wardriving
//! logger dumps per observed network.  Rows failing validation abort the
//! read with their line number; whether to fix the file or drop the row is
//! the caller's decision, not this crate's.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use wd_core::{Coordinate, CoreError, TargetPoint};

use crate::{CandidateSource, SurveyError, SurveyQuery, SurveyResult};

/// One raw CSV row before validation.
#[derive(Debug, Deserialize)]
struct RawRecord {
    bssid: String,
    #[serde(default)]
    ssid: Option<String>,
    lat: f64,
    lon: f64,
    signal_dbm: i16,
    encryption: String,
}

impl RawRecord {
    fn validate(self) -> Result<TargetPoint, CoreError> {
        let bssid = self.bssid.parse()?;
        let pos = Coordinate::new(self.lat, self.lon)?;
        let encryption = self.encryption.parse()?;

        let mut point = TargetPoint::new(bssid, pos, self.signal_dbm, encryption);
        if let Some(ssid) = self.ssid.filter(|s| !s.is_empty()) {
            point = point.with_ssid(ssid);
        }
        Ok(point)
    }
}

/// Read and filter candidates from any CSV reader.
pub fn read_candidates<R: Read>(reader: R, query: &SurveyQuery) -> SurveyResult<Vec<TargetPoint>> {
    let mut rdr = ::csv::Reader::from_reader(reader);
    let mut out = Vec::new();
    for (i, row) in rdr.deserialize::<RawRecord>().enumerate() {
        let raw = row?;
        let point = raw
            .validate()
            .map_err(|source| SurveyError::Record { line: i + 2, source })?;
        if query.matches(&point) {
            out.push(point);
        }
    }
    Ok(out)
}

/// Reads candidates from a survey-export CSV file on disk.
pub struct CsvSource {
    path: PathBuf,
}

impl CsvSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CandidateSource for CsvSource {
    fn fetch(&self, query: &SurveyQuery) -> SurveyResult<Vec<TargetPoint>> {
        let file = File::open(&self.path)?;
        read_candidates(file, query)
    }
}
