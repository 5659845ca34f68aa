//! Request building: site record in, normalized check request out.

use std::path::Path;

use crate::types::{CheckRequest, SiteError, SiteRecord, SiteSource};

impl CheckRequest {
    /// Build a request from the current site source.
    ///
    /// Returns `None` when no record is available; the caller must then skip
    /// the network call entirely.
    pub fn from_source(source: &SiteSource) -> Option<Self> {
        match source {
            SiteSource::Available(record) => Some(Self::from_record(record)),
            SiteSource::Unavailable => None,
        }
    }

    /// Normalize a record. `lat`/`lng` pass through unvalidated.
    pub fn from_record(record: &SiteRecord) -> Self {
        Self {
            address: non_blank(record.address.as_deref()),
            lat: record.lat,
            lng: record.lng,
            pnu: non_blank(record.pnu.as_deref()),
            capacity_kw: record
                .ac_kw
                .or(record.capacity_kw)
                .or(record.ac_kw_camel)
                .or(record.capacity_kw_camel),
            slope_deg: record.slope_deg.or(record.slope_deg_camel),
            sun_hours: record.sun_hours.or(record.sun_hours_camel),
            dist_road_m: record.dist_road_m,
            dist_residential_m: record.dist_residential_m,
            area_m2: record.area_m2.or(record.area_m2_camel),
        }
    }
}

fn non_blank(text: Option<&str>) -> Option<String> {
    text.filter(|s| !s.trim().is_empty()).map(str::to_string)
}

impl SiteSource {
    /// Parse a site record document. A top-level `null` means no record.
    pub fn from_json_str(json: &str) -> Result<Self, SiteError> {
        let record: Option<SiteRecord> = serde_json::from_str(json)?;
        Ok(record.into())
    }

    /// Read a site record document from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SiteError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}
