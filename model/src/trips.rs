use anyhow::Result;
use geom::{Duration, LonLat, Time};
use serde::Deserialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TripID(pub usize);

/// Only used to pick a trail color; the core never interprets it further.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct Vendor(pub u8);

/// One vehicle trip: a path with a matching per-vertex timestamp sequence.
#[derive(Clone)]
pub struct Trip {
    pub id: TripID,
    path: Vec<LonLat>,
    timestamps: Vec<Time>,
    pub vendor: Vendor,
}

impl Trip {
    pub fn new(id: TripID, path: Vec<LonLat>, timestamps: Vec<Time>, vendor: Vendor) -> Result<Self> {
        if path.len() != timestamps.len() {
            bail!(
                "Trip has {} points but {} timestamps",
                path.len(),
                timestamps.len()
            );
        }
        if path.len() < 2 {
            bail!("Trip doesn't have at least 2 points");
        }
        for pair in timestamps.windows(2) {
            if pair[0] > pair[1] {
                bail!("Trip timestamps out-of-order: {} then {}", pair[0], pair[1]);
            }
        }
        Ok(Self {
            id,
            path,
            timestamps,
            vendor,
        })
    }

    pub fn path(&self) -> &[LonLat] {
        &self.path
    }

    pub fn timestamps(&self) -> &[Time] {
        &self.timestamps
    }

    pub fn start_time(&self) -> Time {
        self.timestamps[0]
    }

    pub fn end_time(&self) -> Time {
        *self.timestamps.last().unwrap()
    }
}

pub fn load<R: std::io::Read>(reader: R) -> Result<Vec<Trip>> {
    let raw: Vec<RawTrip> = serde_json::from_reader(reader)?;

    let mut trips = Vec::new();
    for rec in raw {
        let path: Vec<LonLat> = rec
            .path
            .into_iter()
            .map(|[lon, lat]| LonLat::new(lon, lat))
            .collect();
        let timestamps: Vec<Time> = rec
            .timestamps
            .into_iter()
            .map(|t| Time::START_OF_DAY + Duration::seconds(t))
            .collect();
        trips.push(Trip::new(
            TripID(trips.len()),
            path,
            timestamps,
            rec.vendor,
        )?);
    }
    Ok(trips)
}

#[derive(Deserialize)]
struct RawTrip {
    path: Vec<[f64; 2]>,
    timestamps: Vec<f64>,
    vendor: Vendor,
}
