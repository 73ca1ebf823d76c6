#[macro_use]
extern crate anyhow;

mod events;
mod trips;

use anyhow::Result;
use geom::{Bounds, GPSBounds, Pt2D};
use log::info;

pub use self::events::{Event, Events, TimeSpan};
pub use self::trips::{Trip, TripID, Vendor};

/// All input data for one animation: trip trails and transient point events.
/// Loaded once at startup; immutable afterwards.
pub struct Model {
    pub bounds: Bounds,
    pub gps_bounds: GPSBounds,
    // TODO TiVec
    pub trips: Vec<Trip>,
    pub events: Events,
}

impl Model {
    pub fn load(trips_path: &str, events_path: &str) -> Result<Self> {
        let model = Self::import(
            fs_err::File::open(trips_path)?,
            fs_err::File::open(events_path)?,
        )?;
        info!(
            "Loaded {} trips and {} events from {} and {}",
            model.trips.len(),
            model.events.len(),
            trips_path,
            events_path
        );
        Ok(model)
    }

    pub fn import<R1: std::io::Read, R2: std::io::Read>(
        trips_reader: R1,
        events_reader: R2,
    ) -> Result<Self> {
        let trips = trips::load(trips_reader)?;
        let events = events::load(events_reader)?;

        let mut gps_bounds = GPSBounds::new();
        let mut any_points = false;
        for trip in &trips {
            for pt in trip.path() {
                gps_bounds.update(*pt);
                any_points = true;
            }
        }
        for event in events.iter() {
            gps_bounds.update(event.pos);
            any_points = true;
        }

        let bounds = if any_points {
            gps_bounds.to_bounds()
        } else {
            // Avoid crashing a renderer with empty bounds
            Bounds::from(&[Pt2D::zero(), Pt2D::new(1.0, 1.0)])
        };

        Ok(Self {
            bounds,
            gps_bounds,
            trips,
            events,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import() {
        let trips = r#"[
            {"path": [[126.9, 37.5], [127.0, 37.6]], "timestamps": [0, 60], "vendor": 0}
        ]"#;
        let events = r#"{"a": {"path": [126.95, 37.55], "timestamp": [5, 15]}}"#;
        let model = Model::import(trips.as_bytes(), events.as_bytes()).unwrap();
        assert_eq!(model.trips.len(), 1);
        assert_eq!(model.events.len(), 1);
        assert!(model.bounds.max_x > model.bounds.min_x);
        assert!(model.bounds.max_y > model.bounds.min_y);
    }

    #[test]
    fn test_import_empty() {
        let model = Model::import("[]".as_bytes(), "{}".as_bytes()).unwrap();
        assert!(model.trips.is_empty());
        assert!(model.events.is_empty());
    }
}
