use std::collections::BTreeMap;

use anyhow::Result;
use geom::{Duration, LonLat, Time};
use log::warn;
use serde::Deserialize;

/// When an event is visible. Normalized once at load time, so the sampler
/// never has to re-derive it per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TimeSpan {
    Instant(Time),
    /// Inclusive at both ends.
    Interval(Time, Time),
}

impl TimeSpan {
    /// `raw` is the timestamp list as it appears in the input data: one value
    /// for an instant event, two for an interval.
    pub fn new(raw: &[Time]) -> Result<Self> {
        match *raw {
            [t] => Ok(TimeSpan::Instant(t)),
            [start, end] => {
                if start > end {
                    bail!("Event interval out-of-order: {} then {}", start, end);
                }
                Ok(TimeSpan::Interval(start, end))
            }
            _ => bail!("Event has {} timestamps, expected 1 or 2", raw.len()),
        }
    }

    pub fn contains(&self, time: Time) -> bool {
        match *self {
            TimeSpan::Instant(t) => time == t,
            TimeSpan::Interval(start, end) => start <= time && time <= end,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Event {
    pub pos: LonLat,
    pub span: TimeSpan,
}

/// An ordered set of transient point events, sampled against the animation
/// time every frame.
pub struct Events {
    events: Vec<Event>,
}

impl Events {
    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    /// Everything visible at this time, in input order. Returns a fresh list
    /// every call; the caller owns it for the rest of the frame.
    pub fn active_at(&self, time: Time) -> Vec<LonLat> {
        // TODO Sort by start time and binary search, if these lists ever get big
        let mut result = Vec::new();
        for event in &self.events {
            if event.span.contains(time) {
                result.push(event.pos);
            }
        }
        result
    }
}

pub fn load<R: std::io::Read>(reader: R) -> Result<Events> {
    let raw: BTreeMap<String, RawEvent> = serde_json::from_reader(reader)?;

    let mut events = Vec::new();
    for (id, rec) in raw {
        let timestamps: Vec<Time> = rec
            .timestamp
            .iter()
            .map(|t| Time::START_OF_DAY + Duration::seconds(*t))
            .collect();
        // One bad record shouldn't sink the whole dataset; this feeds a
        // continuously refreshing view.
        match TimeSpan::new(&timestamps) {
            Ok(span) => {
                let [lon, lat] = rec.path;
                events.push(Event {
                    pos: LonLat::new(lon, lat),
                    span,
                });
            }
            Err(err) => {
                warn!("Skipping event {}: {}", id, err);
            }
        }
    }
    Ok(Events::new(events))
}

#[derive(Deserialize)]
struct RawEvent {
    path: [f64; 2],
    timestamp: Vec<f64>,
}
