use geom::{Duration, LonLat, Time};

use model::Trip;

use crate::theme::Color;

/// What gets handed to the renderer each frame. The renderer is a sink; it
/// never feeds anything back into this crate.
pub trait Renderer {
    fn render(&mut self, layers: &[Layer]);
}

pub enum Layer<'a> {
    Trips(TripsLayer<'a>),
    Scatterplot(ScatterplotLayer),
}

impl<'a> Layer<'a> {
    pub fn id(&self) -> &'static str {
        match self {
            Layer::Trips(l) => l.id,
            Layer::Scatterplot(l) => l.id,
        }
    }
}

/// Fading trails over the full trip set, truncated at `current_time`.
pub struct TripsLayer<'a> {
    pub id: &'static str,
    pub trips: &'a [Trip],
    pub current_time: Time,
    pub trail_length: Duration,
    /// Indexed by trip, parallel to `trips`.
    pub colors: Vec<Color>,
    pub opacity: f64,
    pub width_min_pixels: f64,
    pub rounded: bool,
    pub shadow_enabled: bool,
}

/// The currently-active transient points.
pub struct ScatterplotLayer {
    pub id: &'static str,
    pub positions: Vec<LonLat>,
    pub color: Color,
    pub opacity: f64,
    pub radius_min_pixels: f64,
    pub radius_max_pixels: f64,
    pub pickable: bool,
}
