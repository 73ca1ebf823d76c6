#[macro_use]
extern crate anyhow;

mod animation;
mod clock;
mod layers;
mod theme;

use anyhow::Result;
use geom::{Duration, Time};
use serde::Deserialize;

use model::Model;

pub use self::animation::Animation;
pub use self::clock::Clock;
pub use self::layers::{Layer, Renderer, ScatterplotLayer, TripsLayer};
pub use self::theme::{Color, Material, Theme};

/// All recognized options. Everything has a default, so a partial config (or
/// none at all) works.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Duration of one full loop, in data-time units.
    pub loop_length: Duration,
    /// Data-time units advanced per real second.
    pub animation_speed: f64,
    /// How long trails linger behind a moving vehicle, in data-time units.
    /// Passed through to the renderer.
    pub trail_length: Duration,
    pub theme: Theme,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            loop_length: Duration::seconds(1800.0),
            animation_speed: 10.0,
            trail_length: Duration::seconds(10.0),
            theme: Theme::default(),
        }
    }
}

/// Owns the immutable input data and the clock. Each frame, the current time
/// is threaded explicitly from the tick through `layers_at` to the renderer;
/// there's no shared mutable "current time" anywhere.
pub struct App {
    pub model: Model,
    pub clock: Clock,
    pub trail_length: Duration,
    pub theme: Theme,
}

impl App {
    pub fn new(model: Model, opts: Options) -> Result<Self> {
        let clock = Clock::new(opts.loop_length, opts.animation_speed)?;
        if opts.trail_length < Duration::ZERO {
            bail!("trail_length can't be negative, got {}", opts.trail_length);
        }
        Ok(Self {
            model,
            clock,
            trail_length: opts.trail_length,
            theme: opts.theme,
        })
    }

    /// Everything the renderer needs to draw one frame.
    pub fn layers_at(&self, time: Time) -> Vec<Layer> {
        let colors = self
            .model
            .trips
            .iter()
            .map(|trip| self.theme.trail_color(trip.vendor))
            .collect();

        vec![
            Layer::Trips(TripsLayer {
                id: "trips",
                trips: &self.model.trips,
                current_time: time,
                trail_length: self.trail_length,
                colors,
                opacity: 0.3,
                width_min_pixels: 5.0,
                rounded: true,
                shadow_enabled: false,
            }),
            Layer::Scatterplot(ScatterplotLayer {
                id: "scatterplot",
                positions: self.model.events.active_at(time),
                color: self.theme.point_color,
                opacity: 0.9,
                radius_min_pixels: 3.0,
                radius_max_pixels: 30.0,
                pickable: false,
            }),
        ]
    }

    /// Starts ticking the clock and feeding frames to the renderer. Drop (or
    /// `stop`) the returned handle to halt the loop.
    pub fn run<R: Renderer + Send + 'static>(
        self,
        mut renderer: R,
        frame_time: std::time::Duration,
    ) -> Animation {
        Animation::start(frame_time, move |now_seconds| {
            let time = self.clock.tick(now_seconds);
            let layers = self.layers_at(time);
            renderer.render(&layers);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geom::LonLat;

    fn seconds(x: f64) -> Time {
        Time::START_OF_DAY + Duration::seconds(x)
    }

    fn app() -> App {
        let trips = r#"[
            {"path": [[0.0, 0.0], [1.0, 1.0]], "timestamps": [0, 100], "vendor": 0},
            {"path": [[2.0, 2.0], [3.0, 3.0]], "timestamps": [50, 200], "vendor": 1}
        ]"#;
        let events = r#"{
            "a": {"path": [0.0, 0.0], "timestamp": [10, 20]},
            "b": {"path": [1.0, 1.0], "timestamp": [30]}
        }"#;
        let model = Model::import(trips.as_bytes(), events.as_bytes()).unwrap();
        App::new(model, Options::default()).unwrap()
    }

    #[test]
    fn test_invalid_options() {
        let model = Model::import("[]".as_bytes(), "{}".as_bytes()).unwrap();
        let mut opts = Options::default();
        opts.animation_speed = 0.0;
        assert!(App::new(model, opts).is_err());
    }

    #[test]
    fn test_layers_thread_time_through() {
        let app = app();
        let layers = app.layers_at(seconds(15.0));
        assert_eq!(layers.len(), 2);

        match &layers[0] {
            Layer::Trips(l) => {
                assert_eq!(l.id, "trips");
                assert_eq!(l.current_time, seconds(15.0));
                assert_eq!(l.trips.len(), 2);
                assert_eq!(l.colors, vec![[253, 128, 93], [23, 184, 190]]);
            }
            _ => panic!("expected trips layer first"),
        }
        match &layers[1] {
            Layer::Scatterplot(l) => {
                assert_eq!(l.id, "scatterplot");
                assert_eq!(l.positions, vec![LonLat::new(0.0, 0.0)]);
            }
            _ => panic!("expected scatterplot layer second"),
        }
    }

    #[test]
    fn test_active_points_follow_the_clock() {
        let app = app();

        // Interval event only
        match &app.layers_at(seconds(15.0))[1] {
            Layer::Scatterplot(l) => assert_eq!(l.positions, vec![LonLat::new(0.0, 0.0)]),
            _ => unreachable!(),
        }
        // Instant event only, right on its timestamp
        match &app.layers_at(seconds(30.0))[1] {
            Layer::Scatterplot(l) => assert_eq!(l.positions, vec![LonLat::new(1.0, 1.0)]),
            _ => unreachable!(),
        }
        // Nothing active
        match &app.layers_at(seconds(25.0))[1] {
            Layer::Scatterplot(l) => assert!(l.positions.is_empty()),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_run_and_cancel() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Arc;

        struct CountingRenderer(Arc<AtomicUsize>);
        impl Renderer for CountingRenderer {
            fn render(&mut self, layers: &[Layer]) {
                assert_eq!(layers.len(), 2);
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }

        let frames = Arc::new(AtomicUsize::new(0));
        let animation = app().run(
            CountingRenderer(frames.clone()),
            std::time::Duration::from_millis(1),
        );
        std::thread::sleep(std::time::Duration::from_millis(50));
        animation.stop();

        let rendered = frames.load(Ordering::SeqCst);
        assert!(rendered > 0);
        std::thread::sleep(std::time::Duration::from_millis(30));
        assert_eq!(frames.load(Ordering::SeqCst), rendered);
    }
}
