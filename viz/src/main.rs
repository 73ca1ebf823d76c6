use anyhow::Result;
use geom::Duration;
use log::info;
use structopt::StructOpt;

use model::Model;
use viz::{App, Layer, Options, Renderer, Theme};

#[derive(StructOpt)]
#[structopt(name = "trip-trails")]
struct Args {
    /// The path to a JSON file with trip trails
    #[structopt(long)]
    trips: String,
    /// The path to a JSON file with timestamped point events
    #[structopt(long)]
    events: String,
    /// Duration of one full animation loop, in data-time units
    #[structopt(long, default_value = "1800")]
    loop_length: f64,
    /// Data-time units advanced per real second
    #[structopt(long, default_value = "10")]
    animation_speed: f64,
    /// How long trails linger, in data-time units
    #[structopt(long, default_value = "10")]
    trail_length: f64,
    /// Frames per second for the tick loop
    #[structopt(long, default_value = "30")]
    fps: u32,
    /// Stop after this many real seconds
    #[structopt(long, default_value = "10")]
    run_for: f64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::from_args();
    let model = Model::load(&args.trips, &args.events)?;
    let app = App::new(
        model,
        Options {
            loop_length: Duration::seconds(args.loop_length),
            animation_speed: args.animation_speed,
            trail_length: Duration::seconds(args.trail_length),
            theme: Theme::default(),
        },
    )?;

    let frame_time = std::time::Duration::from_secs_f64(1.0 / f64::from(args.fps.max(1)));
    let animation = app.run(LogRenderer, frame_time);
    std::thread::sleep(std::time::Duration::from_secs_f64(args.run_for));
    animation.stop();
    Ok(())
}

/// Stands in for the real map renderer: just describes each frame.
struct LogRenderer;

impl Renderer for LogRenderer {
    fn render(&mut self, layers: &[Layer]) {
        for layer in layers {
            match layer {
                Layer::Trips(l) => {
                    info!("{}: {} trails at {}", l.id, l.trips.len(), l.current_time);
                }
                Layer::Scatterplot(l) => {
                    info!("{}: {} active points", l.id, l.positions.len());
                }
            }
        }
    }
}
