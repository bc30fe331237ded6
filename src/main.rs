use clap::Parser;

use planet_sim::consts::{DEFAULT_FRAMERATE, MAX_FRAMERATE};
use planet_sim::gui;
use planet_sim::{PlanetSpin, SimulationOptions, StarSystem};

#[derive(Debug, Parser)]
#[command(about = "Animated toy solar system")]
struct Args {
    /// Reproduce the old double rotation, which pins planets to the +X axis
    #[arg(long)]
    legacy_spin: bool,
    /// Close the window after this many frames
    #[arg(long)]
    frames: Option<u64>,
    /// Frame rate cap, 1 to 1000; one tick per frame
    #[arg(
        long,
        default_value_t = DEFAULT_FRAMERATE,
        value_parser = clap::value_parser!(u64).range(1..=MAX_FRAMERATE)
    )]
    fps: u64,
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp_secs()
        .parse_default_env()
        .init();

    if let Err(e) = run(Args::parse()) {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let options = SimulationOptions {
        spin: if args.legacy_spin {
            PlanetSpin::Legacy
        } else {
            PlanetSpin::Orbital
        },
        max_frames: args.frames,
        framerate: args.fps,
    };

    let system = StarSystem::solar();
    gui::run(system, options)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["planet-sim"]).unwrap();
        assert_eq!(args.fps, DEFAULT_FRAMERATE);
        assert_eq!(args.frames, None);
        assert!(!args.legacy_spin);
    }

    #[test]
    fn test_fps_must_be_positive() {
        assert!(Args::try_parse_from(["planet-sim", "--fps", "0"]).is_err());
        assert_eq!(
            Args::try_parse_from(["planet-sim", "--fps", "1"]).unwrap().fps,
            1
        );
    }

    #[test]
    fn test_fps_upper_bound() {
        assert_eq!(
            Args::try_parse_from(["planet-sim", "--fps", "1000"])
                .unwrap()
                .fps,
            1000
        );
        assert!(Args::try_parse_from(["planet-sim", "--fps", "1001"]).is_err());
    }
}
