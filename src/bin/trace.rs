use std::path::{Path, PathBuf};

use clap::Parser;
use plotters::prelude::*;

use planet_sim::{PlanetSpin, SceneFrame, SimError, StarSystem};

/// Runs the simulation without a window and plots where each planet goes,
/// seen from above.
#[derive(Debug, Parser)]
struct Args {
    #[arg(long, default_value_t = 120)]
    ticks: u64,
    #[arg(long, default_value = "plots/orbits.png")]
    output: PathBuf,
    #[arg(long)]
    legacy_spin: bool,
    /// Only plot this planet's track
    #[arg(long)]
    planet: Option<String>,
}

pub fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(e) = run(Args::parse()) {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let spin = if args.legacy_spin {
        PlanetSpin::Legacy
    } else {
        PlanetSpin::Orbital
    };

    let mut system = StarSystem::solar();
    let only = select_planet(&system, args.planet.as_deref())?;
    let tracks = collect_tracks(&mut system, spin, args.ticks);

    if let Some(dir) = args.output.parent() {
        std::fs::create_dir_all(dir)?;
    }
    draw_plot(&args.output, &system, &tracks, only).map_err(|e| SimError::Plot(e.to_string()))?;

    log::info!(
        "Traced {} ticks of {} planets into {}",
        args.ticks,
        tracks.len(),
        args.output.display()
    );
    Ok(())
}

/// Resolves the requested planet, ignoring case, to its registry name.
fn select_planet(system: &StarSystem, name: Option<&str>) -> anyhow::Result<Option<&'static str>> {
    match name {
        None => Ok(None),
        Some(name) => match system.planet_by_name(name) {
            Some(planet) => Ok(Some(planet.name)),
            None => anyhow::bail!("no planet named {:?}", name),
        },
    }
}

/// World-space (x, z) of every planet after each tick, one track per planet.
fn collect_tracks(system: &mut StarSystem, spin: PlanetSpin, ticks: u64) -> Vec<Vec<(f32, f32)>> {
    let mut tracks = vec![vec![]; system.planets().len()];
    for _ in 0..=ticks {
        let frame = SceneFrame::compose(system, spin);
        for (track, planet) in tracks.iter_mut().zip(frame.planets.iter()) {
            let center = planet.center();
            track.push((center.x, center.z));
        }
        system.tick();
    }
    tracks
}

fn draw_plot(
    name: &Path,
    system: &StarSystem,
    tracks: &[Vec<(f32, f32)>],
    only: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let extent = system
        .orbits()
        .iter()
        .map(|o| o.distance as f32)
        .fold(1.0, f32::max)
        * 1.1;

    let root = BitMapBackend::new(name, (800, 800)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .margin(5)
        .x_label_area_size(30)
        .y_label_area_size(30)
        .build_cartesian_2d(-extent..extent, -extent..extent)?;

    chart.configure_mesh().disable_mesh().draw()?;

    for orbit in system.orbits() {
        let r = orbit.distance as f32;
        chart.draw_series(LineSeries::new(
            (0..=360).map(|i| {
                let theta = (i as f32).to_radians();
                (r * theta.cos(), r * theta.sin())
            }),
            &RGBColor(128, 128, 128),
        ))?;
    }

    for (track, planet) in tracks.iter().zip(system.planets()) {
        if only.map_or(false, |name| name != planet.name) {
            continue;
        }
        let c = planet.color;
        let color = RGBColor(
            (c.x * 255.0) as u8,
            (c.y * 255.0) as u8,
            (c.z * 255.0) as u8,
        );
        // A planet moving more than a radian per tick makes a useless line plot
        chart.draw_series(
            track
                .iter()
                .map(|&(x, z)| Circle::new((x, z), 2, color.filled())),
        )?;
    }

    root.present()?;
    Ok(())
}
