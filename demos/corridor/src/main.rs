//! corridor — offline end-to-end run of the safe-route engine.
//!
//! Routes are straight-line approximations and facilities are simulated
//! (seeded), so the run needs no network access and is reproducible.
//!
//! ```text
//! corridor [ORIGIN] [DESTINATION] [MODE] [CONFIG.json] [FACILITIES.csv]
//! ```
//!
//! `ORIGIN`/`DESTINATION` are `"lat,lon"` literals.  Passing a facilities
//! CSV (`id,kind,lat,lon`) switches to the live strategy over that file.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};

use sr_core::TravelMode;
use sr_eval::{EngineConfig, FacilityStrategy, SafetyEngine};
use sr_grid::CsvFacilityDirectory;
use sr_route::{LiteralGeocoder, StraightLineRouter};

// ── Defaults ──────────────────────────────────────────────────────────────────

const ORIGIN:      &str = "22.70,72.87"; // Nadiad
const DESTINATION: &str = "22.56,72.93"; // Anand
const MODE:        &str = "driving";

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let origin = args.first().map(String::as_str).unwrap_or(ORIGIN);
    let destination = args.get(1).map(String::as_str).unwrap_or(DESTINATION);
    let mode: TravelMode = args.get(2).map(String::as_str).unwrap_or(MODE).parse()?;

    let config = match args.get(3) {
        Some(path) => EngineConfig::from_json_path(Path::new(path))
            .with_context(|| format!("loading engine config from {path}"))?,
        None => EngineConfig::default(),
    };

    let strategy = match args.get(4) {
        Some(path) => {
            let directory = CsvFacilityDirectory::from_path(Path::new(path))
                .with_context(|| format!("loading facilities from {path}"))?;
            eprintln!("Facilities: {} records from {path}", directory.len());
            FacilityStrategy::Live(Box::new(directory))
        }
        None => FacilityStrategy::Simulated,
    };

    eprintln!("=== corridor — safe-route engine ===");
    eprintln!("From {origin} to {destination}  |  mode: {mode}  |  strategy: {}", strategy.name());
    eprintln!(
        "Scale 0–{}  |  grid {} km / {} km hexes  |  up to {} routes",
        config.scale.max,
        config.grid.radius_km,
        config.grid.hex_size_km,
        config.synthesis.max_routes
    );
    eprintln!();

    let engine =
        SafetyEngine::new(config, StraightLineRouter::default(), LiteralGeocoder, strategy)?;

    let t0 = Instant::now();
    let recommendation = engine.run(origin, destination, mode)?;
    let elapsed = t0.elapsed();

    for route in &recommendation.routes {
        eprintln!(
            "#{} route {}: {:>5.1} pts ({:?})  {:.2} km  {:.0} min  {}",
            route.rank,
            route.route_number,
            route.score,
            route.tier,
            route.distance_km,
            route.duration_minutes,
            route.reasoning
        );
    }
    eprintln!();
    eprintln!("{}", recommendation.headline);
    eprintln!("Evaluated in {:.1} ms", elapsed.as_secs_f64() * 1e3);

    println!("{}", serde_json::to_string_pretty(&recommendation)?);
    Ok(())
}
