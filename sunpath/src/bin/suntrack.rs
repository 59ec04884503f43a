use anyhow::Context;
use clap::{Parser, Subcommand};

use sunpath::phases::{
    solar_transit, sun_times, SunTimes, HORIZON_ASTRONOMICAL_TWILIGHT_DEG,
    HORIZON_CIVIL_TWILIGHT_DEG, HORIZON_NAUTICAL_TWILIGHT_DEG, HORIZON_SUNRISE_DEG,
};
use sunpath::{
    sun_direction_with_obliquity, sun_position_with_obliquity, Angle, Instant, Observer,
};
use sunpath_core::angle::wrap_0_2pi;
use sunpath_core::constants::{EARTH_OBLIQUITY_DEG, MILLIS_PER_DAY_F64, PI};

#[derive(Parser)]
#[command(name = "suntrack")]
#[command(about = "Solar position, direction vectors, and sun event times for an observer")]
struct Cli {
    /// Observer latitude in degrees, positive north
    #[arg(long, allow_negative_numbers = true)]
    lat: f64,

    /// Observer longitude in degrees, positive east
    #[arg(long, allow_negative_numbers = true)]
    lon: f64,

    /// UTC time as ISO-8601 (YYYY-MM-DDTHH:MM:SS[.sss][Z]); defaults to now
    #[arg(long)]
    time: Option<String>,

    /// Obliquity of the ecliptic in degrees
    #[arg(long, default_value_t = EARTH_OBLIQUITY_DEG)]
    obliquity: f64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the sun's azimuth and altitude
    Position,
    /// Print the unit direction vector (west/up/south frame)
    Direction,
    /// Print solar noon, nadir, rise/set and twilight times
    Phases,
    /// Print an azimuth/altitude table across the whole UTC day
    Track {
        /// Sample step in minutes
        #[arg(long, default_value = "60")]
        step_minutes: u32,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let observer = Observer::new(cli.lat, cli.lon);
    let obliquity = Angle::from_degrees(cli.obliquity);
    let instant = match &cli.time {
        Some(text) => text
            .parse::<Instant>()
            .with_context(|| format!("parsing --time '{}'", text))?,
        None => system_now()?,
    };

    match cli.command {
        Commands::Position => {
            let pos = sun_position_with_obliquity(instant, &observer, obliquity);
            println!("observer  {}", observer);
            println!("time      {}", instant);
            println!(
                "azimuth   {:+9.4}°  (from south, positive west)",
                pos.azimuth().degrees()
            );
            println!(
                "bearing   {:9.4}°  (compass, from north)",
                wrap_0_2pi(pos.azimuth().radians() + PI).to_degrees()
            );
            println!("altitude  {:+9.4}°", pos.altitude().degrees());
            println!("zenith    {:9.4}°", pos.zenith_angle().degrees());
        }
        Commands::Direction => {
            let dir = sun_direction_with_obliquity(instant, &observer, obliquity);
            println!("observer  {}", observer);
            println!("time      {}", instant);
            println!("direction {}", dir);
        }
        Commands::Phases => {
            let transit = solar_transit(instant, &observer)?;
            println!("observer  {}", observer);
            println!("noon      {}", transit.noon);
            println!("nadir     {}", transit.nadir);

            for (label, horizon_deg) in [
                ("sunrise/sunset     ", HORIZON_SUNRISE_DEG),
                ("civil twilight     ", HORIZON_CIVIL_TWILIGHT_DEG),
                ("nautical twilight  ", HORIZON_NAUTICAL_TWILIGHT_DEG),
                ("astronomical twil. ", HORIZON_ASTRONOMICAL_TWILIGHT_DEG),
            ] {
                let times = sun_times(instant, &observer, Angle::from_degrees(horizon_deg))?;
                match times {
                    SunTimes::Regular { rise, set, .. } => {
                        println!("{} {}  →  {}", label, rise, set);
                    }
                    SunTimes::AlwaysUp { .. } => println!("{} sun above all day", label),
                    SunTimes::AlwaysDown { .. } => println!("{} sun below all day", label),
                }
            }
        }
        Commands::Track { step_minutes } => {
            anyhow::ensure!(step_minutes > 0, "--step-minutes must be positive");

            let day_start_ms =
                (instant.unix_millis() / MILLIS_PER_DAY_F64).floor() * MILLIS_PER_DAY_F64;
            println!("observer  {}", observer);
            println!("{:>24}  {:>10}  {:>10}", "time (UTC)", "azimuth", "altitude");

            let mut minutes = 0u32;
            while minutes < 1440 {
                let sample =
                    Instant::from_unix_millis(day_start_ms + f64::from(minutes) * 60_000.0)?;
                let pos = sun_position_with_obliquity(sample, &observer, obliquity);
                let marker = if pos.altitude().radians() > 0.0 { "☀" } else { " " };
                println!(
                    "{:>24}  {:>+9.3}°  {:>+9.3}° {}",
                    sample.to_string(),
                    pos.azimuth().degrees(),
                    pos.altitude().degrees(),
                    marker
                );
                minutes += step_minutes;
            }
        }
    }

    Ok(())
}

fn system_now() -> anyhow::Result<Instant> {
    let elapsed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .context("system clock is before the Unix epoch")?;
    Ok(Instant::from_unix_millis(elapsed.as_millis() as f64)?)
}
