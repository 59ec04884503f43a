use sunpath::phases::{sun_times, SunTimes, HORIZON_SUNRISE_DEG};
use sunpath::{sun_direction, sun_position, Angle, Instant, Observer};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // --- Driving a globe light from the real sun position ---
    // A renderer showing a day/night terminator needs one thing per frame:
    // a unit vector toward the sun in the observer's local frame
    // (x = west, y = up, z = south).

    let reykjavik = Observer::new(64.1466, -21.9426);
    let day: Instant = "2025-06-21T00:00:00Z".parse()?;

    println!("=== Sun direction over Reykjavík, 2025-06-21 ===\n");
    println!(
        "{:>8}  {:>9}  {:>9}  {:>28}",
        "hour", "azimuth", "altitude", "light direction"
    );

    for hour in (0..24).step_by(3) {
        let t = day.add_millis(f64::from(hour) * 3_600_000.0)?;
        let pos = sun_position(t, &reykjavik);
        let dir = sun_direction(t, &reykjavik);

        println!(
            "{:>6}h   {:>+8.2}°  {:>+8.2}°  {}",
            hour,
            pos.azimuth().degrees(),
            pos.altitude().degrees(),
            dir
        );
    }

    // The vector is always safe to hand to a rendering transform: unit
    // length, or exactly zero when degenerate.
    let dir = sun_direction(day, &reykjavik);
    assert!((dir.magnitude() - 1.0).abs() < 1e-9 || dir == sunpath::Vector3::zeros());

    // --- Event times for annotating the scene ---

    println!("\n=== Sun events ===\n");
    match sun_times(day, &reykjavik, Angle::from_degrees(HORIZON_SUNRISE_DEG))? {
        SunTimes::Regular { rise, noon, set } => {
            println!("sunrise  {}", rise);
            println!("noon     {}", noon);
            println!("sunset   {}", set);
        }
        SunTimes::AlwaysUp { noon } => {
            println!("polar day, sun never sets (noon {})", noon);
        }
        SunTimes::AlwaysDown { noon } => {
            println!("polar night, sun never rises (noon {})", noon);
        }
    }

    Ok(())
}
