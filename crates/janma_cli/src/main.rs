use std::error::Error;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use janma_chart::{
    BirthDetails, ChartOptions, GeoPosition, compute_chart_global, compute_lagna, deg_to_dms,
    in_sign,
};
use janma_ephem::{AyanamshaSystem, EphemConfig, Ephemeris, NodeMode};
use janma_time::calendar_to_jd;

#[derive(Parser)]
#[command(name = "janma", about = "Sidereal birth-chart (kundali) CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full chart: grahas, lagna, whole-sign bhavas
    Chart {
        /// Birth date, YYYY-MM-DD (proleptic Gregorian)
        date: String,
        /// Local wall-clock time, HH:MM
        time: String,
        /// UTC offset in hours (e.g. 5.5)
        #[arg(long)]
        offset: f64,
        /// Latitude in degrees, north positive
        #[arg(long)]
        lat: f64,
        /// Longitude in degrees, east positive
        #[arg(long)]
        lon: f64,
        /// Ayanamsha system
        #[arg(long, default_value = "lahiri")]
        ayanamsha: String,
        /// Use the mean node for Rahu instead of the true node
        #[arg(long)]
        mean_node: bool,
    },
    /// Ascendant only
    Ascendant {
        date: String,
        time: String,
        #[arg(long)]
        offset: f64,
        #[arg(long)]
        lat: f64,
        #[arg(long)]
        lon: f64,
        #[arg(long, default_value = "lahiri")]
        ayanamsha: String,
    },
    /// Ayanamsha value for a date
    Ayanamsha {
        /// Date, YYYY-MM-DD
        date: String,
        #[arg(long, default_value = "lahiri")]
        ayanamsha: String,
    },
    /// Rashi for a sidereal longitude
    Rashi {
        /// Sidereal ecliptic longitude in degrees
        lon: f64,
    },
}

fn parse_date(s: &str) -> Result<(i32, u32, u32), String> {
    let parts: Vec<&str> = s.split('-').collect();
    if parts.len() != 3 {
        return Err(format!("expected YYYY-MM-DD, got {s}"));
    }
    let year = parts[0].parse().map_err(|_| format!("bad year in {s}"))?;
    let month = parts[1].parse().map_err(|_| format!("bad month in {s}"))?;
    let day = parts[2].parse().map_err(|_| format!("bad day in {s}"))?;
    Ok((year, month, day))
}

fn parse_time(s: &str) -> Result<(u32, u32), String> {
    let parts: Vec<&str> = s.split(':').collect();
    if parts.len() != 2 {
        return Err(format!("expected HH:MM, got {s}"));
    }
    let hour = parts[0].parse().map_err(|_| format!("bad hour in {s}"))?;
    let minute = parts[1].parse().map_err(|_| format!("bad minute in {s}"))?;
    Ok((hour, minute))
}

fn parse_ayanamsha(s: &str) -> Result<AyanamshaSystem, String> {
    match s.to_ascii_lowercase().as_str() {
        "lahiri" => Ok(AyanamshaSystem::Lahiri),
        "krishnamurti" | "kp" => Ok(AyanamshaSystem::Krishnamurti),
        "raman" => Ok(AyanamshaSystem::Raman),
        "fagan-bradley" | "fagan" => Ok(AyanamshaSystem::FaganBradley),
        other => Err(format!(
            "unknown ayanamsha {other}; expected lahiri, krishnamurti, raman or fagan-bradley"
        )),
    }
}

fn fmt_position(longitude_deg: f64) -> String {
    let (rashi, in_sign_deg) = in_sign(longitude_deg);
    let dms = deg_to_dms(in_sign_deg);
    format!(
        "{:>3}°{:02}′{:04.1}″ {}",
        dms.degrees, dms.minutes, dms.seconds, rashi.name()
    )
}

fn print_chart(
    details: BirthDetails,
    geo: GeoPosition,
    options: ChartOptions,
) -> Result<(), Box<dyn Error>> {
    let chart = compute_chart_global(&details, &geo, &options)?;

    println!(
        "Lagna    {:>10.4}°  {}",
        chart.lagna.sidereal_deg,
        fmt_position(chart.lagna.sidereal_deg)
    );
    println!("Ayanamsha {:>9.4}° ({})", chart.lagna.ayanamsha_deg, options.ayanamsha.name());
    println!();

    for p in &chart.grahas {
        let motion = if p.is_retrograde() { "R" } else { " " };
        println!(
            "{:<8} {:>10.4}° {motion}  {}  ({:+.4}°/day)",
            p.graha.name(),
            p.longitude_deg,
            fmt_position(p.longitude_deg),
            p.speed_deg_per_day
        );
    }
    println!();

    for b in &chart.bhavas {
        let grahas: Vec<&str> = b.grahas.iter().map(|g| g.name()).collect();
        println!(
            "House {:>2}  {:<12} {:>5.1}°  {}",
            b.house,
            b.rashi.name(),
            chart.house_cusps[(b.house - 1) as usize],
            grahas.join(", ")
        );
    }
    Ok(())
}

fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Chart {
            date,
            time,
            offset,
            lat,
            lon,
            ayanamsha,
            mean_node,
        } => {
            let (year, month, day) = parse_date(&date)?;
            let (hour, minute) = parse_time(&time)?;
            let node_mode = if mean_node { NodeMode::Mean } else { NodeMode::True };
            janma_ephem::init(EphemConfig {
                node_mode,
                ..EphemConfig::default()
            })?;

            let details = BirthDetails::new(year, month, day, hour, minute, offset);
            let geo = GeoPosition::new(lat, lon)?;
            let options = ChartOptions {
                ayanamsha: parse_ayanamsha(&ayanamsha)?,
            };
            print_chart(details, geo, options)?;
        }

        Commands::Ascendant {
            date,
            time,
            offset,
            lat,
            lon,
            ayanamsha,
        } => {
            let (year, month, day) = parse_date(&date)?;
            let (hour, minute) = parse_time(&time)?;
            janma_ephem::init(EphemConfig::default())?;

            let details = BirthDetails::new(year, month, day, hour, minute, offset);
            let geo = GeoPosition::new(lat, lon)?;
            let system = parse_ayanamsha(&ayanamsha)?;
            let moment = details.birth_moment()?;
            let engine = janma_ephem::engine()?;
            let lagna = compute_lagna(engine, moment, &geo, system)?;

            println!("JD (UT)    {:.6}", moment.jd_ut);
            println!("Tropical   {:.4}°", lagna.tropical_deg);
            println!("Ayanamsha  {:.4}°", lagna.ayanamsha_deg);
            println!(
                "Sidereal   {:.4}°  {}",
                lagna.sidereal_deg,
                fmt_position(lagna.sidereal_deg)
            );
        }

        Commands::Ayanamsha { date, ayanamsha } => {
            let (year, month, day) = parse_date(&date)?;
            janma_ephem::init(EphemConfig::default())?;
            let engine = janma_ephem::engine()?;
            let system = parse_ayanamsha(&ayanamsha)?;
            let jd = calendar_to_jd(year, month, day as f64 + 0.5);
            let value = engine.ayanamsha_deg(jd, system);
            let dms = deg_to_dms(value);
            println!(
                "{} on {date}: {value:.6}° ({}°{}′{:.1}″)",
                system.name(),
                dms.degrees,
                dms.minutes,
                dms.seconds
            );
        }

        Commands::Rashi { lon } => {
            let (rashi, deg) = in_sign(lon);
            let dms = deg_to_dms(deg);
            println!(
                "{} ({}) — {}°{}′{:.1}″ into the sign",
                rashi.name(),
                rashi.sanskrit_name(),
                dms.degrees,
                dms.minutes,
                dms.seconds
            );
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
