use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use clap::{ArgAction, Args, Parser, Subcommand};
use kp_config::KpConfig;
use kp_core::AnalyticEphemeris;
use kp_search::{
    ChartRequest, ChartResult, EngineConfig, GeoLocation, HoraryRequest, LocationProvider,
    calculate_chart, dasha_for_birth, dasha_report, horary_chart, horary_table, horary_time,
};
use kp_time::{CivilDate, CivilDateTime, TimeOfDay};
use kp_vedic_base::{
    AyanamshaMode, DashaReport, HoraryEntry, Lordship, deg_to_dms, format_dms, format_longitude,
    horary_entry, lordship,
};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "kp", version, about = "Krishnamurti Padhdhati astrology CLI")]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Raise log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    /// Print JSON instead of tables
    #[arg(long, global = true)]
    json: bool,
    /// Ayanamsa mode: old, new or manual
    #[arg(long, global = true)]
    ayanamsa: Option<String>,
    /// Ayanamsa in degrees for `--ayanamsa manual`
    #[arg(long, global = true)]
    ayanamsa_value: Option<f64>,
    #[command(subcommand)]
    command: Commands,
}

/// Where the chart is cast: a gazetteer key or explicit coordinates.
#[derive(Args, Debug, Clone)]
struct PlaceArgs {
    /// Location key (e.g. colombo, nuwara_eliya); the configured default if omitted
    #[arg(long, conflicts_with_all = ["lat", "lon"])]
    location: Option<String>,
    /// Latitude in degrees, north positive
    #[arg(long, requires = "lon", allow_negative_numbers = true)]
    lat: Option<f64>,
    /// Longitude in degrees, east positive
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    lon: Option<f64>,
    /// UTC offset in hours for --lat/--lon
    #[arg(long, default_value_t = 5.5, allow_negative_numbers = true)]
    tz: f64,
}

#[derive(Subcommand)]
enum Commands {
    /// Full KP chart: planets, cusps and dasha
    Chart {
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Local time (HH:MM or HH:MM:SS)
        #[arg(long)]
        time: String,
        #[command(flatten)]
        place: PlaceArgs,
        /// Leave out the dasha section
        #[arg(long)]
        no_dasha: bool,
        /// Resolve the current dasha at this local date-time instead of now
        #[arg(long)]
        dasha_at: Option<String>,
    },
    /// Vimshottari dasha for a birth instant
    Dasha {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Birth time (HH:MM or HH:MM:SS)
        #[arg(long)]
        time: String,
        #[command(flatten)]
        place: PlaceArgs,
        /// Sidereal Moon longitude; computed from the ephemeris if omitted
        #[arg(long)]
        moon: Option<f64>,
        /// Local date-time for the current chain (default: now)
        #[arg(long)]
        at: Option<String>,
    },
    /// Horary chart for a number 1-249
    Horary {
        /// Horary number (1-249)
        index: u16,
        /// Date to search for the matching time (default: judgment date)
        #[arg(long)]
        date: Option<String>,
        #[command(flatten)]
        place: PlaceArgs,
        /// Local judgment date-time (default: now)
        #[arg(long)]
        judgment: Option<String>,
    },
    /// Time on a date when the Ascendant reaches a horary number
    HoraryTime {
        /// Horary number (1-249)
        index: u16,
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        #[command(flatten)]
        place: PlaceArgs,
    },
    /// The 249-entry horary table
    HoraryTable {
        /// Show a single entry
        #[arg(long)]
        index: Option<u16>,
    },
    /// Ayanamsa at a date
    Ayanamsa {
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Local time (HH:MM or HH:MM:SS)
        #[arg(long, default_value = "12:00")]
        time: String,
        /// UTC offset in hours
        #[arg(long, default_value_t = 5.5, allow_negative_numbers = true)]
        tz: f64,
    },
    /// Sign, star, sub and sub-sub lords of a sidereal longitude
    Lordship {
        /// Sidereal longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
    /// Known locations
    Locations,
    /// Convert degrees to DMS
    Dms {
        /// Angle in decimal degrees
        #[arg(allow_negative_numbers = true)]
        deg: f64,
    },
    /// Julian Day of a local date-time, or the reverse with --from-jd
    Jd {
        /// Date (YYYY-MM-DD)
        #[arg(long, required_unless_present = "from_jd")]
        date: Option<String>,
        /// Local time (HH:MM or HH:MM:SS)
        #[arg(long, default_value = "00:00")]
        time: String,
        /// UTC offset in hours
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        tz: f64,
        /// Julian Day to convert back to a civil date-time
        #[arg(long, conflicts_with = "date")]
        from_jd: Option<f64>,
    },
}

fn or_exit<T, E: Display>(result: Result<T, E>) -> T {
    result.unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(1);
    })
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<KpConfig, String> {
    match path {
        Some(p) => KpConfig::load(p).map_err(|e| e.to_string()),
        None => Ok(KpConfig::default()),
    }
}

/// Apply command-line overrides on top of the file configuration.
fn apply_overrides(
    config: &mut KpConfig,
    ayanamsa: Option<&str>,
    ayanamsa_value: Option<f64>,
) -> Result<(), String> {
    if let Some(mode) = ayanamsa {
        config.ayanamsa.mode = AyanamshaMode::from_str(mode).map_err(|e| e.to_string())?;
    }
    if ayanamsa_value.is_some() {
        config.ayanamsa.manual_value = ayanamsa_value;
    }
    config.validate().map_err(|e| e.to_string())
}

fn resolve_place(config: &KpConfig, place: &PlaceArgs) -> Result<GeoLocation, String> {
    match (place.lat, place.lon) {
        (Some(lat), Some(lon)) => {
            GeoLocation::new("Custom", lat, lon, place.tz).map_err(|e| e.to_string())
        }
        _ => config
            .location(place.location.as_deref())
            .map_err(|e| e.to_string()),
    }
}

fn parse_datetime(date: &str, time: &str, utc_offset: f64) -> Result<CivilDateTime, String> {
    let date = CivilDate::from_str(date).map_err(|e| e.to_string())?;
    let time = TimeOfDay::from_str(time).map_err(|e| e.to_string())?;
    CivilDateTime::new(date, time, utc_offset).map_err(|e| e.to_string())
}

fn print_json<T: Serialize>(value: &T) {
    println!("{}", or_exit(serde_json::to_string_pretty(value)));
}

fn civil_date(jd: f64, utc_offset: f64) -> String {
    CivilDateTime::from_julian_day(jd, utc_offset)
        .map(|dt| dt.date.to_string())
        .unwrap_or_else(|_| format!("JD {jd:.4}"))
}

fn lords_columns(l: &Lordship) -> String {
    format!(
        "{:<12} {:<8} {:<8} {:<8} {:<8} {}",
        l.star.star.name(),
        l.sign.lord,
        l.star.lord,
        l.sub.lord,
        l.sub_sub.lord,
        l.star.pada
    )
}

const LORDS_HEADER: &str = "Star         SignL    StarL    SubL     SSubL    Pada";

fn print_chart(chart: &ChartResult) {
    let loc = &chart.location;
    println!(
        "{} at {} ({:.4}, {:.4})",
        chart.datetime, loc.name, loc.latitude, loc.longitude
    );
    println!(
        "JD {:.6}   Ayanamsa {} ({})   Houses {}",
        chart.julian_day, chart.ayanamsa.dms, chart.ayanamsa.label, chart.house_system
    );
    println!();
    println!("{:<10} {:<24} {}", "Angle", "Longitude", LORDS_HEADER);
    for (name, point) in [("Ascendant", &chart.ascendant), ("Midheaven", &chart.midheaven)] {
        println!(
            "{:<10} {:<24} {}",
            name,
            point.longitude_dms,
            lords_columns(&point.lordship)
        );
    }
    println!();
    println!("{:<10} {:<24} {} R  House", "Planet", "Longitude", LORDS_HEADER);
    for p in &chart.planets {
        println!(
            "{:<10} {:<24} {}    {}  {}",
            p.graha.english_name(),
            p.point.longitude_dms,
            lords_columns(&p.point.lordship),
            if p.retrograde { "R" } else { " " },
            p.house
        );
    }
    println!();
    println!("{:<10} {:<24} {}", "Cusp", "Longitude", LORDS_HEADER);
    for c in &chart.cusps {
        println!(
            "{:<10} {:<24} {}",
            c.house,
            c.point.longitude_dms,
            lords_columns(&c.point.lordship)
        );
    }
    if let Some(dasha) = &chart.dasha {
        println!();
        print_dasha(dasha, loc.utc_offset, false);
    }
}

fn print_dasha(report: &DashaReport, utc_offset: f64, with_antardashas: bool) {
    let b = &report.balance;
    println!(
        "Dasha balance: {} {:.4} years (Moon {:.4} deg into {})",
        b.lord,
        b.balance_years,
        b.position_in_star_deg,
        b.nakshatra.name()
    );
    match &report.current {
        Some(current) => println!("Current: {}", current.label),
        None => println!("Current: outside the computed periods"),
    }
    println!();
    for m in &report.mahadashas {
        println!(
            "{:<8} {} to {}  ({:.2} years)",
            m.period.lord,
            civil_date(m.period.start_jd, utc_offset),
            civil_date(m.period.end_jd, utc_offset),
            m.period.duration_years()
        );
        if with_antardashas {
            for a in &m.antardashas {
                println!(
                    "    {:<8} {} to {}",
                    a.lord,
                    civil_date(a.start_jd, utc_offset),
                    civil_date(a.end_jd, utc_offset)
                );
            }
        }
    }
}

fn print_horary_entry(e: &HoraryEntry) {
    println!(
        "{:>3}  {:<22} {:<22} {:<12} {:<8} {:<18} {:<8} {}",
        e.index,
        format_longitude(e.start_deg),
        format_longitude(e.end_deg),
        e.sign.western_name(),
        e.sign_lord,
        e.star.name(),
        e.star_lord,
        e.sub_lord
    );
}

const HORARY_HEADER: &str = "  #  Start                  End                    Sign         SignL    Star               StarL    SubL";

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = or_exit(load_config(cli.config.as_deref()));
    or_exit(apply_overrides(
        &mut config,
        cli.ayanamsa.as_deref(),
        cli.ayanamsa_value,
    ));
    let engine: EngineConfig = config.engine();
    let provider = AnalyticEphemeris::new();
    debug!(?engine, "configuration ready");

    match cli.command {
        Commands::Chart {
            date,
            time,
            place,
            no_dasha,
            dasha_at,
        } => {
            let location = or_exit(resolve_place(&config, &place));
            let dt = or_exit(parse_datetime(&date, &time, location.utc_offset));
            let mut request = ChartRequest::new(dt, location);
            if no_dasha {
                request = request.without_dasha();
            }
            if let Some(at) = dasha_at {
                let q = or_exit(CivilDateTime::parse(&at, request.location.utc_offset));
                request = request.with_dasha_query(q.to_julian_day());
            }
            let chart = or_exit(calculate_chart(&provider, &request, &engine));
            if cli.json {
                print_json(&chart);
            } else {
                print_chart(&chart);
            }
        }

        Commands::Dasha {
            date,
            time,
            place,
            moon,
            at,
        } => {
            let location = or_exit(resolve_place(&config, &place));
            let birth = or_exit(parse_datetime(&date, &time, location.utc_offset));
            let query = at
                .map(|s| or_exit(CivilDateTime::parse(&s, location.utc_offset)).to_julian_day());
            let report = match moon {
                Some(m) => or_exit(dasha_report(m, birth.to_julian_day(), query, &engine.dasha)),
                None => or_exit(dasha_for_birth(&provider, &birth, query, &engine)),
            };
            if cli.json {
                print_json(&report);
            } else {
                print_dasha(&report, location.utc_offset, true);
            }
        }

        Commands::Horary {
            index,
            date,
            place,
            judgment,
        } => {
            let location = or_exit(resolve_place(&config, &place));
            let judgment = match judgment {
                Some(s) => or_exit(CivilDateTime::parse(&s, location.utc_offset)),
                None => or_exit(CivilDateTime::now(location.utc_offset)),
            };
            let date = match date {
                Some(s) => or_exit(CivilDate::from_str(&s)),
                None => judgment.date,
            };
            let request = HoraryRequest {
                index,
                date,
                location,
                judgment: Some(judgment),
            };
            let horary = or_exit(horary_chart(&provider, &request, &engine));
            if cli.json {
                print_json(&horary);
            } else {
                println!("{HORARY_HEADER}");
                print_horary_entry(&horary.entry);
                match horary.search.time() {
                    Some(t) => println!(
                        "Ascendant reaches {} at {}",
                        horary.target_ascendant.longitude_dms, t
                    ),
                    None => println!(
                        "Ascendant does not reach {} on {}",
                        horary.target_ascendant.longitude_dms, date
                    ),
                }
                println!();
                print_chart(&horary.chart);
            }
        }

        Commands::HoraryTime { index, date, place } => {
            let location = or_exit(resolve_place(&config, &place));
            let date = or_exit(CivilDate::from_str(&date));
            let time = or_exit(horary_time(index, date, &location, &engine));
            if cli.json {
                print_json(&time);
            } else {
                println!("{time}");
            }
        }

        Commands::HoraryTable { index } => {
            let entries: Vec<&HoraryEntry> = match index {
                Some(i) => vec![or_exit(horary_entry(i))],
                None => horary_table().iter().collect(),
            };
            if cli.json {
                print_json(&entries);
            } else {
                println!("{HORARY_HEADER}");
                for e in entries {
                    print_horary_entry(e);
                }
            }
        }

        Commands::Ayanamsa { date, time, tz } => {
            let dt = or_exit(parse_datetime(&date, &time, tz));
            let aya = or_exit(config.ayanamsa.evaluate(dt.to_julian_day()));
            if cli.json {
                print_json(&aya);
            } else {
                println!("{} ({:.6} deg) {}", format_dms(aya.value_deg), aya.value_deg, aya.label);
            }
        }

        Commands::Lordship { lon } => {
            let l = lordship(lon);
            if cli.json {
                print_json(&l);
            } else {
                println!("{}", format_longitude(l.longitude_deg));
                println!("Sign     {} ({})", l.sign.sign.western_name(), l.sign.lord);
                println!("Star     {} pada {} ({})", l.star.star.name(), l.star.pada, l.star.lord);
                println!(
                    "Sub      {} [{} - {})",
                    l.sub.lord,
                    format_dms(l.sub.start_deg),
                    format_dms(l.sub.end_deg)
                );
                println!(
                    "Sub-sub  {} [{} - {})",
                    l.sub_sub.lord,
                    format_dms(l.sub_sub.start_deg),
                    format_dms(l.sub_sub.end_deg)
                );
            }
        }

        Commands::Locations => {
            let gazetteer = config.gazetteer();
            let locations: Vec<(String, GeoLocation)> = gazetteer
                .keys()
                .into_iter()
                .filter_map(|k| gazetteer.lookup(&k).map(|loc| (k, loc)))
                .collect();
            if cli.json {
                print_json(&locations);
            } else {
                for (key, loc) in &locations {
                    println!(
                        "{:<14} {:<16} {:>8.4} {:>9.4}  UTC{:+}",
                        key, loc.name, loc.latitude, loc.longitude, loc.utc_offset
                    );
                }
            }
        }

        Commands::Dms { deg } => {
            let d = deg_to_dms(deg.abs());
            if cli.json {
                print_json(&serde_json::json!({
                    "dms": format_dms(deg),
                    "degrees": d.degrees,
                    "minutes": d.minutes,
                    "seconds": d.seconds,
                }));
            } else {
                println!("{}", format_dms(deg));
            }
        }

        Commands::Jd {
            date,
            time,
            tz,
            from_jd,
        } => match (from_jd, date) {
            (Some(jd), _) => {
                let dt = or_exit(CivilDateTime::from_julian_day(jd, tz));
                if cli.json {
                    print_json(&dt);
                } else {
                    println!("{dt}");
                }
            }
            (None, Some(date)) => {
                let jd = or_exit(parse_datetime(&date, &time, tz)).to_julian_day();
                if cli.json {
                    print_json(&jd);
                } else {
                    println!("{jd:.6}");
                }
            }
            (None, None) => or_exit(Err::<(), _>("--date or --from-jd is required")),
        },
    }
}
