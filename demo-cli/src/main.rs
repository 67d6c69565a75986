use calc_kit_core::chem::{molecular_weight, parse_formula};
use calc_kit_core::golf::{handicap_index, Round};
use calc_kit_core::resistor::{
    bands_to_value, format_engineering, parse_resistance, value_to_bands, BandCount,
};
use calc_kit_core::timezone::{convert_between_zones, lookup_zone, WallTime};
use calc_kit_core::tire::{compare, parse_tire_size, suggest_equivalents};
use calc_kit_core::units::{convert, Category};
use calc_kit_core::weather::{
    dew_point_c, dew_point_category, heat_index_category, heat_index_f, wind_chill,
    wind_chill_category,
};
use clap::{Parser, Subcommand};

/// Everyday conversion and reference calculators
#[derive(Parser, Debug)]
#[command(name = "calc-kit")]
#[command(about = "Unit conversion, resistor codes, tire sizes, and more", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a value between units within a category
    Convert {
        value: f64,
        from: String,
        to: String,
        /// Quantity category (length, mass, volume, area, time, speed,
        /// temperature, density, molarity)
        #[arg(short, long)]
        category: String,
    },
    /// Encode a resistance as color bands and show the decoded value
    Resistor {
        /// Resistance, plain ohms or marking notation like 4k7 or 10M
        value: String,
        /// Use a 5-band code with three significant digits
        #[arg(long)]
        five_band: bool,
    },
    /// Show tire geometry and near-equivalent sizes
    Tire {
        /// Metric size label such as 205/55R16
        size: String,
        /// A second size to compare against
        #[arg(short = 'a', long)]
        against: Option<String>,
        /// Reference speed in mph for the speedometer comparison
        #[arg(short, long, default_value_t = 60.0)]
        speed: f64,
    },
    /// Molecular weight of a chemical formula
    Formula { formula: String },
    /// Handicap index from score,rating,slope triples
    Handicap {
        /// Rounds written as score,rating,slope, for example 85,72.0,130
        #[arg(required = true)]
        rounds: Vec<String>,
    },
    /// Convert a wall-clock time between IANA time zones
    Timezone {
        /// Local time as YYYY-MM-DDTHH:MM
        time: String,
        from: String,
        to: String,
    },
    /// Weather comfort indices for a set of conditions
    Weather {
        /// Air temperature in °F
        #[arg(short, long)]
        temperature: f64,
        /// Relative humidity in percent
        #[arg(long, default_value_t = 50.0)]
        humidity: f64,
        /// Wind speed in mph
        #[arg(short, long, default_value_t = 0.0)]
        wind: f64,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    if let Err(err) = run(args.command) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

#[allow(clippy::too_many_lines)]
fn run(command: Command) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::Convert {
            value,
            from,
            to,
            category,
        } => {
            let result = convert(value, &from, &to, category.parse::<Category>()?)?;
            println!("{value} {from} = {result} {to}");
        }
        Command::Resistor { value, five_band } => {
            let ohms = parse_resistance(&value)?;
            let count = if five_band { BandCount::Five } else { BandCount::Four };
            let bands = value_to_bands(ohms, count)?;
            let decoded = bands_to_value(&bands.digits, bands.multiplier, Some(bands.tolerance))?;
            let names: Vec<String> = bands
                .digits
                .iter()
                .map(|b| format!("{b:?}").to_lowercase())
                .collect();
            println!("{} =", format_engineering(ohms));
            println!(
                "  bands: {} | {:?} | {:?}",
                names.join(" "),
                bands.multiplier,
                bands.tolerance
            );
            println!(
                "  reads back as {} ±{}%",
                format_engineering(decoded.ohms),
                decoded.tolerance_fraction * 100.0
            );
        }
        Command::Tire {
            size,
            against,
            speed,
        } => {
            let spec = parse_tire_size(&size).ok_or("unrecognized tire size")?;
            println!("{}:", spec.size_label());
            println!("  diameter: {:.1} mm ({:.2} in)", spec.diameter_mm, spec.diameter_in);
            println!("  sidewall: {:.1} mm", spec.sidewall_mm);
            println!("  circumference: {:.1} mm", spec.circumference_mm);
            println!("  revolutions/mile: {:.1}", spec.revs_per_mile);
            if let Some(other) = against {
                let b = parse_tire_size(&other).ok_or("unrecognized comparison size")?;
                let cmp = compare(&spec, &b, speed);
                println!("vs {}:", b.size_label());
                println!(
                    "  diameter change: {:+.1} mm ({:+.2}%)",
                    cmp.diameter_delta_mm, cmp.diameter_delta_percent
                );
                println!(
                    "  at an indicated {speed:.1}, true speed is {:.1}",
                    cmp.actual_speed_at_indicated
                );
            } else {
                println!("equivalent sizes:");
                for s in suggest_equivalents(&spec) {
                    println!("  {} ({:.1} mm diameter)", s.size_label(), s.diameter_mm);
                }
            }
        }
        Command::Formula { formula } => {
            let counts = parse_formula(&formula)?;
            let weight = molecular_weight(&formula)?;
            let parts: Vec<String> = counts.iter().map(|(el, n)| format!("{el}x{n}")).collect();
            println!("{formula}: {} = {weight:.4} g/mol", parts.join(" "));
        }
        Command::Handicap { rounds } => {
            let mut parsed = Vec::with_capacity(rounds.len());
            for entry in &rounds {
                let fields: Vec<&str> = entry.split(',').collect();
                if fields.len() != 3 {
                    return Err(format!("expected score,rating,slope, got {entry}").into());
                }
                parsed.push(Round {
                    score: fields[0].trim().parse()?,
                    rating: fields[1].trim().parse()?,
                    slope: fields[2].trim().parse()?,
                });
            }
            match handicap_index(&parsed) {
                Some(index) => println!("handicap index: {index:.1}"),
                None => println!("need at least 3 valid rounds, got {}", parsed.len()),
            }
        }
        Command::Timezone { time, from, to } => {
            let wall = parse_wall_time(&time)?;
            let from_zone = lookup_zone(&from)?;
            let to_zone = lookup_zone(&to)?;
            let parts = convert_between_zones(wall, from_zone, to_zone)?;
            println!(
                "{}-{:02}-{:02} {:02}:{:02} {} ({:?}, UTC{:+.1})",
                parts.year,
                parts.month,
                parts.day,
                parts.hour,
                parts.minute,
                to,
                parts.weekday,
                f64::from(parts.utc_offset_seconds) / 3600.0
            );
        }
        Command::Weather {
            temperature,
            humidity,
            wind,
        } => {
            let hi = heat_index_f(temperature, humidity)?;
            let hi_cat = heat_index_category(hi);
            println!("heat index: {hi:.1} °F ({}: {})", hi_cat.label, hi_cat.note);

            let wc = wind_chill(temperature, wind)?;
            let wc_cat = wind_chill_category(wc.value_f);
            if wc.within_validity {
                println!("wind chill: {:.1} °F ({})", wc.value_f, wc_cat.label);
            } else {
                println!("wind chill: not applicable at these conditions");
            }

            let temp_c = (temperature - 32.0) * 5.0 / 9.0;
            let dp_c = dew_point_c(temp_c, humidity)?;
            let dp_f = dp_c * 9.0 / 5.0 + 32.0;
            let dp_cat = dew_point_category(dp_f);
            println!("dew point: {dp_f:.1} °F ({}: {})", dp_cat.label, dp_cat.note);
        }
    }
    Ok(())
}

fn parse_wall_time(text: &str) -> Result<WallTime, Box<dyn std::error::Error>> {
    let (date, clock) = text
        .split_once(['T', ' '])
        .ok_or("expected YYYY-MM-DDTHH:MM")?;
    let date_fields: Vec<&str> = date.split('-').collect();
    let clock_fields: Vec<&str> = clock.split(':').collect();
    if date_fields.len() != 3 || !(2..=3).contains(&clock_fields.len()) {
        return Err("expected YYYY-MM-DDTHH:MM".into());
    }
    Ok(WallTime {
        year: date_fields[0].parse()?,
        month: date_fields[1].parse()?,
        day: date_fields[2].parse()?,
        hour: clock_fields[0].parse()?,
        minute: clock_fields[1].parse()?,
        second: clock_fields.get(2).map_or(Ok(0), |s| s.parse())?,
    })
}
