use chrono::NaiveDateTime;
use csv::Reader;
use indicator_core::common::time::Time;
use indicator_core::common::utils::fmt_opt;
use indicator_core::{Candle, IndicatorConfig, Session, TimeSeries};
use std::error::Error;
use std::fs::File;
use std::path::Path;

#[derive(Debug)]
struct CsvRecord {
    timestamp: NaiveDateTime,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    volume: f64,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().collect();
    let data_dir = args.get(1).map(String::as_str).unwrap_or("./data");
    let data_dir = Path::new(data_dir);

    // Optional JSON config overrides as the second argument
    let config = match args.get(2) {
        Some(json) => IndicatorConfig::new(Some(serde_json::from_str(json)?))?,
        None => IndicatorConfig::new(None)?,
    };

    for entry in std::fs::read_dir(data_dir)? {
        let entry = entry?;
        let path = entry.path();

        if path.extension().and_then(|s| s.to_str()) == Some("csv") {
            println!("Processing file: {:?}", path);
            process_csv_file(&path, &config)?;
        }
    }

    Ok(())
}

fn process_csv_file(path: &Path, config: &IndicatorConfig) -> Result<(), Box<dyn Error>> {
    let file = File::open(path)?;
    let mut rdr = Reader::from_reader(file);
    let mut records = Vec::new();

    for result in rdr.records() {
        let record = result?;
        records.push(parse_csv_record(&record)?);
    }

    if records.is_empty() {
        println!("No data found in {:?}", path);
        return Ok(());
    }

    // Sort by timestamp
    records.sort_by_key(|r| r.timestamp);

    let mut candles = Vec::with_capacity(records.len());
    for r in &records {
        let time = Time::new(r.timestamp.timestamp());
        let candle = if config.kl_data_check {
            Candle::new(time, r.open, r.high, r.low, r.close, r.volume, config.autofix)?
        } else {
            Candle::raw(time, r.open, r.high, r.low, r.close, r.volume)
        };
        candles.push(candle);
    }

    let series = TimeSeries::new(candles)?;
    let mut session = Session::new(series, config.clone());
    session.compute()?;

    println!("Number of records: {}", session.series().len());
    println!(
        "First timestamp: {}",
        session.series().first().map(|c| c.time.to_str()).unwrap_or_default()
    );
    println!(
        "Last timestamp: {}",
        session.series().last().map(|c| c.time.to_str()).unwrap_or_default()
    );

    for id in session.column_ids() {
        let column = session.columns().get(id).expect("computed column");
        println!(
            "{}: {} defined, last = {}",
            id,
            column.defined_count(),
            fmt_opt(column.last_defined())
        );
    }

    if config.print_warning {
        for diagnostic in session.diagnostics() {
            println!("{}", diagnostic);
        }
    }

    // Annotation for the most recent bar, as the cursor would show it
    let last_index = session.series().len() - 1;
    if let Some(resolved) = session.resolve_cursor(last_index as f64) {
        println!("--- {} ---", resolved.time.to_str());
        println!("{}", resolved.annotation());
    }

    Ok(())
}

fn parse_csv_record(record: &csv::StringRecord) -> Result<CsvRecord, Box<dyn Error>> {
    let timestamp = NaiveDateTime::parse_from_str(&record[0], "%Y-%m-%d %H:%M:%S")?;

    Ok(CsvRecord {
        timestamp,
        open: record[1].parse()?,
        high: record[2].parse()?,
        low: record[3].parse()?,
        close: record[4].parse()?,
        volume: record[5].parse()?,
    })
}
