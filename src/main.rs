use std::env;
use std::error::Error;

use bellows::{BellowsConfig, ConfiguratorSession, Field};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let config = match env::args().nth(1) {
        Some(path) => BellowsConfig::from_file(path)?,
        None => BellowsConfig::default(),
    };
    let mut session = ConfiguratorSession::from_config(&config)?;

    session.set_text(Field::Diameter, "4");
    session.set_text(Field::Length, "10");

    let matches = session.matches();
    println!("{} part(s) within tolerance:", matches.len());
    for hit in matches.hits() {
        println!("  {:<16} score={:.3}", hit.part.part_number, hit.score);
    }

    if !session.next_part() {
        println!("no candidates for 4\" x 10\"");
        return Ok(());
    }
    session.set_cuff_style("U CUFF");

    for row in session.spec_sheet() {
        println!("{:<24} {}", row.label, row.value);
    }

    session.set_unit(Field::Diameter, "MM");
    println!(
        "diameter re-expressed: {} {}",
        session.field(Field::Diameter).text,
        session.field(Field::Diameter).unit
    );

    let model = session.schematic();
    println!(
        "schematic: {} primitives, {}",
        model.primitive_count(),
        serde_json::to_string(&model.title)?
    );

    Ok(())
}
