use episim_core::{
    ContactGraph, ContactRecord, DayCount, EpiError, EpidemicState, Params, SimulationEngine,
    Snapshot, Status, daily_counts, logging::init_logging, random::seeded_rng,
    read_records_from_path,
};
use log::info;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

static SEED: u64 = 123;
const OUTPUT_DIR: &str = "output";

/// Built-in six-person contact ring: person 1 starts infected, everyone
/// else susceptible.
fn sample_records() -> Vec<ContactRecord> {
    let mut records = vec![ContactRecord::seeded("1", "2", Status::Infected, 0)];
    for (person, contact) in [("2", "3"), ("3", "4"), ("4", "5"), ("5", "6"), ("6", "1")] {
        records.push(ContactRecord::seeded(person, contact, Status::Susceptible, 0));
    }
    records
}

fn write_outputs(snapshots: &[Snapshot], counts: &[DayCount]) -> Result<(), EpiError> {
    std::fs::create_dir_all(OUTPUT_DIR)?;

    let mut count_writer =
        csv::Writer::from_path(PathBuf::from(OUTPUT_DIR).join("daily_counts.csv"))?;
    for count in counts {
        count_writer.serialize(count)?;
    }
    count_writer.flush()?;

    // One snapshot per line, for renderers that stream the run day by day.
    let file = std::fs::File::create(PathBuf::from(OUTPUT_DIR).join("snapshots.jsonl"))?;
    let mut snapshot_writer = BufWriter::new(file);
    for snapshot in snapshots {
        serde_json::to_writer(&mut snapshot_writer, snapshot)?;
        writeln!(&mut snapshot_writer)?;
    }
    snapshot_writer.flush()?;
    Ok(())
}

fn main() {
    init_logging(log::LevelFilter::Info);

    // Usage: outbreak_model [contacts.csv] [params.json]
    let mut args = std::env::args().skip(1);
    let records = match args.next() {
        Some(path) => read_records_from_path(&path).expect("Failed to load contact records"),
        None => sample_records(),
    };
    let params = match args.next() {
        Some(path) => Params::from_json_file(&path).expect("Failed to load parameters"),
        None => Params::default(),
    };

    let graph = ContactGraph::from_records(&records).expect("Failed to build contact graph");
    let initial = EpidemicState::from_records(&graph, &records);
    let engine = SimulationEngine::new(&graph, params).expect("Failed to configure engine");

    let snapshots = engine.run(&initial, &mut seeded_rng(SEED));
    let counts = daily_counts(&snapshots);
    write_outputs(&snapshots, &counts).expect("Failed to write outputs");

    info!(
        "simulated {} days over {} people, {} contacts",
        snapshots.len(),
        graph.node_count(),
        graph.edge_count()
    );
    if let Some(last) = counts.last() {
        info!(
            "final counts: {} susceptible, {} infected, {} recovered",
            last.susceptible, last.infected, last.recovered
        );
    }
}
