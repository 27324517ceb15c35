use char_similarity::{calculate_all_similarities, Error};
use log::{error, warn};
use std::io;

fn print_similarities(string_one: &str, string_two: &str) -> Result<(), Error> {
    for (algorithm, score) in calculate_all_similarities(string_one, string_two)? {
        println!(
            "[{}] {} and {} are {:.2}% similar",
            algorithm,
            string_one,
            string_two,
            score * 100.0
        );
    }

    Ok(())
}

/// Score every two-column row of a headerless CSV document.
fn print_similarities_from_csv<R: io::Read>(reader: R) -> Result<(), Box<dyn std::error::Error>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    for record in csv_reader.records() {
        let record = record?;
        match (record.get(0), record.get(1), record.len()) {
            (Some(string_one), Some(string_two), 2) => {
                print_similarities(string_one, string_two)?;
            }
            _ => warn!("Skipping invalid row: {:?}", record),
        }
    }

    Ok(())
}

fn main() {
    #[cfg(feature = "logger-support")]
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let result: Result<(), Box<dyn std::error::Error>> = match args.as_slice() {
        [string_one, string_two] => print_similarities(string_one, string_two).map_err(Box::from),
        [] => print_similarities_from_csv(io::stdin().lock()),
        _ => {
            eprintln!("Usage: char-similarity-cli [STRING_ONE STRING_TWO] (or CSV pairs on stdin)");
            std::process::exit(2);
        }
    };

    if let Err(e) = result {
        error!("Error calculating similarities: {}", e);
        std::process::exit(1);
    }
}
