use crate::analyzers::DatasetAnalyzer;
use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::processors::Aggregator;
use crate::utils::progress::ProgressReporter;
use crate::writers::SummaryWriter;

pub fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or_else(Commands::default_build);

    match command {
        Commands::Build {
            input_dir,
            output_file,
            start_year,
            end_year,
            max_workers,
        } => {
            println!("Aggregating GSOD station data...");
            println!("Input directory: {}", input_dir.display());
            println!("Output file: {}", output_file.display());
            println!(
                "Years: {} to {}, Workers: {}",
                start_year, end_year, max_workers
            );

            let total_years = u64::from(end_year.saturating_sub(start_year)) + 1;
            let progress = ProgressReporter::new(total_years, "Aggregating years...", false);

            let aggregator = Aggregator::new(&input_dir)
                .with_years(start_year, end_year)
                .with_max_workers(max_workers);

            let dataset = aggregator.build_dataset(Some(&progress))?;
            progress
                .finish_with_message(&format!("Aggregated {} year-state entries", dataset.len()));

            println!(
                "\nWriting {} entries to {}...",
                dataset.len(),
                output_file.display()
            );

            // Create output directory if it doesn't exist
            if let Some(parent) = output_file.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let writer = SummaryWriter::new();
            writer.write_records(&dataset, &output_file)?;

            let file_info = writer.file_info(&output_file)?;
            println!("\n{}", file_info.summary());

            println!("Aggregation complete!");
        }

        Commands::Info { file, sample, json } => {
            let writer = SummaryWriter::new();
            let records = writer.read_records(&file)?;

            let analyzer = DatasetAnalyzer::new();
            let stats = analyzer.analyze(&records)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
                return Ok(());
            }

            println!("Analyzing summary dataset: {}", file.display());
            println!("\n{}", stats.detailed_summary());

            let file_info = writer.file_info(&file)?;
            println!("\nFile Details:");
            println!("{}", file_info.summary());

            if sample > 0 {
                println!("\nSample Entries (showing up to {}):", sample);
                for (i, record) in records.iter().take(sample).enumerate() {
                    println!(
                        "{}. {} {}: temp={:.1}, dewp={:.1}, wdsp={:.1}, max={:.1}",
                        i + 1,
                        record.year,
                        record.state,
                        record.temp,
                        record.dewp,
                        record.wdsp,
                        record.max
                    );
                }
            }
        }
    }

    Ok(())
}
