use anyhow::Context;
use definitions::*;
use gtdb_subsample_cli::pipeline::PipelineConfig;
use std::io::{BufWriter, Write};
use subsampler::*;
#[macro_use]
extern crate log;

fn main() {
    if let Err(why) = run() {
        eprintln!("Error: {:#}", why);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let matches = gtdb_subsample_cli::commands::gtdb_subsample_parser().get_matches();
    if let Some(("pipeline", sub_m)) = matches.subcommand() {
        let path: &String = sub_m
            .get_one("profile")
            .context("--profile is required")?;
        let file = std::fs::read_to_string(path).with_context(|| format!("opening {path}"))?;
        let config: PipelineConfig =
            toml::from_str(&file).with_context(|| format!("parsing {path}"))?;
        set_logger(config.verbose());
        set_threads(config.threads());
        gtdb_subsample_cli::pipeline::run_pipeline(&config)?;
        return Ok(());
    }
    if let Some((_, sub_m)) = matches.subcommand() {
        set_logger(sub_m.get_count("verbose") as usize);
        if let Some(&threads) = sub_m.get_one::<usize>("threads") {
            set_threads(threads);
        }
    }
    match matches.subcommand() {
        Some(("subsample", sub_m)) => subsample(sub_m),
        Some(("stats", sub_m)) => stats(sub_m),
        _ => unreachable!(),
    }
}

fn read_filtered_table(matches: &clap::ArgMatches) -> anyhow::Result<MetadataTable> {
    let path: &String = matches
        .get_one("gtdb_metadata")
        .context("--gtdb-metadata is required")?;
    let completeness = matches.get_one::<f64>("completeness").copied().unwrap_or(0f64);
    let contamination = matches.get_one::<f64>("contamination").copied().unwrap_or(100f64);
    let representative = matches.get_flag("gtdb_representative");
    let mut table = MetadataTable::entry(path, &MetadataColumns::default())
        .with_context(|| format!("reading {path}"))?;
    let config = RecordFilterConfig::new(completeness, contamination, representative);
    table.filter_records(&config);
    info!("FILTER\t{}\tRecords", table.len());
    Ok(table)
}

fn subsample(matches: &clap::ArgMatches) -> anyhow::Result<()> {
    debug!("START\tSubsample");
    let scheme: &String = matches
        .get_one("sampling_scheme")
        .context("--sampling-scheme is required")?;
    let output: &String = matches.get_one("output").context("--output is required")?;
    let seed: Option<u64> = matches.get_one("seed").copied();
    let rules = read_scheme(scheme).with_context(|| format!("reading {scheme}"))?;
    let table = read_filtered_table(matches)?;
    let config = SubsampleConfig::new(seed);
    let sampled = table.subsample(&rules, &config)?;
    info!("SUBSAMPLE\t{}\tRecords", sampled.len());
    sampled
        .extract_to_file(output)
        .with_context(|| format!("writing {output}"))?;
    Ok(())
}

fn stats(matches: &clap::ArgMatches) -> anyhow::Result<()> {
    debug!("START\tStats");
    let table = read_filtered_table(matches)?;
    match matches.get_one::<String>("file") {
        Some(file) => {
            write_atomically(file, |wtr| Ok(table.stats(wtr)?))
                .with_context(|| format!("writing {file}"))?;
        }
        None => {
            let stdout = std::io::stdout();
            let mut wtr = BufWriter::new(stdout.lock());
            table.stats(&mut wtr)?;
            wtr.flush()?;
        }
    }
    Ok(())
}

fn set_logger(verbose: usize) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn set_threads(threads: usize) {
    debug!("Set Threads\t{}", threads);
    if let Err(why) = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
    {
        debug!("{:?}", why);
    }
}
