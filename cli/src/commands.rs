use clap::{Arg, ArgAction, Command};

fn arg_verbose() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Debug mode")
}

fn arg_threads() -> Arg {
    Arg::new("threads")
        .short('t')
        .long("threads")
        .value_name("THREADS")
        .default_value("1")
        .value_parser(clap::value_parser!(usize))
        .help("number of threads")
}

fn arg_metadata() -> Arg {
    Arg::new("gtdb_metadata")
        .short('m')
        .long("gtdb-metadata")
        .value_name("TSV")
        .required(true)
        .help("GTDB metadata table (tab-separated).")
}

fn filter_args() -> [Arg; 3] {
    [
        Arg::new("completeness")
            .long("completeness")
            .value_name("PERCENT")
            .default_value("0")
            .value_parser(clap::value_parser!(f64))
            .help("Discard genomes with completeness less than [completeness]."),
        Arg::new("contamination")
            .long("contamination")
            .value_name("PERCENT")
            .default_value("100")
            .value_parser(clap::value_parser!(f64))
            .help("Discard genomes with contamination more than [contamination]."),
        Arg::new("gtdb_representative")
            .long("gtdb-representative")
            .action(ArgAction::SetTrue)
            .help("Use only GTDB species representatives."),
    ]
}

fn subcommand_subsample() -> Command {
    Command::new("subsample")
        .version("0.1")
        .author("Bansho Masutani")
        .about("Pick a taxonomically balanced subset of the genomes in a GTDB metadata table.")
        .arg(arg_verbose())
        .arg(arg_threads())
        .arg(arg_metadata())
        .arg(
            Arg::new("sampling_scheme")
                .short('s')
                .long("sampling-scheme")
                .value_name("TOML|JSON")
                .required(true)
                .help("Sampling scheme. Maps a taxon (or `all`) to `sampling_level` and `taxa`."),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("PATH")
                .required(true)
                .help("Output table (tab-separated)."),
        )
        .args(filter_args())
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_name("SEED")
                .value_parser(clap::value_parser!(u64))
                .help("Seed value for random number generators. If not given, results vary among runs."),
        )
}

fn subcommand_stats() -> Command {
    Command::new("stats")
        .version("0.1")
        .author("Bansho Masutani")
        .about("Write stats of a (filtered) GTDB metadata table.")
        .arg(arg_verbose())
        .arg(arg_threads())
        .arg(arg_metadata())
        .args(filter_args())
        .arg(
            Arg::new("file")
                .long("file")
                .short('f')
                .value_name("FILE")
                .help("Write stats to FILE instead of the stdout."),
        )
}

fn subcommand_pipeline() -> Command {
    Command::new("pipeline")
        .version("0.1")
        .author("Bansho Masutani")
        .about("Run filtering, subsampling, and reporting by a TOML profile.")
        .arg(
            Arg::new("profile")
                .short('p')
                .long("profile")
                .value_name("TOML")
                .required(true)
                .help("TOML configuration file. See `PipelineConfig` for the parameters."),
        )
}

pub fn gtdb_subsample_parser() -> Command {
    Command::new("gtdb_subsample")
        .version("0.1")
        .author("Bansho Masutani <ban-m@g.ecc.u-tokyo.ac.jp>")
        .about("Hierarchical, taxonomically stratified subsampling of GTDB genomes")
        .arg_required_else_help(true)
        .subcommand(subcommand_subsample())
        .subcommand(subcommand_stats())
        .subcommand(subcommand_pipeline())
}
