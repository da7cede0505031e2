use clap::{value_parser, Arg, ArgAction, Command as ClapCommand};
use log::{error, LevelFilter};
use std::process;

use metrokit::commands::{CommandFactory, MetroCommandFactory};
use metrokit::utils::logger::Logger;

/// Two required coordinate positionals accepting negative numbers
fn coordinate_args(cmd: ClapCommand, first: (&'static str, &'static str), second: (&'static str, &'static str)) -> ClapCommand {
    cmd.arg(
        Arg::new(first.0)
            .help(first.1)
            .required(true)
            .allow_negative_numbers(true)
            .value_parser(value_parser!(f64))
            .index(1),
    )
    .arg(
        Arg::new(second.0)
            .help(second.1)
            .required(true)
            .allow_negative_numbers(true)
            .value_parser(value_parser!(f64))
            .index(2),
    )
}

fn main() {
    let matches = ClapCommand::new("metrokit")
        .version("0.1.0")
        .about("Lambert 93 / WGS84 conversion and Paris metro data preparation")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .help("TOML file describing the coordinate systems")
                .value_name("FILE")
                .global(true)
                .required(false),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Write log output to this file instead of stderr")
                .value_name("FILE")
                .global(true)
                .required(false),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommand(coordinate_args(
            ClapCommand::new("to-geographic").about("Convert Lambert 93 x,y to latitude,longitude"),
            ("x", "Lambert 93 easting in metres"),
            ("y", "Lambert 93 northing in metres"),
        ))
        .subcommand(coordinate_args(
            ClapCommand::new("to-projected").about("Convert latitude,longitude to Lambert 93 x,y"),
            ("lat", "Latitude in degrees"),
            ("lon", "Longitude in degrees"),
        ))
        .subcommand(coordinate_args(
            ClapCommand::new("transform")
                .about("Transform a point between two registered coordinate systems")
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source system (EPSG code or configured identifier)")
                        .value_name("CRS")
                        .required(true),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target system (EPSG code or configured identifier)")
                        .value_name("CRS")
                        .required(true),
                ),
            ("a", "First coordinate (longitude or x)"),
            ("b", "Second coordinate (latitude or y)"),
        ))
        .subcommand(
            ClapCommand::new("build")
                .about("Normalize the raw exports and combine them into metro stations")
                .arg(
                    Arg::new("source")
                        .long("source")
                        .help("Directory holding the raw JSON exports")
                        .value_name("DIR")
                        .default_value("source_data_files"),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .help("Directory receiving the generated files")
                        .value_name("DIR")
                        .default_value("generated_data_files"),
                ),
        )
        .subcommand(
            ClapCommand::new("check")
                .about("Compare stored access coordinates with converted ones")
                .arg(
                    Arg::new("file")
                        .help("Combined station file")
                        .value_name("FILE")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("tolerance")
                        .long("tolerance")
                        .help("Deviation in metres above which an access is reported")
                        .value_name("METERS")
                        .value_parser(value_parser!(f64))
                        .default_value("5"),
                ),
        )
        .get_matches();

    let level = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let logger = match matches.get_one::<String>("log-file") {
        Some(path) => match Logger::new(path) {
            Ok(l) => {
                let l = l.with_level(level);
                l.init_global_logger();
                l
            }
            Err(e) => {
                eprintln!("Error initializing logger: {}", e);
                process::exit(1);
            }
        },
        None => {
            env_logger::Builder::new()
                .filter_level(level)
                .parse_default_env()
                .init();
            Logger::disabled()
        }
    };

    let factory = MetroCommandFactory::new();

    let command_result = factory.create_command(&matches, &logger);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
