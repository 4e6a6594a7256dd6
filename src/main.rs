use bmi::config::{Config, OutputFormat};
use bmi::engine;
use bmi::format;
use bmi::session::{self, Command, Session, View};
use bmi::units::UnitSystem;
use clap::{Parser, Subcommand};
use std::io::{BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bmi")]
#[command(about = "Body Mass Index calculator", long_about = None)]
struct Cli {
    /// Config file (default: ./bmi.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// No log output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate BMI from height and weight
    Calc {
        /// Height (cm for metric, in for imperial)
        #[arg(allow_hyphen_values = true)]
        height: String,

        /// Weight (kg for metric, lb for imperial)
        #[arg(allow_hyphen_values = true)]
        weight: String,

        /// Measurement system (default: from config)
        #[arg(short, long, value_enum)]
        system: Option<UnitSystem>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,

        /// Don't color the classification
        #[arg(long)]
        no_color: bool,
    },

    /// Classify an already computed BMI value
    Classify {
        /// BMI value
        #[arg(allow_negative_numbers = true)]
        bmi: f64,
    },

    /// Show accepted height and weight ranges
    Ranges {
        /// Only this system (default: both)
        #[arg(short, long, value_enum)]
        system: Option<UnitSystem>,
    },

    /// Interactive calculator session
    Session {
        /// Starting measurement system (default: from config)
        #[arg(short, long, value_enum)]
        system: Option<UnitSystem>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose, cli.quiet);

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let outcome = match cli.command {
        Commands::Calc {
            height,
            weight,
            system,
            json,
            no_color,
        } => {
            let system = system.unwrap_or(config.default_system);
            let output = if json {
                OutputFormat::Json
            } else {
                config.output
            };
            calculate(system, &height, &weight, output, config.color && !no_color)
        }
        Commands::Classify { bmi } => classify(bmi),
        Commands::Ranges { system } => show_ranges(system),
        Commands::Session { system } => {
            let mut session = Session::from_config(&config);
            if let Some(system) = system {
                session.select_unit_system(system);
            }
            run_session(&mut session, &config)
        }
    };

    if let Err(e) = outcome {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logger(verbosity: u8, quiet: bool) {
    use log::LevelFilter;

    let level = if quiet {
        LevelFilter::Off
    } else {
        match verbosity {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    let mut builder = env_logger::Builder::from_default_env();
    // RUST_LOG stays in charge unless a flag asks for something specific
    if quiet || verbosity > 0 || std::env::var_os("RUST_LOG").is_none() {
        builder.filter_level(level);
    }
    builder.format_timestamp_secs().try_init().ok();
}

fn load_config(path: Option<&std::path::Path>) -> Result<Config, Box<dyn std::error::Error>> {
    let cwd = std::env::current_dir()?;
    Ok(Config::discover(path, &cwd)?)
}

fn calculate(
    system: UnitSystem,
    height: &str,
    weight: &str,
    output: OutputFormat,
    color: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    match engine::calculate_from_text(system, height, weight) {
        Ok(result) => {
            match output {
                OutputFormat::Json => println!("{}", format::format_result_json(&result)),
                OutputFormat::Text => println!("{}", format::format_result_text(&result, color)),
            }
            Ok(())
        }
        Err(e) => {
            // JSON callers get the structured report on stdout as well
            if output == OutputFormat::Json {
                println!("{}", format::format_error_json(&e));
            }
            Err(e.into())
        }
    }
}

fn classify(bmi: f64) -> Result<(), Box<dyn std::error::Error>> {
    let classification = engine::classify_checked(bmi)?;
    println!("{}", classification);
    println!("{}", engine::advice_for(classification));
    Ok(())
}

fn show_ranges(system: Option<UnitSystem>) -> Result<(), Box<dyn std::error::Error>> {
    let systems = match system {
        Some(system) => vec![system],
        None => vec![UnitSystem::Metric, UnitSystem::Imperial],
    };

    for system in systems {
        println!("{}", format::format_ranges(system));
    }
    Ok(())
}

fn run_session(session: &mut Session, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    println!("BMI Calculator");
    println!("Measurement system: {}", session.unit_system().label());
    println!("Type 'help' for commands.");

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF
            println!();
            return Ok(());
        }
        if line.trim().is_empty() {
            continue;
        }

        let command = match session::parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        // The results screen only offers going back, showing and leaving
        let editing = matches!(
            command,
            Command::Unit(_)
                | Command::Height(_)
                | Command::Weight(_)
                | Command::Calculate
                | Command::Clear
        );
        if editing && session.view() == View::Results {
            println!("Type 'back' to return to the calculator.");
            continue;
        }

        match command {
            Command::Unit(system) => {
                session.select_unit_system(system);
                println!("Measurement system: {}", system.label());
            }
            Command::Height(text) => {
                session.set_height(text);
                println!("Height: {} {}", session.height_text(), session.height_unit());
            }
            Command::Weight(text) => {
                session.set_weight(text);
                println!("Weight: {} {}", session.weight_text(), session.weight_unit());
            }
            Command::Calculate => match session.calculate() {
                Ok(result) => match config.output {
                    OutputFormat::Json => println!("{}", format::format_result_json(result)),
                    OutputFormat::Text => {
                        println!("{}", format::format_result_text(result, config.color))
                    }
                },
                Err(e) => match config.output {
                    OutputFormat::Json => println!("{}", format::format_error_json(&e)),
                    OutputFormat::Text => println!("{}", format::format_error_text(&e)),
                },
            },
            Command::Clear => {
                session.clear_inputs();
                println!("Inputs cleared.");
            }
            Command::Back => session.back_to_input(),
            Command::Show => show_session(session, config.color),
            Command::Help => println!("{}", session::command::HELP),
            Command::Quit => return Ok(()),
        }
    }
}

fn show_session(session: &Session, color: bool) {
    println!("Measurement system: {}", session.unit_system().label());
    println!("Height: {} {}", session.height_text(), session.height_unit());
    println!("Weight: {} {}", session.weight_text(), session.weight_unit());
    if let Some(result) = session.result() {
        println!();
        println!("{}", format::format_result_text(result, color));
    }
}
