use clap::{Parser, Subcommand};
use osm_sign_bearing::{
    app::sign_bearing,
    config::SignBearingConfiguration,
    model::{feature::SignKind, osm::OsmSource, SignCliError},
};
use std::path::Path;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct SignBearingAppArguments {
    #[command(subcommand)]
    app: App,
}

#[derive(Subcommand)]
pub enum App {
    /// infer sign bearings for an extract and write review tasks
    Run {
        #[arg(long, help = "path to Overpass JSON extract containing sign nodes and their ways")]
        extract_file: String,
        #[arg(long, help = "path to .toml or .json file with sign bearing parameters")]
        configuration_file: Option<String>,
        #[arg(long, help = "output path for challenge and sign bearing files")]
        output_directory: String,
        #[arg(long, help = "replace output files that already exist")]
        overwrite: bool,
    },
    /// print the Overpass query that produces an extract for one sign kind
    Query {
        #[arg(long, help = "sign kind to search for: give_way or stop")]
        kind: SignKind,
        #[arg(long, help = "path to .toml or .json file with sign bearing parameters")]
        configuration_file: Option<String>,
    },
    /// print the default configuration as TOML
    DefaultConfig,
}

fn read_configuration(
    configuration_file: &Option<String>,
) -> Result<SignBearingConfiguration, SignCliError> {
    match configuration_file {
        None => SignBearingConfiguration::from_env(),
        Some(f) => {
            log::info!("reading sign bearing configuration from {f}");
            SignBearingConfiguration::try_from(f)
        }
    }
}

pub fn run(app: &App) -> Result<(), SignCliError> {
    env_logger::init();
    match app {
        App::Run {
            extract_file,
            configuration_file,
            output_directory,
            overwrite,
        } => {
            let conf = read_configuration(configuration_file)?;
            let source = OsmSource::OverpassJson {
                extract_filepath: extract_file.clone(),
            };
            let graph = source.import()?;
            log::info!("  (((3))) inferring sign bearings");
            let signs = sign_bearing::process_signs(&graph, &conf)?;
            log::info!("  (((4))) writing review tasks");
            let out_path = Path::new(output_directory);
            match sign_bearing::write_tasks(&signs, &conf, out_path, *overwrite) {
                Ok(_) => {
                    eprintln!("finished.");
                    Ok(())
                }
                Err(e) => {
                    log::error!("osm-sign-bearing failed: {e}");
                    Err(e)?
                }
            }
        }
        App::Query {
            kind,
            configuration_file,
        } => {
            let conf = read_configuration(configuration_file)?;
            print!("{}", conf.overpass.query(*kind));
            Ok(())
        }
        App::DefaultConfig => {
            print!("{}", SignBearingConfiguration::default_toml()?);
            Ok(())
        }
    }
}

fn main() {
    let args = SignBearingAppArguments::parse();
    if let Err(e) = run(&args.app) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
