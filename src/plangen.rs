use rtimeline::{write_plan, SamplePlanGenerator};
use anyhow::Result;
use std::env;
use std::path::PathBuf;

struct Config {
    num_activities: usize,
    seed: u64,
    output_file: Option<String>,
    use_brotli: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            num_activities: 8,
            seed: 42,
            output_file: None,
            use_brotli: false,
        }
    }
}

fn parse_args() -> Result<Config> {
    let args: Vec<String> = env::args().collect();
    let mut config = Config::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-n requires an argument");
                }
                config.num_activities = args[i].parse()?;
            }
            "-seed" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-seed requires an argument");
                }
                config.seed = args[i].parse()?;
            }
            "-out" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-out requires a file path argument");
                }
                config.output_file = Some(args[i].clone());
            }
            "-brotli" => {
                config.use_brotli = true;
            }
            "-h" | "-help" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {
                log::warn!("Unknown argument: {}", args[i]);
            }
        }
        i += 1;
    }

    Ok(config)
}

fn print_help() {
    println!("Timeline Sample Plan Generator");
    println!("Usage: timeline-plangen [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("  -n <N>                 Number of activities (default: 8)");
    println!("  -seed <N>              Random seed (default: 42)");
    println!("  -out <FILE>            Output file path (default: plan.json)");
    println!("  -brotli                Write compressed plan using Brotli (output: *.json.br)");
    println!("  -h, -help, --help      Show this help message");
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = parse_args()?;

    let output_path = config.output_file.clone()
        .unwrap_or_else(|| {
            if config.use_brotli {
                "plan.json.br".to_string()
            } else {
                "plan.json".to_string()
            }
        });

    let plan = SamplePlanGenerator::with_config(config.num_activities, config.seed).generate();
    write_plan(&PathBuf::from(&output_path), &plan)?;

    log::info!(
        "Plan with {} activities and {} markers written to: {}",
        plan.intervals.len(),
        plan.markers.len(),
        output_path
    );

    Ok(())
}
