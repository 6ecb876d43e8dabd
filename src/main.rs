use monster_stats::build_info;
use monster_stats::cli::{self, Command};
use monster_stats::simulator::{run_inspection, StatsConfig};
use monster_stats::telemetry;
use monster_stats::StatsError;
use tracing::Level;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    telemetry::init_tracing(telemetry::json_requested(), Level::WARN);

    let target = match cli::parse_args(&args) {
        Command::Usage => {
            let usage = StatsError::Usage;
            println!("{}", usage);
            std::process::exit(usage.exit_code());
        }
        Command::Version => {
            println!("{}", build_info::version_line());
            std::process::exit(0);
        }
        Command::Inspect(target) => target,
    };

    let config = StatsConfig::from_env();
    match run_inspection(&target, &config) {
        Ok(line) => println!("{}", line),
        Err(err) => {
            tracing::debug!(error = ?err, "inspection failed");
            println!("{}", err);
            std::process::exit(err.exit_code());
        }
    }
}
