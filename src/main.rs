use grindsim::config::ScenarioConfig;
use grindsim::simulation::Simulation;
use grindsim::verify::verify_scenario;

fn main() {
    let mut failed = false;

    for config in ScenarioConfig::canonical() {
        let violations = verify_scenario(&config);
        if !violations.is_empty() {
            for v in &violations {
                eprintln!("{}: {v}", config.name);
            }
            failed = true;
            continue;
        }

        let name = config.name;
        let n_trials = config.n_trials;
        let mut sim = Simulation::from_config(config);
        let mean = sim.run();

        eprintln!("{name}: {n_trials} trials complete");
        println!("{name}: {mean}");
    }

    if failed {
        std::process::exit(1);
    }
}
