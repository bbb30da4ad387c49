use chrono::Local;
use log::{error, info};

use config::EvalConfig;
use driver::AgentLoop;
use scorer::EvalReport;
use solver::Solver;

mod config;
mod dataset;
mod driver;
mod episode;
mod game;
mod scorer;
mod solver;
mod tool;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::try_init().unwrap_or(());

    let config = EvalConfig::from_env()?;
    let samples = dataset::build_samples(&config)?;
    let started_at = Local::now();
    info!(
        "Playing {} games in {} (max guesses {}, word guesses {})",
        samples.len(),
        config.language,
        config.max_guesses,
        if config.allow_word_guesses {
            "allowed"
        } else {
            "not allowed"
        }
    );

    let agent_loop = AgentLoop::new(config.max_turns);
    info!(
        "Tools offered: {}",
        agent_loop
            .tools()
            .map(|tool| tool.descriptor().name)
            .collect::<Vec<_>>()
            .join(", ")
    );
    let mut results = Vec::new();
    let mut errored = 0;
    for sample in samples {
        let mut solver = Solver::new(
            sample.metadata.language.unwrap_or(config.language),
            config.allow_word_guesses,
        );
        let id = sample.id.clone();
        match agent_loop.play(sample, &mut solver) {
            Ok(result) => results.push(result),
            Err(e) => {
                error!("Episode {} failed: {}", id, e);
                errored += 1;
            }
        }
    }

    let report = EvalReport::new(started_at, &results, errored);
    info!(
        "Accuracy {:.3} (stderr {:.3}) over {} games, {} errored",
        report.accuracy, report.stderr, report.total, report.errored
    );
    for (difficulty, stats) in &report.by_difficulty {
        info!(
            "Difficulty {}: accuracy {:.3} over {} games",
            difficulty, stats.accuracy, stats.count
        );
    }
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
