mod analysis;
mod charts;
mod config;
mod dataset;
mod errors;
mod models;
mod recommend;
mod render;
mod report;
mod terminal;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::{EducationDistribution, StateAttractivenessScorer};
use crate::config::{Cli, Config};
use crate::recommend::{parse_skills, JobRecommender, PlaceholderRecommender};
use crate::render::TemplateEngine;

const STEPS: usize = 4;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?.apply_cli(cli);

    // Logs go to stderr so they never interleave with the prompt on stdout
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("job_analyzer={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting job-analyzer v{}", env!("CARGO_PKG_VERSION"));

    run(&config)
}

fn run(config: &Config) -> Result<()> {
    if config.show_banner {
        terminal::print_banner(config.banner_delay);
    }

    let raw_skills = match &config.skills {
        Some(skills) => skills.clone(),
        None => terminal::prompt_skills().context("Failed to read skills")?,
    };
    let skills = parse_skills(&raw_skills);
    if skills.is_empty() {
        warn!("No skills entered");
    }

    let recommender = PlaceholderRecommender;
    let job_list = recommender.recommend(&skills);
    info!(
        "Recommended {} job titles (backend: {})",
        job_list.len(),
        recommender.backend()
    );
    if job_list.is_empty() {
        warn!("Recommender returned no job titles; every state will score 0");
    }

    println!();
    terminal::print_step("Loading Main Datasource", 1, STEPS);
    let postings = dataset::load_postings(&config.dataset_path).with_context(|| {
        format!("Failed to load dataset {}", config.dataset_path.display())
    })?;

    terminal::print_step("Visualizing main statistics", 2, STEPS);
    let state_scores = StateAttractivenessScorer::default().score(&postings, &job_list);
    for (state, score) in state_scores.top(5) {
        info!("{state}: {score:.3}");
    }
    let education = EducationDistribution::from_postings(&postings, &job_list);
    let states_map = charts::state_map(&state_scores);
    let edu_req = charts::education_bars(&education);

    terminal::print_step("Creating reports", 3, STEPS);
    std::fs::create_dir_all(&config.output_dir).with_context(|| {
        format!("Failed to create output dir {}", config.output_dir.display())
    })?;
    let engine = TemplateEngine::new()?;
    let states_map_path = config.states_map_path();
    let education_path = config.education_path();
    states_map.write_html(&engine, &states_map_path, "states-map")?;
    edu_req.write_html(&engine, &education_path, "jobs-education")?;

    terminal::print_step("Creating reports", 4, STEPS);
    let list_html = report::job_list_page(&engine, &job_list, &skills, Utc::now())?;
    let result_path = config.result_path();
    report::combine_htmls(
        &list_html,
        &[states_map_path.as_path(), education_path.as_path()],
        &result_path,
    )?;

    if config.open_browser {
        if let Err(e) = open::that(&result_path) {
            warn!("Could not open {} in a browser: {e}", result_path.display());
        }
    } else {
        println!("Report written to {}", result_path.display());
    }

    Ok(())
}
