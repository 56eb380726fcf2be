// Générateur de gridworld aléatoire
// Tire un scénario (robot, objectif, obstacles), le sauvegarde et l'affiche

use clap::Parser;
use gridworld::persist;
use gridworld::render;
use gridworld::types::{DEFAULT_GRID_SIZE, DEFAULT_NUM_OBSTACLES};
use gridworld::{Display, Scenario};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::Path;

/// Random gridworld generator: samples a robot, a goal and obstacles,
/// then saves the coordinates, renders a PNG and displays the grid.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Side length of the square grid
    #[arg(long, default_value_t = DEFAULT_GRID_SIZE)]
    grid_size: usize,

    /// Number of obstacles to place
    #[arg(long, default_value_t = DEFAULT_NUM_OBSTACLES)]
    num_obstacles: usize,

    /// Base name for the output files
    #[arg(long, default_value = "gridworld")]
    output: String,

    /// Random seed (drawn from entropy when omitted)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let scenario = Scenario::generate(args.grid_size, args.num_obstacles, &mut rng)?;

    println!(
        "Robot position: ({}, {})",
        scenario.robot.0, scenario.robot.1
    );
    println!("Goal position: ({}, {})", scenario.goal.0, scenario.goal.1);
    let obstacle_list: Vec<String> = scenario
        .obstacles
        .iter()
        .map(|&(row, col)| format!("({row}, {col})"))
        .collect();
    println!("Obstacle positions: [{}]", obstacle_list.join(", "));

    // NOTE - Single timestamp capture, shared by both output files
    let stamp = persist::timestamp();

    let txt_path = format!("{}_{}.txt", args.output, stamp);
    persist::save_coordinates(&scenario, Path::new(&txt_path))?;
    println!("Grid coordinates saved as: {txt_path}");

    let png_path = format!("{}_{}.png", args.output, stamp);
    render::save_image(&scenario, Path::new(&png_path))?;
    println!("Gridworld image saved as: {png_path}");

    Display::render(&scenario)?;

    Ok(())
}
