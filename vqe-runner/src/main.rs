mod ansatz;
mod energy;
mod error;
mod measurement;
mod optimizer;

use clap::Parser;
use hamiltonian::{decompose, ground_state_energy};
use nalgebra::DMatrix;
use qsim::StatevectorSimulator;
use std::error::Error;
use std::fs;
use std::path::PathBuf;

/// Variational ground-state energy estimation for a 4x4 real symmetric
/// matrix: Pauli-basis decomposition, shot-sampled expectation values over
/// a two-parameter ansatz, grid scan plus Nelder-Mead refinement.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON file holding the matrix as an array of 4 rows of 4 numbers.
    /// Defaults to the built-in reference matrix.
    #[arg(short, long)]
    matrix_file: Option<PathBuf>,

    /// Shots per expectation estimate.
    #[arg(short, long, default_value_t = 2000)]
    shots: u32,

    /// Grid points per parameter axis for the coarse scan.
    #[arg(short, long, default_value_t = optimizer::GRID_POINTS)]
    grid_points: usize,
}

/// M[1][1] = M[2][2] = -1, M[1][2] = M[2][1] = 1; ground energy -2.
fn reference_matrix() -> DMatrix<f64> {
    DMatrix::from_row_slice(
        4,
        4,
        &[
            0.0, 0.0, 0.0, 0.0, //
            0.0, -1.0, 1.0, 0.0, //
            0.0, 1.0, -1.0, 0.0, //
            0.0, 0.0, 0.0, 0.0,
        ],
    )
}

fn load_matrix(path: &PathBuf) -> Result<DMatrix<f64>, Box<dyn Error>> {
    let text = fs::read_to_string(path)?;
    let rows: Vec<Vec<f64>> = serde_json::from_str(&text)?;
    let nrows = rows.len();
    let ncols = rows.first().map_or(0, |r| r.len());
    if nrows == 0 || rows.iter().any(|r| r.len() != ncols) {
        return Err("matrix rows must be non-empty and of equal length".into());
    }
    Ok(DMatrix::from_fn(nrows, ncols, |i, j| rows[i][j]))
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    println!("🚀 Starting VQE runner...");

    let matrix = match &cli.matrix_file {
        Some(path) => load_matrix(path)?,
        None => reference_matrix(),
    };

    let hamiltonian = decompose(&matrix)?;
    println!("Decomposed Hamiltonian:\n{}", hamiltonian);

    let mut backend = StatevectorSimulator::new(ansatz::NUM_QUBITS);

    let grid_minimum = optimizer::grid_scan(&mut backend, &hamiltonian, cli.shots, cli.grid_points)?;
    println!(
        "\nGrid scan minimum ({p} x {p} points): {e:.6}",
        p = cli.grid_points,
        e = grid_minimum
    );

    let (best_params, best_energy) = optimizer::refine(
        &mut backend,
        &hamiltonian,
        cli.shots,
        optimizer::REFINE_SEED,
        optimizer::REFINE_TOLERANCE,
    )?;
    println!("\n✅ Optimization complete!");
    println!(" -> Refined energy: {:.6}", best_energy);
    println!(
        " -> Optimal parameters: [{:.6}, {:.6}]",
        best_params[0], best_params[1]
    );

    let exact = ground_state_energy(&matrix)?;
    println!(" -> Exact ground energy: {:.6}", exact);

    Ok(())
}
