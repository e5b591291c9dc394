use denmat_core::DenseMatrix;
use std::time::Instant;

/// Creates the n x n Hilbert matrix, H[i][j] = 1 / (i + j + 1).
/// A classic ill-conditioned input: its determinant collapses towards
/// zero as n grows.
fn create_hilbert_matrix(n: usize) -> DenseMatrix {
    let mut matrix = DenseMatrix::new(n, n).expect("Failed to create matrix");
    for row in 0..n {
        for col in 0..n {
            *matrix.get_mut(row, col).unwrap() = 1.0 / (row + col + 1) as f64;
        }
    }
    matrix
}

fn main() {
    // Initialize logging based on RUST_LOG environment variable
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    for n in 1..=6 {
        let hilbert = create_hilbert_matrix(n);
        let det = hilbert.determinant().expect("Hilbert matrices are square");
        log::info!("Hilbert {}x{}: determinant {:.6e}", n, n, det);

        let start_time = Instant::now();
        match hilbert.inverse() {
            Ok(inverse) => {
                let round_trip = hilbert.matmul(&inverse).expect("Shapes match");
                let mut identity = DenseMatrix::new(n, n).unwrap();
                for i in 0..n {
                    *identity.get_mut(i, i).unwrap() = 1.0;
                }
                log::info!(
                    "  Inverted in {:?}, A * A^-1 == I within 1e-6: {}",
                    start_time.elapsed(),
                    round_trip == identity
                );
            }
            Err(e) => {
                // The determinant sinks below the singularity tolerance
                // around n = 4 even though the matrix is invertible in
                // exact arithmetic.
                log::error!("  Inverse failed: {}", e);
            }
        }
    }
}
