use std::error::Error;

use denmat_core::DenseMatrix;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // With a CSV triplet file argument, analyze that matrix instead of the
    // built-in demo ones.
    if let Some(path) = std::env::args().nth(1) {
        let matrix = read_dense_matrix(&path)?;
        log::info!("Loaded {}x{} matrix from {}", matrix.rows(), matrix.cols(), path);
        analyze(&matrix)?;
        return Ok(());
    }

    println!("Matrix product:");
    let a = DenseMatrix::from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]])?;
    let b = DenseMatrix::from_rows(&[vec![7.0, 8.0], vec![9.0, 10.0], vec![11.0, 12.0]])?;
    print!("{}", a.matmul(&b)?);

    let m = DenseMatrix::from_rows(&[
        vec![2.0, 5.0, 7.0],
        vec![6.0, 3.0, 4.0],
        vec![5.0, -2.0, -3.0],
    ])?;
    analyze(&m)?;

    Ok(())
}

fn analyze(matrix: &DenseMatrix) -> Result<(), Box<dyn Error>> {
    println!("Matrix:");
    print!("{}", matrix);

    if !matrix.is_square() {
        println!("Matrix is not square, skipping the linear-algebra suite");
        return Ok(());
    }

    let start_time = std::time::Instant::now();
    let det = matrix.determinant()?;
    println!("Determinant: {}", det);

    match matrix.inverse() {
        Ok(inverse) => {
            println!("Inverse:");
            print!("{}", inverse);

            // Sanity check: the product with the inverse is the identity.
            let product = matrix.matmul(&inverse)?;
            let mut identity = DenseMatrix::new(matrix.rows(), matrix.cols())?;
            for i in 0..matrix.rows() {
                *identity.get_mut(i, i)? = 1.0;
            }
            println!("A * A^-1 == I: {}", product == identity);
        }
        Err(e) => println!("No inverse: {}", e),
    }
    log::info!("Analysis took {:?}", start_time.elapsed());

    Ok(())
}

fn read_dense_matrix(filename: &str) -> Result<DenseMatrix, Box<dyn Error>> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(true)
        .from_path(filename)?;
    let mut triplets = Vec::new();
    let mut max_row: usize = 0;
    let mut max_col: usize = 0;
    // Read the CSV file and parse the triplets
    // into a vector of (row_index, col_index, value) tuples
    for result in rdr.records() {
        let record = result?;
        let row_index: usize = record[0].parse()?;
        let col_index: usize = record[1].parse()?;
        let value: f64 = record[2].parse()?;
        triplets.push((row_index, col_index, value));
        if row_index > max_row {
            max_row = row_index;
        }
        if col_index > max_col {
            max_col = col_index;
        }
    }

    if triplets.is_empty() {
        return Ok(DenseMatrix::empty());
    }

    let mut matrix = DenseMatrix::new(max_row + 1, max_col + 1)?;
    for (row, col, value) in triplets {
        *matrix.get_mut(row, col)? = value;
    }
    Ok(matrix)
}
