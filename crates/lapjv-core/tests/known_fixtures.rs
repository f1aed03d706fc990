use lapjv_core::{lapjv, solve, Solution};

fn product_matrix(n: usize) -> Vec<Vec<i64>> {
    (0..n)
        .map(|i| (0..n).map(|j| (i * j) as i64).collect())
        .collect()
}

fn as_float(matrix: &[Vec<i64>]) -> Vec<Vec<f64>> {
    matrix
        .iter()
        .map(|row| row.iter().map(|&value| value as f64).collect())
        .collect()
}

#[test]
fn sample_matrix() {
    let matrix = vec![
        vec![5, 2, 9, 2],
        vec![6, 4, 6, 2],
        vec![2, 4, 5, 1],
        vec![2, 4, 5, 1],
    ];
    let solution = lapjv(&matrix);
    assert_eq!(solution.row_to_col, vec![1, 2, 3, 0]);
    assert_eq!(solution.col_to_row, vec![3, 0, 1, 2]);
    assert_eq!(solution.cost, 11.0);
}

#[test]
fn sample_matrix_float() {
    let matrix = vec![
        vec![5.0, 2.0, 9.0, 2.0],
        vec![6.0, 4.0, 6.0, 2.0],
        vec![2.0, 4.0, 5.0, 1.0],
        vec![2.0, 4.0, 5.0, 1.0],
    ];
    let solution = lapjv(&matrix);
    assert_eq!(solution.row_to_col, vec![1, 2, 3, 0]);
    assert_eq!(solution.col_to_row, vec![3, 0, 1, 2]);
    assert_eq!(solution.cost, 11.0);
}

#[test]
fn identical_rows() {
    let matrix = vec![[2, 4, 5, 2]; 4];
    let solution = lapjv(&matrix);
    assert_eq!(solution.row_to_col, vec![3, 0, 1, 2]);
    assert_eq!(solution.col_to_row, vec![1, 2, 3, 0]);
    assert_eq!(solution.cost, 13.0);
}

#[test]
fn product_matrix_is_reversed() {
    let matrix = product_matrix(10);
    let solution = lapjv(&matrix);
    let reversed: Vec<usize> = (0..10).rev().collect();
    assert_eq!(solution.row_to_col, reversed);
    assert_eq!(solution.col_to_row, reversed);
    assert_eq!(solution.cost, 120.0);
    assert_eq!(solution.col_to_row[2], 7);
    assert_eq!(solution.col_to_row[5], 4);
    assert_eq!(solution.row_to_col[0], 9);
}

#[test]
fn float_and_integer_runs_agree() {
    let matrix = product_matrix(10);
    let int_solution = lapjv(&matrix);
    let float_solution = lapjv(&as_float(&matrix));
    assert_eq!(int_solution.row_to_col, float_solution.row_to_col);
    assert_eq!(int_solution.col_to_row, float_solution.col_to_row);
    assert_eq!(int_solution.cost, float_solution.cost);
}

#[test]
fn narrow_integer_types_share_the_routine() {
    let matrix: Vec<Vec<i32>> = vec![vec![4, 1, 3], vec![2, 0, 5], vec![3, 2, 2]];
    let solution = lapjv(&matrix);
    assert_eq!(solution.cost, 5.0);
    assert!(solution.is_bijection());

    let matrix: Vec<Vec<f32>> = vec![vec![4.0, 1.0, 3.0], vec![2.0, 0.0, 5.0], vec![3.0, 2.0, 2.0]];
    assert_eq!(lapjv(&matrix).cost, 5.0);
}

#[test]
fn empty_matrix_is_trivial() {
    let matrix: Vec<Vec<i64>> = Vec::new();
    let solution = lapjv(&matrix);
    assert_eq!(solution, Solution::empty());
    assert_eq!(solution.cost, 0.0);
    assert!(solution.row_to_col.is_empty());
    assert!(solution.col_to_row.is_empty());

    let checked = solve(&matrix).unwrap();
    assert!(checked.is_empty());
}

#[test]
fn uniform_matrix_costs_n_times_c() {
    for n in 1..8 {
        let matrix = vec![vec![7i64; n]; n];
        let solution = lapjv(&matrix);
        assert!(solution.is_bijection());
        assert_eq!(solution.cost, (7 * n) as f64);
    }
}

#[test]
fn negative_costs_are_supported() {
    let matrix = vec![vec![-3, -1], vec![-2, -9]];
    let solution = lapjv(&matrix);
    assert_eq!(solution.row_to_col, vec![0, 1]);
    assert_eq!(solution.cost, -12.0);
}

#[test]
fn input_matrix_is_left_untouched() {
    let matrix = product_matrix(6);
    let snapshot = matrix.clone();
    let _ = lapjv(&matrix);
    assert_eq!(matrix, snapshot);
}
