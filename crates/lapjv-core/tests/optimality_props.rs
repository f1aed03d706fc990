use itertools::Itertools;
use lapjv_core::{lapjv, to_square, Solution};
use proptest::prelude::*;

fn brute_force_cost(matrix: &[Vec<i64>]) -> i64 {
    let n = matrix.len();
    (0..n)
        .permutations(n)
        .map(|perm| perm.iter().enumerate().map(|(i, &j)| matrix[i][j]).sum::<i64>())
        .min()
        .unwrap_or(0)
}

fn assigned_sum(matrix: &[Vec<i64>], solution: &Solution<i64>) -> f64 {
    solution.pairs().map(|(i, j)| matrix[i][j] as f64).sum()
}

fn square_matrix(max_dim: usize, range: std::ops::Range<i64>) -> impl Strategy<Value = Vec<Vec<i64>>> {
    (1usize..=max_dim).prop_flat_map(move |n| {
        prop::collection::vec(prop::collection::vec(range.clone(), n), n)
    })
}

proptest! {
    #[test]
    fn matches_brute_force(matrix in square_matrix(6, -100..100)) {
        let solution = lapjv(&matrix);
        prop_assert!(solution.is_bijection());
        prop_assert_eq!(solution.cost, brute_force_cost(&matrix) as f64);
        prop_assert_eq!(solution.cost, assigned_sum(&matrix, &solution));
    }

    #[test]
    fn heavy_ties_stay_optimal(matrix in square_matrix(6, 0..3)) {
        let solution = lapjv(&matrix);
        prop_assert!(solution.is_bijection());
        prop_assert_eq!(solution.cost, brute_force_cost(&matrix) as f64);
    }

    #[test]
    fn final_duals_are_feasible(matrix in square_matrix(8, -20..20)) {
        let solution = lapjv(&matrix);
        let n = matrix.len();
        for i in 0..n {
            for j in 0..n {
                let reduced = matrix[i][j] - solution.row_duals[i] - solution.col_duals[j];
                prop_assert!(reduced >= 0, "negative reduced cost at ({}, {})", i, j);
            }
            let j = solution.row_to_col[i];
            prop_assert_eq!(matrix[i][j], solution.row_duals[i] + solution.col_duals[j]);
        }
    }

    #[test]
    fn float_entries_reproduce_integer_runs(matrix in square_matrix(7, 0..1000)) {
        let floats: Vec<Vec<f64>> = matrix
            .iter()
            .map(|row| row.iter().map(|&value| value as f64).collect())
            .collect();
        let int_solution = lapjv(&matrix);
        let float_solution = lapjv(&floats);
        prop_assert_eq!(int_solution.cost, float_solution.cost);
        prop_assert_eq!(&int_solution.row_to_col, &float_solution.row_to_col);
        prop_assert_eq!(&int_solution.col_to_row, &float_solution.col_to_row);
    }

    #[test]
    fn padded_rectangles_keep_their_optimum(rows in 1usize..5, cols in 1usize..5, seed in prop::collection::vec(0i64..50, 16)) {
        let matrix: Vec<Vec<i64>> = (0..rows)
            .map(|i| (0..cols).map(|j| seed[i * 4 + j]).collect())
            .collect();
        let square = to_square(&matrix);
        let solution = lapjv(&square);
        prop_assert!(solution.is_bijection());
        prop_assert_eq!(solution.cost, brute_force_cost(&square) as f64);
    }
}
