use ndarray::{Array2, ArrayView1};

use crate::{Error, Result};

pub fn euclidean_distance(a: ArrayView1<'_, f64>, b: ArrayView1<'_, f64>) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| (x - y) * (x - y)).sum::<f64>().sqrt()
}

/// Titles of the `num_neighbors` rows closest to the first row titled `title`,
/// nearest first. Exact brute force over every row; equal distances keep row
/// order. Every row carrying the query title is skipped, not only the nearest
/// one, so a document sharing the query's title is never reported as its
/// neighbor. Fewer than `num_neighbors` titles come back when the corpus is
/// small. `all_titles` must have exactly one entry per matrix row.
pub fn nearest_neighbors(
    matrix: &Array2<f64>,
    all_titles: &[String],
    title: &str,
    num_neighbors: usize,
) -> Result<Vec<String>> {
    if all_titles.len() != matrix.nrows() {
        return Err(Error::ShapeMismatch { rows: matrix.nrows(), titles: all_titles.len() });
    }
    let query = all_titles
        .iter()
        .position(|t| t == title)
        .ok_or_else(|| Error::TitleNotFound { title: title.to_string() })?;
    let q = matrix.row(query);

    let mut ranked: Vec<(usize, f64)> = matrix
        .outer_iter()
        .enumerate()
        .map(|(i, row)| (i, euclidean_distance(q, row)))
        .collect();
    // sort_by is stable, so ties stay in row order
    ranked.sort_by(|a, b| a.1.total_cmp(&b.1));

    Ok(ranked
        .into_iter()
        .filter(|(i, _)| all_titles[*i] != title)
        .take(num_neighbors)
        .map(|(i, _)| all_titles[i].clone())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn titles(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn distance_between_orthogonal_unit_rows() {
        let m = array![[1.0, 0.0], [0.0, 1.0]];
        let d = euclidean_distance(m.row(0), m.row(1));
        assert!((d - 2f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn returns_available_neighbors_when_m_is_large() {
        let m = array![[0.0, 0.0], [3.0, 0.0], [1.0, 0.0]];
        let res = nearest_neighbors(&m, &titles(&["A", "B", "C"]), "A", 5).unwrap();
        assert_eq!(res, vec!["C", "B"]);
    }

    #[test]
    fn truncates_to_m() {
        let m = array![[0.0], [3.0], [1.0], [2.0]];
        let res = nearest_neighbors(&m, &titles(&["A", "B", "C", "D"]), "A", 2).unwrap();
        assert_eq!(res, vec!["C", "D"]);
        assert!(nearest_neighbors(&m, &titles(&["A", "B", "C", "D"]), "A", 0).unwrap().is_empty());
    }

    #[test]
    fn ties_follow_row_order() {
        let m = array![[0.0], [1.0], [-1.0], [1.0]];
        let res = nearest_neighbors(&m, &titles(&["Q", "x", "y", "z"]), "Q", 3).unwrap();
        assert_eq!(res, vec!["x", "y", "z"]);
    }

    #[test]
    fn identical_row_before_query_is_still_a_neighbor() {
        let m = array![[1.0, 0.0], [1.0, 0.0], [0.0, 1.0]];
        let res = nearest_neighbors(&m, &titles(&["twin", "Q", "far"]), "Q", 5).unwrap();
        assert_eq!(res, vec!["twin", "far"]);
    }

    #[test]
    fn duplicate_titles_use_first_row_and_are_excluded() {
        let m = array![[0.0], [0.5], [5.0]];
        let res = nearest_neighbors(&m, &titles(&["A", "A", "B"]), "A", 5).unwrap();
        assert_eq!(res, vec!["B"]);
    }

    #[test]
    fn title_count_must_match_rows() {
        let m = array![[0.0], [1.0], [2.0]];
        let err = nearest_neighbors(&m, &titles(&["A", "B"]), "A", 5).unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch { rows: 3, titles: 2 }));
        let err = nearest_neighbors(&m, &titles(&["A", "B", "C", "D"]), "A", 5).unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch { rows: 3, titles: 4 }));
    }

    #[test]
    fn unknown_title_is_an_error() {
        let m = array![[0.0]];
        let err = nearest_neighbors(&m, &titles(&["A"]), "missing", 1).unwrap_err();
        assert!(matches!(err, Error::TitleNotFound { ref title } if title == "missing"));
    }
}
