//! Weighted edit distance with graduated substitution costs.
//!
//! Unlike the classical Levenshtein distance, insertions and deletions carry
//! independent caller-chosen costs, and substituting one character for another
//! costs the absolute difference of their code points. Identical characters
//! therefore match for free, and `'a'` -> `'b'` is much cheaper than `'a'` -> `'z'`.

use crate::error::{Error, Result};

/// Cost of a deletion when the caller does not pick one.
pub const DEFAULT_DELETE_COST: u64 = 35;
/// Cost of an insertion when the caller does not pick one.
pub const DEFAULT_INSERT_COST: u64 = 30;

/// Insertion and deletion costs for [`edit_distance_with`] and [`DistanceTable::build`].
///
/// An insertion advances through `word` without consuming `guess`; a deletion
/// advances through `guess` without consuming `word`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CostParameters {
    pub delete_cost: u64,
    pub insert_cost: u64,
}

impl CostParameters {
    /// Validates signed costs coming from user input.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] if either cost is negative.
    pub fn new(delete_cost: i64, insert_cost: i64) -> Result<Self> {
        let delete_cost = u64::try_from(delete_cost).map_err(|_| {
            Error::invalid_argument(format!(
                "delete_cost must be non-negative, got {delete_cost}"
            ))
        })?;
        let insert_cost = u64::try_from(insert_cost).map_err(|_| {
            Error::invalid_argument(format!(
                "insert_cost must be non-negative, got {insert_cost}"
            ))
        })?;
        Ok(Self {
            delete_cost,
            insert_cost,
        })
    }
}

impl Default for CostParameters {
    fn default() -> Self {
        Self {
            delete_cost: DEFAULT_DELETE_COST,
            insert_cost: DEFAULT_INSERT_COST,
        }
    }
}

/// Substitution cost between two characters: the absolute difference of their code points.
///
/// # Examples
///
/// ```
/// use weighted_edit_distance::char_distance;
///
/// assert_eq!(char_distance('a', 'a'), 0);
/// assert_eq!(char_distance('a', 'i'), 8);
/// assert_eq!(char_distance('i', 'a'), 8);
/// ```
pub fn char_distance(a: char, b: char) -> u64 {
    u64::from((a as u32).abs_diff(b as u32))
}

/// Computes the weighted edit distance between `word` and `guess`.
///
/// Costs are taken as signed integers so that values straight from user input
/// can be validated here rather than silently reinterpreted.
///
/// # Errors
/// * [`Error::InvalidArgument`] if either cost is negative.
/// * [`Error::Overflow`] if the minimal cost does not fit in a `u64`.
///
/// # Examples
///
/// ```
/// use weighted_edit_distance::edit_distance;
///
/// assert_eq!(edit_distance("", "", 35, 30).unwrap(), 0);
/// assert_eq!(edit_distance("thank", "think", 35, 30).unwrap(), 8);
/// assert_eq!(edit_distance("trail", "toil", 35, 30).unwrap(), 33);
/// assert!(edit_distance("a", "b", -1, 30).is_err());
/// ```
pub fn edit_distance(word: &str, guess: &str, delete_cost: i64, insert_cost: i64) -> Result<u64> {
    let costs = CostParameters::new(delete_cost, insert_cost)?;
    let word: Vec<char> = word.chars().collect();
    let guess: Vec<char> = guess.chars().collect();
    edit_distance_with(&word, &guess, &costs)
}

/// Computes the weighted edit distance over already-decoded code points.
///
/// Uses two rolling rows sized by the shorter sequence, so memory is
/// O(min(W, G)) while time stays O(W * G).
pub fn edit_distance_with(word: &[char], guess: &[char], costs: &CostParameters) -> Result<u64> {
    if word.is_empty() {
        return scaled_cost(guess.len(), costs.delete_cost);
    } else if guess.is_empty() {
        return scaled_cost(word.len(), costs.insert_cost);
    }

    // The recurrence is symmetric under transposition as long as the step
    // costs follow their sequence, so iterate the longer one in the outer loop.
    let distance = if guess.len() <= word.len() {
        rolling_distance(word, guess, costs.insert_cost, costs.delete_cost)
    } else {
        rolling_distance(guess, word, costs.delete_cost, costs.insert_cost)
    };

    distance.ok_or(Error::Overflow {
        context: "edit distance",
    })
}

/// `outer_step` is charged for consuming a character of `outer` alone,
/// `inner_step` for consuming a character of `inner` alone.
///
/// Both sequences are scanned from their ends. A `None` cell costs more than
/// `u64::MAX`; it only reaches the result if every path does.
fn rolling_distance(
    outer: &[char],
    inner: &[char],
    outer_step: u64,
    inner_step: u64,
) -> Option<u64> {
    let mut prev_row: Vec<Option<u64>> = (0..=inner.len() as u64)
        .map(|j| j.checked_mul(inner_step))
        .collect();
    let mut curr_row = vec![None; inner.len() + 1];

    for &co in outer.iter().rev() {
        curr_row[0] = add(prev_row[0], outer_step);

        for (j, &ci) in inner.iter().rev().enumerate() {
            curr_row[j + 1] = min_of_three(
                add(prev_row[j], char_distance(co, ci)),
                add(prev_row[j + 1], outer_step),
                add(curr_row[j], inner_step),
            );
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[inner.len()]
}

fn add(cell: Option<u64>, cost: u64) -> Option<u64> {
    cell?.checked_add(cost)
}

fn min_of_three(substitute: Option<u64>, outer: Option<u64>, inner: Option<u64>) -> Option<u64> {
    [substitute, outer, inner].into_iter().flatten().min()
}

fn scaled_cost(len: usize, cost: u64) -> Result<u64> {
    (len as u64).checked_mul(cost).ok_or(Error::Overflow {
        context: "edit distance",
    })
}

/// The full dynamic-programming matrix of minimal suffix-to-suffix costs.
///
/// Row `i` means `i` characters of `word` consumed from its end, column `j`
/// means `j` characters of `guess` consumed from its end. Cell `(W, G)` holds
/// the distance. Prefer [`edit_distance_with`] when only the result is needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceTable {
    /// `None` marks a cell whose cost exceeds `u64::MAX`.
    cells: Vec<Option<u64>>,
    rows: usize,
    cols: usize,
    distance: u64,
}

impl DistanceTable {
    /// Fills the (W+1) x (G+1) table.
    ///
    /// Intermediate cells may exceed `u64::MAX` without failing the build.
    ///
    /// # Errors
    /// Returns [`Error::Overflow`] if the distance itself exceeds `u64::MAX`.
    pub fn build(word: &[char], guess: &[char], costs: &CostParameters) -> Result<Self> {
        let rows = word.len() + 1;
        let cols = guess.len() + 1;
        let mut cells = vec![Some(0u64); rows * cols];

        for i in 1..rows {
            cells[i * cols] = add(cells[(i - 1) * cols], costs.insert_cost);
        }
        for j in 1..cols {
            cells[j] = add(cells[j - 1], costs.delete_cost);
        }

        let (w, g) = (word.len(), guess.len());
        for i in 1..rows {
            let c_word = word[w - i];
            for j in 1..cols {
                let c_guess = guess[g - j];
                cells[i * cols + j] = min_of_three(
                    add(cells[(i - 1) * cols + j - 1], char_distance(c_word, c_guess)),
                    add(cells[(i - 1) * cols + j], costs.insert_cost),
                    add(cells[i * cols + j - 1], costs.delete_cost),
                );
            }
        }

        let distance = cells[rows * cols - 1].ok_or(Error::Overflow {
            context: "distance table",
        })?;
        Ok(Self {
            cells,
            rows,
            cols,
            distance,
        })
    }

    /// Number of rows, W + 1.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns, G + 1.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `None` when `(i, j)` is out of range or the cell's cost exceeds `u64::MAX`.
    pub fn get(&self, i: usize, j: usize) -> Option<u64> {
        if i < self.rows && j < self.cols {
            self.cells[i * self.cols + j]
        } else {
            None
        }
    }

    /// The edit distance, i.e. the bottom-right cell.
    pub fn distance(&self) -> u64 {
        self.distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_reference_fixtures() {
        let cases = [
            ("aaaaaaaaaa", "", 35, 30, 300),
            ("", "aaaaaaaaaa", 35, 30, 350),
            ("", "", 35, 30, 0),
            ("abc", "abc", 35, 30, 0),
            ("trail", "toil", 35, 30, 33),
            ("thank", "think", 35, 30, 8),
            ("thank", "think", 1, 1, 2),
        ];

        for (word, guess, delete_cost, insert_cost, expected) in cases {
            assert_eq!(
                edit_distance(word, guess, delete_cost, insert_cost).unwrap(),
                expected,
                "word: {word}, guess: {guess}"
            );
        }
    }

    #[test]
    fn test_empty() {
        assert_eq!(edit_distance("", "", 0, 0).unwrap(), 0);
        assert_eq!(edit_distance("", "abc", 7, 100).unwrap(), 21);
        assert_eq!(edit_distance("abc", "", 100, 7).unwrap(), 21);
    }

    #[test]
    fn test_costs_are_directional() {
        // "ab" -> "a" needs one insertion on the word side.
        assert_eq!(edit_distance("ab", "a", 1000, 3).unwrap(), 3);
        // "a" -> "ab" needs one deletion on the guess side.
        assert_eq!(edit_distance("a", "ab", 3, 1000).unwrap(), 3);
    }

    #[test]
    fn test_graduated_substitution() {
        assert_eq!(edit_distance("a", "b", 100, 100).unwrap(), 1);
        assert_eq!(edit_distance("a", "z", 100, 100).unwrap(), 25);
        // Cheaper to insert and delete than to substitute across the alphabet.
        assert_eq!(edit_distance("a", "z", 5, 5).unwrap(), 10);
    }

    #[test]
    fn test_zero_costs() {
        assert_eq!(edit_distance("kitten", "sitting", 0, 0).unwrap(), 0);
    }

    #[test]
    fn test_unicode_code_points() {
        // 'é' is 132 code points away from 'e', so insert + delete wins.
        assert_eq!(edit_distance("café", "cafe", 35, 30).unwrap(), 65);
        assert_eq!(edit_distance("café", "cafe", 100, 100).unwrap(), 132);
        assert_eq!(edit_distance("日本", "日本", 35, 30).unwrap(), 0);
        assert_eq!(edit_distance("日", "", 35, 30).unwrap(), 30);
    }

    #[test]
    fn test_negative_costs_rejected() {
        assert!(matches!(
            edit_distance("a", "b", -1, 30),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            edit_distance("", "", 35, -30),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_overflow_reported() {
        let costs = CostParameters {
            delete_cost: u64::MAX,
            insert_cost: u64::MAX,
        };
        assert!(matches!(
            edit_distance_with(&chars("ab"), &[], &costs),
            Err(Error::Overflow { .. })
        ));
        assert!(matches!(
            DistanceTable::build(&chars("ab"), &[], &costs),
            Err(Error::Overflow { .. })
        ));
        assert!(matches!(
            edit_distance_with(&chars("ab"), &chars("yz"), &costs),
            Ok(_)
        ));
    }

    #[test]
    fn test_distance_of_exactly_u64_max() {
        let costs = CostParameters {
            delete_cost: u64::MAX,
            insert_cost: u64::MAX,
        };
        assert_eq!(edit_distance_with(&chars("a"), &[], &costs).unwrap(), u64::MAX);
        // One insertion of 'a' after matching 'b' for free.
        assert_eq!(
            edit_distance_with(&chars("ab"), &chars("b"), &costs).unwrap(),
            u64::MAX
        );
        assert_eq!(
            edit_distance_with(&chars("b"), &chars("ab"), &costs).unwrap(),
            u64::MAX
        );
        let table = DistanceTable::build(&chars("ab"), &chars("b"), &costs).unwrap();
        assert_eq!(table.distance(), u64::MAX);
        assert_eq!(table.get(2, 0), None);
    }

    #[test]
    fn test_large_costs_with_cheap_path() {
        let costs = CostParameters {
            delete_cost: u64::MAX,
            insert_cost: u64::MAX,
        };
        assert_eq!(
            edit_distance_with(&chars("abc"), &chars("abd"), &costs).unwrap(),
            1
        );
        let table = DistanceTable::build(&chars("abc"), &chars("abd"), &costs).unwrap();
        assert_eq!(table.distance(), 1);
        // Border cells past the first step no longer fit but do not fail the build.
        assert_eq!(table.get(1, 0), Some(u64::MAX));
        assert_eq!(table.get(3, 0), None);
    }

    #[test]
    fn test_default_costs() {
        let costs = CostParameters::default();
        assert_eq!(costs.delete_cost, 35);
        assert_eq!(costs.insert_cost, 30);
        assert_eq!(CostParameters::new(35, 30).unwrap(), costs);
    }

    #[test]
    fn test_table_shape_and_borders() {
        let costs = CostParameters::default();
        let table = DistanceTable::build(&chars("trail"), &chars("toil"), &costs).unwrap();

        assert_eq!(table.rows(), 6);
        assert_eq!(table.cols(), 5);
        assert_eq!(table.get(0, 0), Some(0));
        for i in 0..table.rows() {
            assert_eq!(table.get(i, 0), Some(i as u64 * 30));
        }
        for j in 0..table.cols() {
            assert_eq!(table.get(0, j), Some(j as u64 * 35));
        }
        assert_eq!(table.get(6, 0), None);
        assert_eq!(table.distance(), 33);
    }

    #[test]
    fn test_table_counts_from_the_end() {
        let costs = CostParameters::new(35, 30).unwrap();
        let table = DistanceTable::build(&chars("ab"), &chars("xb"), &costs).unwrap();
        // Cell (1, 1) compares the last characters, 'b' and 'b'.
        assert_eq!(table.get(1, 1), Some(0));
        assert_eq!(table.distance(), u64::from('x' as u32 - 'a' as u32));
    }

    #[test]
    fn test_table_matches_rolling_rows() {
        let all_costs = [
            CostParameters::new(7, 11).unwrap(),
            CostParameters {
                delete_cost: u64::MAX,
                insert_cost: u64::MAX,
            },
            CostParameters {
                delete_cost: u64::MAX / 2,
                insert_cost: 3,
            },
        ];
        let words = ["", "a", "thank", "think", "trail", "toil", "abracadabra", "zebra"];
        for costs in &all_costs {
            for word in words {
                for guess in words {
                    let (w, g) = (chars(word), chars(guess));
                    let table = DistanceTable::build(&w, &g, costs).map(|t| t.distance());
                    assert_eq!(
                        table.ok(),
                        edit_distance_with(&w, &g, costs).ok(),
                        "word: {word}, guess: {guess}, costs: {costs:?}"
                    );
                }
            }
        }
    }

    mod properties {
        use super::super::*;
        use proptest::prelude::*;

        fn word() -> impl Strategy<Value = String> {
            "[a-z]{0,12}"
        }

        proptest! {
            #[test]
            fn identical_sequences_cost_nothing(a in word(), d in 0i64..100, i in 0i64..100) {
                prop_assert_eq!(edit_distance(&a, &a, d, i).unwrap(), 0);
            }

            #[test]
            fn empty_side_is_pure_insertion_or_deletion(a in word(), d in 0i64..100, i in 0i64..100) {
                let len = a.chars().count() as u64;
                prop_assert_eq!(edit_distance(&a, "", d, i).unwrap(), len * i as u64);
                prop_assert_eq!(edit_distance("", &a, d, i).unwrap(), len * d as u64);
            }

            #[test]
            fn bounded_by_substitution_only(
                pairs in prop::collection::vec((any::<char>(), any::<char>()), 0..10),
                d in 0i64..100,
                i in 0i64..100
            ) {
                let a: String = pairs.iter().map(|p| p.0).collect();
                let b: String = pairs.iter().map(|p| p.1).collect();
                let bound: u64 = pairs.iter().map(|&(x, y)| char_distance(x, y)).sum();
                prop_assert!(edit_distance(&a, &b, d, i).unwrap() <= bound);
            }

            #[test]
            fn swapping_sides_swaps_costs(a in word(), b in word(), d in 0i64..100, i in 0i64..100) {
                prop_assert_eq!(
                    edit_distance(&a, &b, d, i).unwrap(),
                    edit_distance(&b, &a, i, d).unwrap()
                );
            }

            #[test]
            fn rolling_rows_agree_with_table(a in word(), b in word(), d in 0u64..100, i in 0u64..100) {
                let costs = CostParameters { delete_cost: d, insert_cost: i };
                let (a, b): (Vec<char>, Vec<char>) = (a.chars().collect(), b.chars().collect());
                prop_assert_eq!(
                    DistanceTable::build(&a, &b, &costs).unwrap().distance(),
                    edit_distance_with(&a, &b, &costs).unwrap()
                );
            }

            #[test]
            fn rolling_rows_agree_with_table_for_huge_costs(
                a in word(),
                b in word(),
                d in (u64::MAX / 4)..=u64::MAX,
                i in (u64::MAX / 4)..=u64::MAX
            ) {
                let costs = CostParameters { delete_cost: d, insert_cost: i };
                let (a, b): (Vec<char>, Vec<char>) = (a.chars().collect(), b.chars().collect());
                prop_assert_eq!(
                    DistanceTable::build(&a, &b, &costs).map(|t| t.distance()).ok(),
                    edit_distance_with(&a, &b, &costs).ok()
                );
            }
        }
    }
}
