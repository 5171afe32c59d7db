//! Edit-path solver — DP cost table and shortest-path reconstruction.
//!
//! The edit graph over sequences A (length N) and B (length M) has a node
//! for every (x, y) in [0,N]×[0,M]; horizontal edges delete A[x], vertical
//! edges insert B[y], and diagonal edges are free matches. The solver fills
//! the classic (N+1)×(M+1) cost table and backtracks one minimal path.

// ─── Path ─────────────────────────────────────────────────────────────────────

/// An ordered walk of grid coordinates from (0,0) to (N,M). Consecutive
/// entries differ by a single diagonal, horizontal (+1 x), or vertical
/// (+1 y) step.
pub type Path = Vec<(usize, usize)>;

// ─── CostTable ────────────────────────────────────────────────────────────────

/// The (N+1)×(M+1) edit-distance table, stored row-major.
///
/// `get(i, j)` is the minimum number of insert/delete operations turning
/// A[0..i] into B[0..j]. Row 0 and column 0 equal their index.
pub struct CostTable {
    n: usize,
    m: usize,
    cells: Vec<usize>,
}

impl CostTable {
    /// Fill the table bottom-up in row-major order. O(N·M) time and space.
    pub fn build(a: &str, b: &str) -> Self {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        let (n, m) = (a.len(), b.len());
        let mut cells = vec![0usize; (n + 1) * (m + 1)];
        for i in 0..=n {
            cells[i * (m + 1)] = i;
        }
        for j in 0..=m {
            cells[j] = j;
        }
        for i in 1..=n {
            for j in 1..=m {
                let cell = if a[i - 1] == b[j - 1] {
                    cells[(i - 1) * (m + 1) + (j - 1)]
                } else {
                    cells[(i - 1) * (m + 1) + j].min(cells[i * (m + 1) + (j - 1)]) + 1
                };
                cells[i * (m + 1) + j] = cell;
            }
        }
        Self { n, m, cells }
    }

    pub fn dims(&self) -> (usize, usize) {
        (self.n, self.m)
    }

    /// Cost at (i, j). Panics if out of range; valid indices are
    /// 0 ≤ i ≤ N, 0 ≤ j ≤ M.
    pub fn get(&self, i: usize, j: usize) -> usize {
        self.cells[i * (self.m + 1) + j]
    }

    /// The full edit distance, `get(N, M)`.
    pub fn edit_distance(&self) -> usize {
        self.get(self.n, self.m)
    }
}

// ─── Path reconstruction ──────────────────────────────────────────────────────

/// Compute one shortest edit path from (0,0) to (N,M).
///
/// Backtracks from (N,M): takes the diagonal whenever the symbols match,
/// otherwise moves vertically only when the cost relation explicitly
/// justifies it (`cost(i,j) == cost(i-1,j) + 1`), with horizontal as the
/// fallback. The tie-break makes the result deterministic.
///
/// Total for any pair of finite sequences: empty inputs yield a pure
/// horizontal or vertical path, identical inputs an all-diagonal one.
pub fn compute_edit_path(a: &str, b: &str) -> Path {
    let dp = CostTable::build(a, b);
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (n, m) = dp.dims();

    let mut path: Path = Vec::with_capacity(n + m + 1);
    let (mut i, mut j) = (n, m);
    while i > 0 || j > 0 {
        path.push((i, j));
        if i > 0 && j > 0 && a[i - 1] == b[j - 1] {
            i -= 1;
            j -= 1;
        } else if i > 0 && dp.get(i, j) == dp.get(i - 1, j) + 1 {
            i -= 1;
        } else {
            j -= 1;
        }
    }
    path.push((0, 0));
    path.reverse();
    path
}

/// Count of non-diagonal steps in a path — equals the edit distance for
/// any path produced by [`compute_edit_path`].
pub fn non_diagonal_steps(path: &Path) -> usize {
    path.windows(2)
        .filter(|w| !(w[1].0 == w[0].0 + 1 && w[1].1 == w[0].1 + 1))
        .count()
}

// ─── Tests ───────────────────────────────────────────────────────────────────
