use std::collections::HashMap;
use itertools::Itertools;
use gasviz_core::Molecule;

/// How candidate pairs for collision checks are enumerated.
///
/// Every strategy yields pairs `(i, j)` with `i < j`, sorted outer-to-inner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PairEnumeration {
    /// Every unordered pair, O(n²).
    #[default]
    AllPairs,
    /// Only pairs sharing or neighbouring a cell of one diameter, taken from the
    /// positions the candidates are computed from.
    UniformGrid,
}

impl PairEnumeration {
    pub fn candidate_pairs(&self, molecules: &[Molecule]) -> Vec<(usize, usize)> {
        match self {
            PairEnumeration::AllPairs => (0..molecules.len()).tuple_combinations().collect(),
            PairEnumeration::UniformGrid => grid_pairs(molecules),
        }
    }
}

fn grid_pairs(molecules: &[Molecule]) -> Vec<(usize, usize)> {
    let cell_size = molecules
        .iter()
        .map(Molecule::diameter)
        .fold(0.0f64, f64::max);
    if molecules.len() < 2 || !(cell_size > 0.0) {
        return vec![];
    }
    let cell_of = |molecule: &Molecule| {
        (
            (molecule.position.x / cell_size).floor() as i64,
            (molecule.position.y / cell_size).floor() as i64,
        )
    };
    let mut cells: HashMap<(i64, i64), Vec<usize>> = HashMap::new();
    for (i, molecule) in molecules.iter().enumerate() {
        cells.entry(cell_of(molecule)).or_default().push(i);
    }
    let mut pairs = vec![];
    for (i, molecule) in molecules.iter().enumerate() {
        let (cx, cy) = cell_of(molecule);
        for (dx, dy) in (-1..=1).cartesian_product(-1..=1) {
            if let Some(members) = cells.get(&(cx + dx, cy + dy)) {
                pairs.extend(members.iter().filter(|&&j| j > i).map(|&j| (i, j)));
            }
        }
    }
    pairs.sort_unstable();
    pairs.dedup();
    pairs
}
