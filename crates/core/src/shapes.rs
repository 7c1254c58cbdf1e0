//! Shapes module - orientation matrices and the shape catalog
//!
//! A shape is an ordered list of orientations. Each orientation is a square
//! occupancy matrix (side 1 to 4) where a set bit marks an occupied sub-cell.
//! Rotating a piece simply steps to the next orientation, wrapping around.
//!
//! Shapes are immutable templates shared between every piece that uses them.

use std::fmt;
use std::sync::Arc;

use arrayvec::ArrayVec;

use crate::rng::RandomSource;
use crate::types::{Color, MAX_PIECE_CELLS, MAX_SHAPE_SIDE};

/// Offset of a single occupied sub-cell relative to the bounding box: (col, row)
pub type CellOffset = (i32, i32);

/// Reasons a shape template is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeError {
    /// The shape has no orientations at all
    NoOrientations,
    /// Matrix side is zero or larger than `MAX_SHAPE_SIDE`
    BadSide { side: usize },
    /// An orientation is not square or differs in side from the first one
    NotSquare { orientation: usize },
    /// An orientation has no occupied sub-cell
    Blank { orientation: usize },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::NoOrientations => write!(f, "shape has no orientations"),
            ShapeError::BadSide { side } => {
                write!(f, "shape side {} is outside 1..={}", side, MAX_SHAPE_SIDE)
            }
            ShapeError::NotSquare { orientation } => {
                write!(f, "orientation {} is not a square of the shape's side", orientation)
            }
            ShapeError::Blank { orientation } => {
                write!(f, "orientation {} has no occupied cells", orientation)
            }
        }
    }
}

impl std::error::Error for ShapeError {}

/// One rotated configuration of a shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Orientation {
    side: usize,
    /// Occupied sub-cells in row-major order
    cells: ArrayVec<CellOffset, MAX_PIECE_CELLS>,
}

impl Orientation {
    pub fn side(&self) -> usize {
        self.side
    }

    /// Occupied sub-cells as (col, row), top row first
    pub fn cells(&self) -> &[CellOffset] {
        &self.cells
    }

    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.cells
            .iter()
            .any(|&(c, r)| r as usize == row && c as usize == col)
    }
}

/// An immutable shape template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    name: String,
    side: usize,
    orientations: Vec<Orientation>,
}

impl Shape {
    /// Build a shape from boolean occupancy matrices
    pub fn new(
        name: impl Into<String>,
        matrices: &[Vec<Vec<bool>>],
    ) -> Result<Self, ShapeError> {
        let first = matrices.first().ok_or(ShapeError::NoOrientations)?;
        let side = first.len();
        if side == 0 || side > MAX_SHAPE_SIDE {
            return Err(ShapeError::BadSide { side });
        }

        let mut orientations = Vec::with_capacity(matrices.len());
        for (index, matrix) in matrices.iter().enumerate() {
            if matrix.len() != side || matrix.iter().any(|row| row.len() != side) {
                return Err(ShapeError::NotSquare { orientation: index });
            }

            let mut cells = ArrayVec::new();
            for (r, row) in matrix.iter().enumerate() {
                for (c, &occupied) in row.iter().enumerate() {
                    if occupied {
                        cells.push((c as i32, r as i32));
                    }
                }
            }
            if cells.is_empty() {
                return Err(ShapeError::Blank { orientation: index });
            }

            orientations.push(Orientation { side, cells });
        }

        Ok(Self {
            name: name.into(),
            side,
            orientations,
        })
    }

    /// Build a shape from 0/1 tables, the form the built-in catalog is written in
    pub fn from_bits(name: impl Into<String>, bits: &[&[&[u8]]]) -> Result<Self, ShapeError> {
        let matrices: Vec<Vec<Vec<bool>>> = bits
            .iter()
            .map(|m| m.iter().map(|row| row.iter().map(|&b| b != 0).collect()).collect())
            .collect();
        Self::new(name, &matrices)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Side length of every orientation matrix
    pub fn side(&self) -> usize {
        self.side
    }

    pub fn orientation_count(&self) -> usize {
        self.orientations.len()
    }

    /// Orientation at `index`, wrapping modulo the orientation count
    pub fn orientation(&self, index: usize) -> &Orientation {
        &self.orientations[index % self.orientations.len()]
    }
}

const Z: &[&[&[u8]]] = &[
    &[&[1, 1, 0], &[0, 1, 1], &[0, 0, 0]],
    &[&[0, 0, 1], &[0, 1, 1], &[0, 1, 0]],
    &[&[0, 0, 0], &[1, 1, 0], &[0, 1, 1]],
    &[&[0, 1, 0], &[1, 1, 0], &[1, 0, 0]],
];

const S: &[&[&[u8]]] = &[
    &[&[0, 1, 1], &[1, 1, 0], &[0, 0, 0]],
    &[&[0, 1, 0], &[0, 1, 1], &[0, 0, 1]],
    &[&[0, 0, 0], &[0, 1, 1], &[1, 1, 0]],
    &[&[1, 0, 0], &[1, 1, 0], &[0, 1, 0]],
];

const T: &[&[&[u8]]] = &[
    &[&[0, 0, 0], &[1, 1, 1], &[0, 1, 0]],
    &[&[0, 1, 0], &[1, 1, 0], &[0, 1, 0]],
    &[&[0, 1, 0], &[1, 1, 1], &[0, 0, 0]],
    &[&[0, 1, 0], &[0, 1, 1], &[0, 1, 0]],
];

const O: &[&[&[u8]]] = &[&[&[1, 1], &[1, 1]]];

const L: &[&[&[u8]]] = &[
    &[&[0, 0, 1], &[1, 1, 1], &[0, 0, 0]],
    &[&[0, 1, 0], &[0, 1, 0], &[0, 1, 1]],
    &[&[0, 0, 0], &[1, 1, 1], &[1, 0, 0]],
    &[&[1, 1, 0], &[0, 1, 0], &[0, 1, 0]],
];

const I: &[&[&[u8]]] = &[
    &[&[0, 0, 0, 0], &[1, 1, 1, 1], &[0, 0, 0, 0], &[0, 0, 0, 0]],
    &[&[0, 0, 1, 0], &[0, 0, 1, 0], &[0, 0, 1, 0], &[0, 0, 1, 0]],
    &[&[0, 0, 0, 0], &[0, 0, 0, 0], &[1, 1, 1, 1], &[0, 0, 0, 0]],
    &[&[0, 1, 0, 0], &[0, 1, 0, 0], &[0, 1, 0, 0], &[0, 1, 0, 0]],
];

const J: &[&[&[u8]]] = &[
    &[&[1, 0, 0], &[1, 1, 1], &[0, 0, 0]],
    &[&[0, 1, 1], &[0, 1, 0], &[0, 1, 0]],
    &[&[0, 0, 0], &[1, 1, 1], &[0, 0, 1]],
    &[&[0, 1, 0], &[0, 1, 0], &[1, 1, 0]],
];

/// Built-in shapes and their colors, in catalog order
const STANDARD: [(&str, &[&[&[u8]]], Color); 7] = [
    ("Z", Z, Color::Green),
    ("S", S, Color::Orange),
    ("T", T, Color::Yellow),
    ("O", O, Color::Red),
    ("L", L, Color::Purple),
    ("I", I, Color::Cyan),
    ("J", J, Color::Black),
];

/// A shape paired with the color its pieces lock as
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub shape: Arc<Shape>,
    pub color: Color,
}

/// The set of shape+color pairs new pieces are drawn from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShapeCatalog {
    entries: Vec<CatalogEntry>,
}

impl ShapeCatalog {
    /// An empty catalog; register shapes before starting a game with it
    pub fn new() -> Self {
        Self::default()
    }

    /// The seven standard tetrominoes
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        for (name, bits, color) in STANDARD {
            if let Ok(shape) = Shape::from_bits(name, bits) {
                catalog.register(shape, color);
            }
        }
        catalog
    }

    /// Append a shape+color pair
    pub fn register(&mut self, shape: Shape, color: Color) -> &mut Self {
        self.entries.push(CatalogEntry {
            shape: Arc::new(shape),
            color,
        });
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CatalogEntry> {
        self.entries.get(index)
    }

    /// Look up an entry by shape name
    pub fn find(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.shape.name() == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> + '_ {
        self.entries.iter()
    }

    /// Largest matrix side among the registered shapes
    pub fn max_side(&self) -> usize {
        self.entries
            .iter()
            .map(|entry| entry.shape.side())
            .max()
            .unwrap_or(0)
    }

    /// Choose an entry uniformly at random
    pub fn pick<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Option<&CatalogEntry> {
        if self.entries.is_empty() {
            return None;
        }
        let index = rng.next_range(self.entries.len() as u32) as usize;
        self.entries.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SimpleRng;

    #[test]
    fn test_standard_catalog_contents() {
        let catalog = ShapeCatalog::standard();
        assert_eq!(catalog.len(), 7);
        assert_eq!(catalog.max_side(), 4);

        let expected = [
            ("Z", Color::Green),
            ("S", Color::Orange),
            ("T", Color::Yellow),
            ("O", Color::Red),
            ("L", Color::Purple),
            ("I", Color::Cyan),
            ("J", Color::Black),
        ];
        for (index, (name, color)) in expected.iter().enumerate() {
            let entry = catalog.get(index).unwrap();
            assert_eq!(entry.shape.name(), *name);
            assert_eq!(entry.color, *color);
        }
    }

    #[test]
    fn test_every_standard_orientation_has_four_cells() {
        for entry in ShapeCatalog::standard().iter() {
            for i in 0..entry.shape.orientation_count() {
                assert_eq!(entry.shape.orientation(i).cells().len(), 4, "{}", entry.shape.name());
            }
        }
    }

    #[test]
    fn test_orientation_cells_are_row_major() {
        let t = Shape::from_bits("T", T).unwrap();
        assert_eq!(t.orientation(0).cells(), &[(0, 1), (1, 1), (2, 1), (1, 2)]);
        assert!(t.orientation(0).is_occupied(2, 1));
        assert!(!t.orientation(0).is_occupied(0, 0));
    }

    #[test]
    fn test_orientation_index_wraps() {
        let i = Shape::from_bits("I", I).unwrap();
        assert_eq!(i.orientation(4), i.orientation(0));
        let o = Shape::from_bits("O", O).unwrap();
        assert_eq!(o.orientation_count(), 1);
        assert_eq!(o.orientation(3), o.orientation(0));
    }

    #[test]
    fn test_malformed_shapes_rejected() {
        assert_eq!(Shape::new("none", &[]), Err(ShapeError::NoOrientations));
        assert_eq!(
            Shape::new("wide", &[vec![vec![true; 5]; 5]]),
            Err(ShapeError::BadSide { side: 5 })
        );
        assert_eq!(
            Shape::new("ragged", &[vec![vec![true, true], vec![true]]]),
            Err(ShapeError::NotSquare { orientation: 0 })
        );
        assert_eq!(
            Shape::new("mixed", &[vec![vec![true; 2]; 2], vec![vec![true; 3]; 3]]),
            Err(ShapeError::NotSquare { orientation: 1 })
        );
        assert_eq!(
            Shape::new("blank", &[vec![vec![false; 2]; 2]]),
            Err(ShapeError::Blank { orientation: 0 })
        );
    }

    #[test]
    fn test_register_extends_catalog() {
        let mut catalog = ShapeCatalog::standard();
        let dot = Shape::from_bits("dot", &[&[&[1]]]).unwrap();
        catalog.register(dot, Color::Blue);
        assert_eq!(catalog.len(), 8);
        assert_eq!(catalog.find("dot").unwrap().color, Color::Blue);
    }

    #[test]
    fn test_pick_is_deterministic_per_seed() {
        let catalog = ShapeCatalog::standard();
        let mut a = SimpleRng::new(99);
        let mut b = SimpleRng::new(99);
        for _ in 0..50 {
            let x = catalog.pick(&mut a).unwrap().shape.name().to_string();
            let y = catalog.pick(&mut b).unwrap().shape.name().to_string();
            assert_eq!(x, y);
        }
        assert!(ShapeCatalog::new().pick(&mut a).is_none());
    }
}
