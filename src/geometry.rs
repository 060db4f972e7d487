use crate::error::{KbResult, KeebError};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use tracing::trace;

/// A single character position on a keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Key {
    pub value: char,
}

impl Key {
    pub fn new(value: char) -> Self {
        Self { value }
    }
}

/// An ordered horizontal group of keys.
/// The column index of a key is its position in `keys`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    /// X coordinate of the first key in the row
    pub x_start: f32,
    pub keys: Vec<Key>,
}

impl Row {
    pub fn new(x_start: f32) -> Self {
        Self {
            x_start,
            keys: Vec::new(),
        }
    }

    /// Creates a new key and appends it to the end of the row.
    /// Duplicates and the character set are not checked.
    pub fn add_key(&mut self, value: char) {
        self.keys.push(Key::new(value));
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// A 2-D point on a keyboard, in the same units as the key width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x={:.2} y={:.2}", self.x, self.y)
    }
}

/// A named keyboard: uniform key size and spacing plus ordered rows.
/// The row index is the vertical position of the row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Keyboard {
    pub name: String,
    pub key_width: f32,
    pub space_width: f32,
    pub rows: Vec<Row>,
}

impl Keyboard {
    pub fn new(name: impl Into<String>, key_width: f32, space_width: f32) -> KbResult<Self> {
        if !key_width.is_finite() || key_width <= 0.0 {
            return Err(KeebError::Config(format!(
                "key width must be a positive number, got {}",
                key_width
            )));
        }
        if !space_width.is_finite() || space_width < 0.0 {
            return Err(KeebError::Config(format!(
                "space width must be a non-negative number, got {}",
                space_width
            )));
        }

        Ok(Self {
            name: name.into(),
            key_width,
            space_width,
            rows: Vec::new(),
        })
    }

    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Distance between the origins of two neighbouring keys.
    pub fn pitch(&self) -> f32 {
        self.key_width + self.space_width
    }

    pub fn key_count(&self) -> usize {
        self.rows.iter().map(Row::len).sum()
    }

    /// Locates a key and returns its coordinates, or `None` if no key carries
    /// the character.
    ///
    /// The query is lowercased and compared exactly against the stored values.
    /// Rows are scanned top to bottom and keys left to right; the first match
    /// wins when a character appears more than once.
    pub fn get_key_point(&self, value: char) -> Option<Point> {
        // Lowercasing can expand to several chars, none of which fits a single key.
        let mut lower = value.to_lowercase();
        let needle = match (lower.next(), lower.next()) {
            (Some(c), None) => c,
            _ => {
                trace!("'{}' has no single-char lowercase form", value);
                return None;
            }
        };

        let found = self.rows.iter().enumerate().find_map(|(row_idx, row)| {
            row.keys
                .iter()
                .position(|k| k.value == needle)
                .map(|col_idx| (row_idx, col_idx))
        });

        match found {
            Some((row_idx, col_idx)) => Some(self.point_at(row_idx, col_idx)),
            None => {
                trace!("'{}' not found on {}", value, self.name);
                None
            }
        }
    }

    /// Text variant of [`Keyboard::get_key_point`]. The input must be exactly
    /// one character.
    pub fn get_key_point_str(&self, value: &str) -> KbResult<Option<Point>> {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(self.get_key_point(c)),
            _ => Err(KeebError::InvalidQuery(format!(
                "expected a single character, got {:?}",
                value
            ))),
        }
    }

    /// Every key with its coordinates, in row-major order.
    pub fn key_points(&self) -> impl Iterator<Item = (char, Point)> + '_ {
        self.rows.iter().enumerate().flat_map(move |(row_idx, row)| {
            row.keys
                .iter()
                .enumerate()
                .map(move |(col_idx, k)| (k.value, self.point_at(row_idx, col_idx)))
        })
    }

    /// Characters carried by more than one key. Stored values are compared
    /// exactly, the same way lookup compares them, so the first of each in
    /// row-major order is the one lookup returns.
    pub fn duplicate_keys(&self) -> Vec<char> {
        let mut seen = HashSet::new();
        let mut dupes = Vec::new();
        for key in self.rows.iter().flat_map(|r| r.keys.iter()) {
            if !seen.insert(key.value) && !dupes.contains(&key.value) {
                dupes.push(key.value);
            }
        }
        dupes
    }

    fn point_at(&self, row_idx: usize, col_idx: usize) -> Point {
        let pitch = self.pitch();
        Point {
            x: self.rows[row_idx].x_start + pitch * col_idx as f32,
            y: pitch * row_idx as f32,
        }
    }
}
