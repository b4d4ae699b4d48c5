use std::ops;

use serde::{Deserialize, Serialize};

use crate::dims::Coord;

/// Row-major 2D arena, indexed by [`Coord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Array2D<T> {
    buf: Vec<T>,
    rows: usize,
    columns: usize,
}

impl<T> Array2D<T> {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn dim_to_idx(&self, pos: Coord) -> Option<usize> {
        if !pos.all_non_negative() {
            return None;
        }

        let (row, col) = (pos.0 as usize, pos.1 as usize);
        if row >= self.rows || col >= self.columns {
            return None;
        }

        Some(row * self.columns + col)
    }

    pub fn idx_to_dim(&self, idx: usize) -> Option<Coord> {
        if idx >= self.buf.len() {
            return None;
        }

        Some(Coord((idx / self.columns) as i32, (idx % self.columns) as i32))
    }

    pub fn get(&self, pos: Coord) -> Option<&T> {
        self.dim_to_idx(pos).and_then(|i| self.buf.get(i))
    }

    pub fn get_mut(&mut self, pos: Coord) -> Option<&mut T> {
        self.dim_to_idx(pos).and_then(|i| self.buf.get_mut(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buf.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.buf.iter_mut()
    }

    pub fn iter_pos(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.buf.len()).filter_map(move |i| self.idx_to_dim(i))
    }
}

impl<T: Clone> Array2D<T> {
    pub fn new(item: T, rows: usize, columns: usize) -> Self {
        Self {
            buf: vec![item; rows * columns],
            rows,
            columns,
        }
    }
}

impl<T> ops::Index<Coord> for Array2D<T> {
    type Output = T;

    fn index(&self, index: Coord) -> &Self::Output {
        self.get(index)
            .unwrap_or_else(|| panic!("Index out of bounds: {:?}", index))
    }
}

impl<T> ops::IndexMut<Coord> for Array2D<T> {
    fn index_mut(&mut self, index: Coord) -> &mut Self::Output {
        self.get_mut(index)
            .unwrap_or_else(|| panic!("Index out of bounds: {:?}", index))
    }
}
