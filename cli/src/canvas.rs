use minesweep_core::{Canvas, Point, Rgb};
use std::fmt;

/// Renders draw calls into one character per cell.
///
/// Revealed empty cells receive no draw call and keep the background character.
pub(crate) struct TextCanvas {
    width: usize,
    height: usize,
    cell_size: f64,
    cells: Vec<char>,
    messages: Vec<String>,
}

impl TextCanvas {
    const BACKGROUND: char = '.';
    const COVER: char = '#';
    const FLAG: char = 'F';

    pub(crate) fn new(width: usize, height: usize, cell_size: f64) -> Self {
        Self {
            width,
            height,
            cell_size,
            cells: vec![Self::BACKGROUND; width * height],
            messages: Vec::new(),
        }
    }

    fn cell_index(&self, (x, y): Point) -> Option<usize> {
        if x < 0.0 || y < 0.0 {
            return None;
        }
        let col = (x / self.cell_size) as usize;
        let row = (y / self.cell_size) as usize;
        (col < self.width && row < self.height).then_some(row * self.width + col)
    }

    fn put(&mut self, at: Point, ch: char) {
        if let Some(index) = self.cell_index(at) {
            self.cells[index] = ch;
        }
    }
}

impl Canvas for TextCanvas {
    // the character layout already is the grid
    fn line(&mut self, _from: Point, _to: Point, _weight: f64, _color: Rgb) {}

    fn fill_square(&mut self, origin: Point, _side: f64, _color: Rgb) {
        self.put(origin, Self::COVER);
    }

    fn triangle(&mut self, corners: [Point; 3], _color: Rgb) {
        self.put(corners[0], Self::FLAG);
    }

    fn text(&mut self, text: &str, center: Point, size: f64, _color: Rgb) {
        match text.chars().next() {
            Some(ch) if size <= self.cell_size && text.chars().count() == 1 => self.put(center, ch),
            _ => self.messages.push(text.to_string()),
        }
    }
}

impl fmt::Display for TextCanvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "    ")?;
        for col in 0..self.width {
            write!(f, "{:>3}", col)?;
        }
        writeln!(f)?;

        for (row, cells) in self.cells.chunks(self.width.max(1)).enumerate() {
            write!(f, "{:>4}", row)?;
            for ch in cells {
                write!(f, "{:>3}", ch)?;
            }
            writeln!(f)?;
        }

        for message in &self.messages {
            writeln!(f, "{message}")?;
        }
        Ok(())
    }
}
