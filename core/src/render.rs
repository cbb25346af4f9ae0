//! State-to-draw-call rendering over an abstract [`Canvas`].
//!
//! Nothing here mutates the session, so frontends may call [`render`] as often as they like.

use serde::{Deserialize, Serialize};

use crate::*;

/// A point on the drawing surface, in pixels.
pub type Point = (f64, f64);

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Self = Self(0, 0, 0);
    pub const RED: Self = Self(255, 0, 0);
    pub const COVER: Self = Self(150, 150, 150);
}

/// Drawing surface a frontend provides.
pub trait Canvas {
    fn line(&mut self, from: Point, to: Point, weight: f64, color: Rgb);
    /// Axis-aligned filled square with its top-left corner at `origin`.
    fn fill_square(&mut self, origin: Point, side: f64, color: Rgb);
    fn triangle(&mut self, corners: [Point; 3], color: Rgb);
    /// Text centered on `center`.
    fn text(&mut self, text: &str, center: Point, size: f64, color: Rgb);
}

const LINE_WEIGHT: f64 = 0.01;
const COVER_INSET: f64 = 0.05;
const TEXT_SCALE: f64 = 0.5;
const FLAG_POLE: f64 = 0.375;
const FLAG_TOP: f64 = 0.125;
const FLAG_TIP: f64 = 0.25;

const DIGITS: [&str; 9] = ["0", "1", "2", "3", "4", "5", "6", "7", "8"];

/// Colour used for an adjacency count.
pub const fn number_color(count: u8) -> Rgb {
    match count {
        1 => Rgb(25, 22, 170),
        2 => Rgb(22, 105, 170),
        3 => Rgb(22, 170, 144),
        4 => Rgb(10, 142, 50),
        5 => Rgb(170, 157, 14),
        6 => Rgb(170, 118, 14),
        7 => Rgb(170, 71, 14),
        8 => Rgb(98, 42, 10),
        _ => Rgb::BLACK,
    }
}

pub fn render(session: &GameSession, canvas: &mut impl Canvas, cell_size: f64) {
    let board = session.board();
    draw_grid(board, canvas, cell_size);

    for (coords, view) in board.iter_views() {
        let origin = (f64::from(coords.0) * cell_size, f64::from(coords.1) * cell_size);
        if session.triggered_mine() == Some(coords) {
            canvas.fill_square(origin, cell_size, Rgb::RED);
        }
        draw_cell(view, origin, canvas, cell_size);
    }

    if let Some(message) = banner(session.status()) {
        let (width, height) = (f64::from(board.width()), f64::from(board.height()));
        let chars = message.len() as f64;
        let size = cell_size * height.min(width / chars);
        let center = (cell_size * width / 2.0, cell_size * height / 2.0);
        canvas.text(message, center, size, Rgb::BLACK);
    }
}

pub const fn banner(status: GameStatus) -> Option<&'static str> {
    match status {
        GameStatus::InProgress => None,
        GameStatus::Won => Some("YOU WON"),
        GameStatus::Lost => Some("YOU LOST"),
    }
}

fn draw_grid(board: &Board, canvas: &mut impl Canvas, cell_size: f64) {
    let weight = cell_size * LINE_WEIGHT;
    let right = cell_size * f64::from(board.width());
    let bottom = cell_size * f64::from(board.height());

    for row in 0..=board.height() {
        let y = cell_size * f64::from(row);
        canvas.line((0.0, y), (right, y), weight, Rgb::BLACK);
    }
    for col in 0..=board.width() {
        let x = cell_size * f64::from(col);
        canvas.line((x, 0.0), (x, bottom), weight, Rgb::BLACK);
    }
}

fn draw_cell(view: CellView, origin: Point, canvas: &mut impl Canvas, cell_size: f64) {
    let center = (origin.0 + cell_size / 2.0, origin.1 + cell_size / 2.0);
    let text_size = cell_size * TEXT_SCALE;

    match view {
        CellView::Hidden => draw_cover(origin, canvas, cell_size),
        CellView::Flagged => {
            draw_cover(origin, canvas, cell_size);
            draw_flag(origin, canvas, cell_size);
        }
        CellView::Revealed(0) => {}
        CellView::Revealed(count) => {
            let digit = DIGITS[usize::from(count.min(8))];
            canvas.text(digit, center, text_size, number_color(count));
        }
        CellView::Mine => canvas.text("M", center, text_size, Rgb::RED),
    }
}

fn draw_cover(origin: Point, canvas: &mut impl Canvas, cell_size: f64) {
    let inset = cell_size * COVER_INSET;
    canvas.fill_square(
        (origin.0 + inset, origin.1 + inset),
        cell_size - 2.0 * inset,
        Rgb::COVER,
    );
}

fn draw_flag(origin: Point, canvas: &mut impl Canvas, cell_size: f64) {
    let (x, y) = origin;
    let at = |dx: f64, dy: f64| (x + cell_size * dx, y + cell_size * dy);

    canvas.triangle(
        [
            at(FLAG_POLE, FLAG_TOP),
            at(FLAG_POLE, FLAG_POLE),
            at(1.0 - FLAG_TIP, FLAG_TIP),
        ],
        Rgb::RED,
    );
    let weight = cell_size * LINE_WEIGHT;
    canvas.line(
        at(FLAG_POLE, FLAG_TOP),
        at(FLAG_POLE, 1.0 - FLAG_TOP),
        weight,
        Rgb::BLACK,
    );
    canvas.line(
        at(FLAG_TIP, 1.0 - FLAG_TOP),
        at(2.0 * FLAG_TIP, 1.0 - FLAG_TOP),
        weight,
        Rgb::BLACK,
    );
}
