use core::ops::Range;

/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u16;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u32;

/// Two-dimensional coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    (a as CellCount).saturating_mul(b as CellCount)
}

/// Converts a pair of arbitrary integers into coordinates inside `bounds`.
///
/// Negative values and values that do not fit a [`Coord`] are rejected the same way as values past the edge.
pub fn checked_coords<C: TryInto<Coord>>(x: C, y: C, bounds: Coord2) -> Option<Coord2> {
    let x: Coord = x.try_into().ok()?;
    let y: Coord = y.try_into().ok()?;
    (x < bounds.0 && y < bounds.1).then_some((x, y))
}

/// Slot of the center cell inside its 3x3 block.
const CENTER_SLOT: i16 = 4;

/// Moore neighborhood of `center`, clipped to a board of size `bounds`.
pub fn neighbors(center: Coord2, bounds: Coord2) -> Neighbors {
    Neighbors {
        center,
        bounds,
        slots: 0..9,
    }
}

/// Walks the 3x3 block around a cell row by row, skipping the cell itself and anything off the board.
#[derive(Clone, Debug)]
pub struct Neighbors {
    center: Coord2,
    bounds: Coord2,
    slots: Range<i16>,
}

impl Iterator for Neighbors {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        let (center, bounds) = (self.center, self.bounds);
        self.slots
            .by_ref()
            .filter(|&slot| slot != CENTER_SLOT)
            .find_map(|slot| shift(center, (slot % 3 - 1, slot / 3 - 1), bounds))
    }
}

fn shift((x, y): Coord2, (dx, dy): (i16, i16), (width, height): Coord2) -> Option<Coord2> {
    let x = x.checked_add_signed(dx).filter(|&x| x < width)?;
    let y = y.checked_add_signed(dy).filter(|&y| y < height)?;
    Some((x, y))
}
