/// Logical screen geometry, kept in the original game's pixel units.
/// The terminal renderer maps these onto character cells.
pub const RES_X: i32 = 320;
pub const RES_Y: i32 = 240;
pub const TILE: i32 = 16;

/// Height of the lawn in tiles, measured up from the bottom of the screen.
pub const LAWN_ROWS: i32 = 10;
pub const LAWN_COLS: i32 = RES_X / TILE;

/// Pixel y of the topmost lawn row.
pub const LAWN_TOP: i32 = RES_Y - LAWN_ROWS * TILE;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }
}

/// Whether the lawn tile whose top-left corner sits at `tile` has already
/// been cut, given the mower position. The mower cuts right-to-left along
/// each row and bottom-to-top across rows, so a tile is cut once the mower
/// is on a higher row, or on the same row at or to the left of it.
pub fn is_cut(mower: Point, tile: Point) -> bool {
    mower.y < tile.y || (mower.y == tile.y && mower.x <= tile.x)
}

/// Tile positions in draw order: bottom-right first, then leftwards along
/// each row, rows bottom to top.
pub fn tile_positions() -> impl Iterator<Item = Point> {
    (0..LAWN_ROWS).flat_map(|row| {
        (0..LAWN_COLS).map(move |col| {
            Point::new(
                RES_X - TILE - col * TILE,
                RES_Y - TILE - row * TILE,
            )
        })
    })
}
