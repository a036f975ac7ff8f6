//! Text preview of a generated map, one glyph per tile.

use procgen::{CellType, GridPos, MapData};

pub fn glyph(kind: CellType) -> char {
    match kind {
        CellType::Empty => ' ',
        CellType::Floor => '.',
        CellType::Wall => '#',
        CellType::Door => '+',
    }
}

/// Renders the generation extent row by row; trailing blanks are trimmed per line.
pub fn render_ascii(map: &MapData) -> String {
    let mut out = String::new();
    for y in 0..map.height {
        let line: String =
            (0..map.width).map(|x| glyph(map.cell_type_at(GridPos::new(x, y)))).collect();
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
