//! Scripted starter layout: a road lattice with amenities.

use anyhow::Result;
use city_core::Cell;
use city_sim::City;

/// Major roads every `MAJOR_SPACING` cells, a minor road halfway between.
const MAJOR_SPACING: i32 = 10;

/// Paint the starter city and return how many edit batches changed it.
pub fn paint(city: &mut City) -> Result<usize> {
    let w = city.grid.width() as i32;
    let h = city.grid.height() as i32;
    let mut applied = 0;

    let mut edit = |city: &mut City, tool: &str, start: Cell, end: Cell| -> Result<()> {
        if city.edit(tool, start, end)? {
            applied += 1;
        }
        Ok(())
    };

    for i in (MAJOR_SPACING / 2..w.max(h)).step_by(MAJOR_SPACING as usize) {
        if i < h {
            edit(city, "road_major", Cell::new(0, i), Cell::new(w - 1, i))?;
        }
        if i < w {
            edit(city, "road_major", Cell::new(i, 0), Cell::new(i, h - 1))?;
        }
        let minor = i + MAJOR_SPACING / 2;
        if minor < h {
            edit(city, "road_minor", Cell::new(0, minor), Cell::new(w - 1, minor))?;
        }
    }

    // One amenity cluster per major intersection quadrant near the centre.
    let (cx, cz) = (w / 2, h / 2);
    edit(city, "park:2:2", Cell::new(cx - 3, cz - 3), Cell::new(cx - 2, cz - 2))?;
    edit(city, "school", Cell::new(cx + 2, cz - 3), Cell::new(cx + 2, cz - 3))?;
    edit(city, "park", Cell::new(cx - 3, cz + 2), Cell::new(cx - 3, cz + 3))?;
    edit(city, "school", Cell::new(cx + 2, cz + 2), Cell::new(cx + 2, cz + 2))?;
    edit(city, "hospital", Cell::new(2, 2), Cell::new(2, 2))?;
    edit(city, "fire_station", Cell::new(w - 3, h - 3), Cell::new(w - 3, h - 3))?;

    Ok(applied)
}
