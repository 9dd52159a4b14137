//! Minimal surface grid example: assign points, read them back by position
//! and walk the grid in both parametric directions.

use std::error::Error;

use ctrlgrid::{CpManager, extract_2d, topology::make_zigzag};

fn main() -> Result<(), Box<dyn Error>> {
    // snips-start: example
    // 3x2 surface grid with a scalar weight per point
    let mut cm = CpManager::builder(&[3, 2]).attribute("weight", 1).build()?;
    let pts: Vec<[f64; 3]> = (0..cm.count())
        .map(|i| [(i % 3) as f64, (i / 3) as f64, 0.0])
        .collect();
    cm.set_points(&pts)?;
    println!("{cm}: {} points of dimension {:?}", cm.count(), cm.dimension());

    cm.set_ptdata([("weight", 0.5)], &[2, 1])?;
    println!("Point at (2, 1): {:?}", cm.pt(&[2, 1])?);
    println!("Weight at (2, 1): {:?}", cm.ptdata("weight", &[2, 1]));

    extract_2d(&mut cm)?;
    println!("Along u: {:?}", cm.points_u());
    println!("Along v: {:?}", cm.points_v());

    let path = make_zigzag(&cm.points(), 3)?;
    println!("Zig-zag: {path:?}");
    // snips-end: example

    Ok(())
}
