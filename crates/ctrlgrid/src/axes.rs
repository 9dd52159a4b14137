//! Per-direction point lists derived from a manager.
//!
//! Surface and volume algorithms often walk the control points along one
//! parametric direction at a time. The lists are built on first request and
//! memoised on the manager. They are not rebuilt when points change; clear
//! them with [`CpManager::clear_axis_cache`] (or [`CpManager::reset`]) first.

use std::iter;

use smallvec::{SmallVec, smallvec};

use crate::{
    error::{Error, Result},
    manager::CpManager,
    point::Point,
};

/// Number of directions that have a cache slot: u, v and w.
const CACHED_AXES: usize = 3;

/// Memoised `points_u`, `points_v` and `points_w` lists.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AxisCache {
    /// One optional list per cached axis.
    points: [Option<Vec<Point>>; CACHED_AXES],
}

impl AxisCache {
    /// Cached list for `axis`, if present.
    pub fn get(&self, axis: usize) -> Option<&[Point]> {
        self.points.get(axis)?.as_deref()
    }

    /// Store the list for `axis`. Axes past w are not cached.
    pub fn set(&mut self, axis: usize, points: Vec<Point>) {
        if let Some(slot) = self.points.get_mut(axis) {
            *slot = Some(points);
        }
    }

    /// Drop every cached list.
    pub fn clear(&mut self) {
        self.points = Default::default();
    }
}

/// Fill `points_u` and `points_v` of a two-directional manager.
pub fn extract_2d(cm: &mut CpManager) -> Result<()> {
    extract(cm, 2)
}

/// Fill `points_u`, `points_v` and `points_w` of a three-directional manager.
pub fn extract_3d(cm: &mut CpManager) -> Result<()> {
    extract(cm, 3)
}

/// Fill every missing cache slot of a manager with `pdimension` directions.
fn extract(cm: &mut CpManager, pdimension: usize) -> Result<()> {
    let got = cm.shape().pdimension();
    if got != pdimension {
        return Err(Error::Arity {
            expected: pdimension,
            got,
        });
    }
    for axis in 0..pdimension {
        if cm.axis_cache_mut().get(axis).is_some() {
            log::trace!("{cm}: axis {axis} list already cached");
            continue;
        }
        let points = axis_points(cm, axis)?;
        log::debug!("{cm}: cached {} points along axis {axis}", points.len());
        cm.axis_cache_mut().set(axis, points);
    }
    Ok(())
}

/// All points of `cm` ordered with `axis` varying fastest.
///
/// The remaining axes follow in ascending order, so for a volume the w list
/// walks w, then u, then v. Positions are resolved through the manager's
/// index mapper.
pub fn axis_points(cm: &CpManager, axis: usize) -> Result<Vec<Point>> {
    let size = cm.size();
    if axis >= size.len() {
        return Err(Error::Arity {
            expected: axis + 1,
            got: size.len(),
        });
    }
    let order: SmallVec<[usize; 4]> = iter::once(axis)
        .chain((0..size.len()).filter(|&a| a != axis))
        .collect();

    let mut coords: SmallVec<[usize; 4]> = smallvec![0; size.len()];
    let mut out = Vec::with_capacity(cm.count());
    for _ in 0..cm.count() {
        out.push(cm.pt(&coords)?.clone());
        for &a in &order {
            coords[a] += 1;
            if coords[a] < size[a] {
                break;
            }
            coords[a] = 0;
        }
    }
    Ok(out)
}
