//! The control point manager.
//!
//! [`CpManager`] stores the control points of a curve, surface or volume in a
//! flat array and lets callers address them by parametric position. The
//! position-to-offset translation and the storage operations are strategies
//! chosen through [`ManagerBuilder`].

use std::{fmt, ops::Index, slice};

use smallvec::SmallVec;

use crate::{
    axes::AxisCache,
    error::{Error, Result},
    index::{IndexMapper, MixedRadix},
    point::Point,
    shape::Shape,
    storage::{Attributes, DataArray, DataStore, DataValue, DefaultStorage, StorageBackend},
};

/// Name given to managers built without an explicit one.
const DEFAULT_NAME: &str = "CpManager";

/// Configuration for a [`CpManager`].
pub struct ManagerBuilder {
    /// Requested sizes, validated in `build`.
    sizes: SmallVec<[usize; 4]>,
    /// Declared per-point attributes.
    attributes: Attributes,
    /// Position-to-offset strategy.
    mapper: Box<dyn IndexMapper>,
    /// Allocation and assignment strategy.
    storage: Box<dyn StorageBackend>,
    /// Object identifier.
    id: u32,
    /// Object name.
    name: String,
}

impl ManagerBuilder {
    /// Attach a per-point attribute holding `arity` values (scalars for 0 or 1).
    pub fn attribute(mut self, name: impl Into<String>, arity: usize) -> Self {
        self.attributes.insert(name.into(), arity);
        self
    }

    /// Replace the default [`MixedRadix`] index mapper.
    pub fn mapper(mut self, mapper: impl IndexMapper + 'static) -> Self {
        self.mapper = Box::new(mapper);
        self
    }

    /// Replace the default [`DefaultStorage`] backend.
    pub fn storage(mut self, storage: impl StorageBackend + 'static) -> Self {
        self.storage = Box::new(storage);
        self
    }

    /// Set the object identifier.
    pub fn id(mut self, id: u32) -> Self {
        self.id = id;
        self
    }

    /// Set the object name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Validate the shape and allocate storage.
    pub fn build(self) -> Result<CpManager> {
        let shape = Shape::new(&self.sizes)?;
        let count = shape.count();
        let (points, data) = self.storage.init(count, &self.attributes);
        check_store_lengths(count, &points, &data)?;
        log::debug!(
            "{}: allocated {count} control points for sizes {:?} with {} attribute(s)",
            self.name,
            shape.sizes(),
            data.len()
        );

        Ok(CpManager {
            id: self.id,
            name: self.name,
            shape,
            attributes: self.attributes,
            dimension: None,
            points,
            data,
            is_changed: false,
            axes: AxisCache::default(),
            mapper: self.mapper,
            storage: self.storage,
        })
    }
}

/// Make sure a backend allocated exactly `count` entries everywhere.
fn check_store_lengths(count: usize, points: &[Point], data: &DataStore) -> Result<()> {
    if points.len() != count {
        return Err(Error::Count {
            expected: count,
            got: points.len(),
        });
    }
    if let Some(array) = data.values().find(|a| a.len() != count) {
        return Err(Error::Count {
            expected: count,
            got: array.len(),
        });
    }
    Ok(())
}

/// Control point container addressed by parametric position.
///
/// The spatial dimension is taken from the first point assigned and fixed
/// from then on. [`is_changed`](Self::is_changed) reports whether any point
/// or attached datum was written since construction or the last
/// [`reset_changed`](Self::reset_changed).
///
/// The axis lists filled by [`extract_2d`](crate::extract_2d) and
/// [`extract_3d`](crate::extract_3d) are not refreshed when points change;
/// call [`clear_axis_cache`](Self::clear_axis_cache) before extracting again.
pub struct CpManager {
    /// Object identifier.
    id: u32,
    /// Object name.
    name: String,
    /// Sizes and point count.
    shape: Shape,
    /// Attributes declared at construction, reused by `reset`.
    attributes: Attributes,
    /// Spatial dimension, once known.
    dimension: Option<usize>,
    /// Point storage, `shape.count()` long.
    points: Vec<Point>,
    /// Attached data, one array per attribute.
    data: DataStore,
    /// Set by every mutation.
    is_changed: bool,
    /// Memoised per-axis point lists.
    axes: AxisCache,
    /// Position-to-offset strategy.
    mapper: Box<dyn IndexMapper>,
    /// Allocation and assignment strategy.
    storage: Box<dyn StorageBackend>,
}

impl CpManager {
    /// Manager with default mapper and storage and no attached data.
    pub fn new(sizes: &[usize]) -> Result<Self> {
        Self::builder(sizes).build()
    }

    /// Start configuring a manager with the given parametric sizes.
    pub fn builder(sizes: &[usize]) -> ManagerBuilder {
        ManagerBuilder {
            sizes: SmallVec::from_slice(sizes),
            attributes: Attributes::new(),
            mapper: Box::new(MixedRadix),
            storage: Box::new(DefaultStorage),
            id: 0,
            name: DEFAULT_NAME.to_string(),
        }
    }

    /// Object identifier.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Object name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Grid shape.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Number of points along every parametric axis.
    pub fn size(&self) -> &[usize] {
        self.shape.sizes()
    }

    /// Size along u.
    pub fn size_u(&self) -> Option<usize> {
        self.shape.size_u()
    }

    /// Size along v.
    pub fn size_v(&self) -> Option<usize> {
        self.shape.size_v()
    }

    /// Size along w.
    pub fn size_w(&self) -> Option<usize> {
        self.shape.size_w()
    }

    /// Size looked up by attribute name, e.g. `"size_u"`.
    pub fn axis_size(&self, name: &str) -> Result<usize> {
        self.shape.axis_size(name)
    }

    /// Total number of points.
    pub fn count(&self) -> usize {
        self.shape.count()
    }

    /// Spatial dimension, `None` until a point has been assigned.
    pub fn dimension(&self) -> Option<usize> {
        self.dimension
    }

    /// True after any point or data write not yet acknowledged by
    /// [`reset_changed`](Self::reset_changed).
    pub fn is_changed(&self) -> bool {
        self.is_changed
    }

    /// Clear the change flag without touching the data.
    pub fn reset_changed(&mut self) {
        self.is_changed = false;
    }

    /// Number of stored points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false: a valid shape holds at least one point.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate the stored points in storage order. Reverse with `.rev()`.
    pub fn iter(&self) -> slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Copy of all points in storage order.
    pub fn points(&self) -> Vec<Point> {
        self.points.clone()
    }

    /// Attached data for every declared attribute.
    pub fn points_data(&self) -> &DataStore {
        &self.data
    }

    /// Replace all points.
    ///
    /// `points` must hold exactly [`count`](Self::count) elements. If the
    /// spatial dimension is not known yet it is taken from the first element.
    /// Validation stops at the first bad element; the elements before it
    /// remain written and the change flag is left alone.
    pub fn set_points<P: AsRef<[f64]>>(&mut self, points: &[P]) -> Result<()> {
        let count = self.count();
        if points.len() != count {
            return Err(Error::Count {
                expected: count,
                got: points.len(),
            });
        }
        let input: Vec<&[f64]> = points.iter().map(AsRef::as_ref).collect();
        let dim = match self.dimension {
            Some(dim) => dim,
            None => {
                let dim = input.first().map_or(0, |p| p.len());
                if dim == 0 {
                    return Err(Error::EmptyPoint);
                }
                self.dimension = Some(dim);
                dim
            }
        };
        self.storage.bulk_set(&input, dim, &mut self.points)?;
        self.is_changed = true;
        log::debug!("{}: assigned {count} {dim}-dimensional points", self.name);
        Ok(())
    }

    /// Point at linear offset `idx`.
    pub fn get(&self, idx: usize) -> Option<&Point> {
        self.points.get(idx)
    }

    /// Point at a parametric position.
    pub fn pt(&self, coords: &[usize]) -> Result<&Point> {
        let idx = self.resolve(coords)?;
        Ok(&self.points[idx])
    }

    /// Write the point at linear offset `idx`.
    pub fn set(&mut self, idx: usize, point: &[f64]) -> Result<()> {
        let count = self.count();
        if idx >= count {
            return Err(Error::OutOfRange { index: idx, count });
        }
        self.write(idx, point)
    }

    /// Write the point at a parametric position.
    pub fn set_pt(&mut self, point: &[f64], coords: &[usize]) -> Result<()> {
        let idx = self.resolve(coords)?;
        self.write(idx, point)
    }

    /// Attached datum `key` of the point at a parametric position.
    ///
    /// Unknown keys and positions outside the grid give `None`.
    pub fn ptdata(&self, key: &str, coords: &[usize]) -> Option<DataValue> {
        let idx = self.resolve(coords).ok()?;
        self.data.get(key)?.get(idx)
    }

    /// Attach data to the point at a parametric position.
    ///
    /// Keys are applied in iteration order. A key that was not declared, or a
    /// value that does not fit the attribute, fails the call; keys applied
    /// before it stay written. Vector values shorter than the attribute arity
    /// overwrite the leading elements only.
    pub fn set_ptdata<I, K, V>(&mut self, values: I, coords: &[usize]) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<DataValue>,
    {
        let idx = self.resolve(coords)?;
        for (key, value) in values {
            let key = key.as_ref();
            let array = self
                .data
                .get_mut(key)
                .ok_or_else(|| Error::UnknownKey(key.to_string()))?;
            write_datum(array, key, idx, value.into())?;
            self.is_changed = true;
        }
        Ok(())
    }

    /// Discard all points and attached data, keeping the shape.
    ///
    /// Cached axis lists are dropped and the spatial dimension is forgotten.
    /// The change flag is not touched. If the backend allocates containers of
    /// the wrong length the manager is left as it was.
    pub fn reset(&mut self) -> Result<()> {
        let count = self.count();
        let (points, data) = self.storage.init(count, &self.attributes);
        check_store_lengths(count, &points, &data)?;
        self.axes.clear();
        self.points = points;
        self.data = data;
        self.dimension = None;
        log::debug!("{}: reset {count} control points", self.name);
        Ok(())
    }

    /// Cached point list varying axis 0 fastest.
    pub fn points_u(&self) -> Option<&[Point]> {
        self.axes.get(0)
    }

    /// Cached point list varying axis 1 fastest.
    pub fn points_v(&self) -> Option<&[Point]> {
        self.axes.get(1)
    }

    /// Cached point list varying axis 2 fastest.
    pub fn points_w(&self) -> Option<&[Point]> {
        self.axes.get(2)
    }

    /// Drop every cached axis list so the next extraction rebuilds it.
    pub fn clear_axis_cache(&mut self) {
        self.axes.clear();
    }

    /// Mutable access to the axis cache for the extraction functions.
    pub(crate) fn axis_cache_mut(&mut self) -> &mut AxisCache {
        &mut self.axes
    }

    /// Storage offset of a parametric position, checking arity and range.
    fn resolve(&self, coords: &[usize]) -> Result<usize> {
        let expected = self.shape.pdimension();
        if coords.len() != expected {
            return Err(Error::Arity {
                expected,
                got: coords.len(),
            });
        }
        let index = self.mapper.index(self.shape.sizes(), coords);
        let count = self.count();
        if index >= count {
            return Err(Error::OutOfRange { index, count });
        }
        Ok(index)
    }

    /// Validate `point` against the spatial dimension and store it at `idx`.
    fn write(&mut self, idx: usize, point: &[f64]) -> Result<()> {
        match self.dimension {
            None if point.is_empty() => return Err(Error::EmptyPoint),
            None => self.dimension = Some(point.len()),
            Some(expected) if expected != point.len() => {
                return Err(Error::Dimension {
                    index: idx,
                    expected,
                    got: point.len(),
                });
            }
            Some(_) => {}
        }
        self.storage.single_set(&mut self.points, idx, point);
        self.is_changed = true;
        Ok(())
    }
}

/// Store `value` for point `idx` of one attribute array.
fn write_datum(array: &mut DataArray, key: &str, idx: usize, value: DataValue) -> Result<()> {
    let count = array.len();
    let expected = array.arity();
    match (array, value) {
        (DataArray::Scalar(values), DataValue::Scalar(v)) => {
            let slot = values
                .get_mut(idx)
                .ok_or(Error::OutOfRange { index: idx, count })?;
            *slot = v;
        }
        (DataArray::Vector { arity, values }, DataValue::Vector(v)) => {
            if v.len() > *arity {
                return Err(Error::DataLength {
                    key: key.to_string(),
                    expected: *arity,
                    got: v.len(),
                });
            }
            let slot = values
                .get_mut(idx)
                .ok_or(Error::OutOfRange { index: idx, count })?;
            slot[..v.len()].copy_from_slice(&v);
        }
        _ => {
            return Err(Error::DataKind {
                key: key.to_string(),
                expected,
            });
        }
    }
    Ok(())
}

impl Index<usize> for CpManager {
    type Output = Point;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.points[idx]
    }
}

impl<'a> IntoIterator for &'a CpManager {
    type Item = &'a Point;
    type IntoIter = slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for CpManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Debug for CpManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CpManager")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("size", &self.shape.sizes())
            .field("dimension", &self.dimension)
            .field("is_changed", &self.is_changed)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn construction() -> Result<()> {
        let cm = CpManager::builder(&[3, 2]).id(7).name("surface").build()?;
        assert_eq!(cm.count(), 6);
        assert_eq!(cm.len(), 6);
        assert_eq!(cm.size(), &[3, 2]);
        assert_eq!(cm.dimension(), None);
        assert!(!cm.is_changed());
        assert_eq!(cm.id(), 7);
        assert_eq!(cm.to_string(), "surface");
        assert_eq!(CpManager::new(&[4])?.name(), DEFAULT_NAME);
        assert_eq!(CpManager::new(&[2, 0]).err(), Some(Error::InvalidSize { axis: 1, size: 0 }));
        Ok(())
    }

    #[test]
    fn dimension_is_inferred_once() -> Result<()> {
        let mut cm = CpManager::new(&[3])?;
        cm.set(0, &[1.0, 2.0, 3.0])?;
        assert_eq!(cm.dimension(), Some(3));
        assert_eq!(
            cm.set(1, &[1.0, 2.0]),
            Err(Error::Dimension {
                index: 1,
                expected: 3,
                got: 2
            })
        );
        assert_eq!(
            cm.set_points(&[[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]),
            Err(Error::Dimension {
                index: 0,
                expected: 3,
                got: 2
            })
        );
        Ok(())
    }

    #[test]
    fn empty_points_are_rejected() -> Result<()> {
        let mut cm = CpManager::new(&[2])?;
        assert_eq!(cm.set(0, &[]), Err(Error::EmptyPoint));
        let empty: [&[f64]; 2] = [&[], &[]];
        assert_eq!(cm.set_points(&empty), Err(Error::EmptyPoint));
        assert_eq!(cm.dimension(), None);
        Ok(())
    }

    #[test]
    fn failed_bulk_assignment_keeps_prefix() -> Result<()> {
        let mut cm = CpManager::new(&[3])?;
        let input: [&[f64]; 3] = [&[1.0, 1.0], &[2.0, 2.0], &[3.0]];
        assert!(cm.set_points(&input).is_err());
        assert_eq!(cm[0].as_slice(), &[1.0, 1.0]);
        assert_eq!(cm[1].as_slice(), &[2.0, 2.0]);
        assert_eq!(cm[2].dimension(), 0);
        assert!(!cm.is_changed());
        Ok(())
    }

    #[test]
    fn out_of_range_positions() -> Result<()> {
        let mut cm = CpManager::new(&[2, 2])?;
        assert_eq!(cm.pt(&[1, 2]).err(), Some(Error::OutOfRange { index: 5, count: 4 }));
        assert_eq!(cm.set(4, &[0.0]), Err(Error::OutOfRange { index: 4, count: 4 }));
        assert_eq!(cm.pt(&[1]).err(), Some(Error::Arity { expected: 2, got: 1 }));
        assert_eq!(cm.get(4), None);
        Ok(())
    }

    #[test]
    fn huge_coordinates_are_out_of_range() -> Result<()> {
        let mut cm = CpManager::builder(&[2, 2]).attribute("weight", 1).build()?;
        let far = [0, usize::MAX];
        let out_of_range = Error::OutOfRange {
            index: usize::MAX,
            count: 4,
        };

        assert_eq!(cm.ptdata("weight", &far), None);
        assert_eq!(cm.pt(&far).err(), Some(out_of_range.clone()));
        assert_eq!(cm.set_pt(&[1.0, 2.0], &far), Err(out_of_range.clone()));
        assert_eq!(cm.set_ptdata([("weight", 1.0)], &far), Err(out_of_range));
        assert!(!cm.is_changed());
        Ok(())
    }

    /// Backend that allocates one slot too few on every call after the first.
    #[derive(Default)]
    struct Shrinking {
        /// Number of `init` calls so far.
        calls: Cell<usize>,
    }

    impl StorageBackend for Shrinking {
        fn init(&self, count: usize, attrs: &Attributes) -> (Vec<Point>, DataStore) {
            let calls = self.calls.get();
            self.calls.set(calls + 1);
            let count = if calls == 0 { count } else { count - 1 };
            DefaultStorage.init(count, attrs)
        }
    }

    #[test]
    fn reset_rejects_short_allocation() -> Result<()> {
        let mut cm = CpManager::builder(&[2, 2]).storage(Shrinking::default()).build()?;
        cm.set_points(&[[0.0], [1.0], [2.0], [3.0]])?;

        assert_eq!(
            cm.reset(),
            Err(Error::Count {
                expected: 4,
                got: 3
            })
        );
        assert_eq!(cm.len(), 4);
        assert_eq!(cm.dimension(), Some(1));
        assert_eq!(cm.pt(&[1, 1])?.as_slice(), &[3.0]);
        Ok(())
    }

    #[test]
    fn attached_data_kinds() -> Result<()> {
        let mut cm = CpManager::builder(&[2, 2])
            .attribute("weight", 1)
            .attribute("normal", 3)
            .build()?;

        cm.set_ptdata([("weight", DataValue::from(0.5))], &[1, 0])?;
        cm.set_ptdata([("normal", [0.0, 0.0, 1.0])], &[1, 1])?;
        assert_eq!(cm.ptdata("weight", &[1, 0]), Some(DataValue::Scalar(0.5)));
        assert_eq!(cm.ptdata("normal", &[1, 1]), Some(DataValue::from([0.0, 0.0, 1.0])));

        cm.set_ptdata([("normal", vec![9.0])], &[1, 1])?;
        assert_eq!(cm.ptdata("normal", &[1, 1]), Some(DataValue::from([9.0, 0.0, 1.0])));

        assert_eq!(
            cm.set_ptdata([("normal", 1.0)], &[0, 0]),
            Err(Error::DataKind {
                key: "normal".into(),
                expected: 3
            })
        );
        assert_eq!(
            cm.set_ptdata([("normal", [1.0, 2.0, 3.0, 4.0])], &[0, 0]),
            Err(Error::DataLength {
                key: "normal".into(),
                expected: 3,
                got: 4
            })
        );
        Ok(())
    }

    #[test]
    fn debug_output_skips_strategies() -> Result<()> {
        let cm = CpManager::new(&[2])?;
        let dbg = format!("{cm:?}");
        assert!(dbg.contains("size: [2]"));
        assert!(dbg.contains(".."));
        Ok(())
    }
}
