//! Visual regions that actions mutate.
//!
//! The region model belongs to the host engine. Actions only need a stable
//! name, a settable image source, mutable geometry and a debug rendering,
//! which is what the [`Region`] trait asks for.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt::Debug;
use std::rc::Rc;

/// Position and size of a region.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Geometry {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// A named, mutable visual region.
///
/// # Example
///
/// ```rust
/// use stagehand::core::{BasicRegion, Geometry, Region};
///
/// let mut hand = BasicRegion::new("hand", Geometry::new(15.0, 190.0, 20.0, 20.0));
/// hand.geometry_mut().y -= 10.0;
///
/// assert_eq!(hand.name(), "hand");
/// assert_eq!(hand.geometry().y, 180.0);
/// ```
pub trait Region: Debug {
    /// Stable name actions refer to.
    fn name(&self) -> &str;

    /// Current image source; `""` means no image.
    fn image_loc(&self) -> &str;

    fn set_image_loc(&mut self, loc: &str);

    fn geometry(&self) -> Geometry;

    fn geometry_mut(&mut self) -> &mut Geometry;

    /// One-line rendering for diagnostics.
    fn debug_string(&self) -> String;
}

/// Shared handle to a live region.
///
/// The registry owns these; actions keep only weak references derived from
/// them.
pub type RegionHandle<R> = Rc<RefCell<R>>;

/// Plain region with a name, an image and a geometry.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BasicRegion {
    pub name: String,
    #[serde(default)]
    pub image_loc: String,
    #[serde(default)]
    pub geometry: Geometry,
}

impl BasicRegion {
    pub fn new(name: impl Into<String>, geometry: Geometry) -> Self {
        Self {
            name: name.into(),
            image_loc: String::new(),
            geometry,
        }
    }

    pub fn with_image(mut self, loc: impl Into<String>) -> Self {
        self.image_loc = loc.into();
        self
    }
}

impl Region for BasicRegion {
    fn name(&self) -> &str {
        &self.name
    }

    fn image_loc(&self) -> &str {
        &self.image_loc
    }

    fn set_image_loc(&mut self, loc: &str) {
        self.image_loc.clear();
        self.image_loc.push_str(loc);
    }

    fn geometry(&self) -> Geometry {
        self.geometry
    }

    fn geometry_mut(&mut self) -> &mut Geometry {
        &mut self.geometry
    }

    fn debug_string(&self) -> String {
        let g = self.geometry;
        format!(
            "Region {} @({}, {}) {}x{} image \"{}\"",
            self.name, g.x, g.y, g.width, g.height, self.image_loc
        )
    }
}

/// Ordered collection of live regions.
///
/// Iteration order is insertion order; binding relies on it for
/// first-match-wins resolution.
#[derive(Debug)]
pub struct RegionRegistry<R: Region> {
    regions: Vec<RegionHandle<R>>,
}

impl<R: Region> Default for RegionRegistry<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Region> RegionRegistry<R> {
    pub fn new() -> Self {
        Self {
            regions: Vec::new(),
        }
    }

    /// Add a region, returning its shared handle.
    pub fn insert(&mut self, region: R) -> RegionHandle<R> {
        let handle = Rc::new(RefCell::new(region));
        self.regions.push(Rc::clone(&handle));
        handle
    }

    /// First region with the given name.
    pub fn find(&self, name: &str) -> Option<&RegionHandle<R>> {
        self.regions.iter().find(|r| r.borrow().name() == name)
    }

    pub fn handles(&self) -> &[RegionHandle<R>] {
        &self.regions
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
