//! Small vector/matrix math for the force pipeline.

use serde::{Deserialize, Serialize};

/// A 3D vector in either device or application space.
///
/// # Examples
///
/// ```
/// use openpaddle_ffb::Vec3;
///
/// let v = Vec3::new(1.0, -2.0, 0.5);
/// assert_eq!(v + Vec3::new(0.0, 2.0, 0.0), Vec3::new(1.0, 0.0, 0.5));
/// assert_eq!(v * 2.0, Vec3::new(2.0, -4.0, 1.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Create a vector from components.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean length.
    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

impl std::ops::Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl std::ops::Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl std::ops::Mul<f64> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: f64) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

/// Axis-aligned workspace extents,
/// ordered `(min_x, min_y, min_z)` to `(max_x, max_y, max_z)`.
///
/// Right-handed coordinates: x grows to the right, y grows upward,
/// z grows toward the user.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceExtents {
    /// Minimum corner (left, bottom, far)
    pub min: Vec3,
    /// Maximum corner (right, top, near)
    pub max: Vec3,
}

impl WorkspaceExtents {
    /// Build extents from a `[min_x, min_y, min_z, max_x, max_y, max_z]` array.
    pub const fn from_array(dims: [f64; 6]) -> Self {
        Self {
            min: Vec3::new(dims[0], dims[1], dims[2]),
            max: Vec3::new(dims[3], dims[4], dims[5]),
        }
    }

    /// Center point of the box.
    pub fn center(&self) -> Vec3 {
        Vec3::new(
            (self.min.x + self.max.x) * 0.5,
            (self.min.y + self.max.y) * 0.5,
            (self.min.z + self.max.z) * 0.5,
        )
    }

    /// Per-axis dimensions of the box.
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// True when every axis has strictly positive extent.
    pub fn is_valid(&self) -> bool {
        let size = self.size();
        size.x > 0.0 && size.y > 0.0 && size.z > 0.0
    }
}

/// Fixed affine transform from device space to application space.
///
/// Computed once at session start from the device's physical workspace
/// extents and the desired application workspace, then applied to every
/// position sample. The matrix is stored column-major like the fixed-function
/// graphics convention it interoperates with.
///
/// # Examples
///
/// ```
/// use openpaddle_ffb::{Vec3, WorkspaceExtents, WorkspaceTransform};
///
/// let device = WorkspaceExtents::from_array([-0.1, -0.1, -0.1, 0.1, 0.1, 0.1]);
/// let app = WorkspaceExtents::from_array([-2.0, -2.0, -2.0, 2.0, 2.0, 2.0]);
/// let transform = WorkspaceTransform::fit_uniform(&device, &app);
///
/// // Device center maps to app center
/// assert_eq!(transform.apply(Vec3::ZERO), Vec3::ZERO);
/// // Device max corner maps to app max corner
/// let mapped = transform.apply(Vec3::new(0.1, 0.1, 0.1));
/// assert!((mapped.x - 2.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceTransform {
    m: [f64; 16],
}

impl WorkspaceTransform {
    /// The identity transform.
    pub fn identity() -> Self {
        let mut m = [0.0; 16];
        m[0] = 1.0;
        m[5] = 1.0;
        m[10] = 1.0;
        m[15] = 1.0;
        Self { m }
    }

    /// Fit the device workspace into the application workspace with a
    /// uniform scale.
    ///
    /// The scale is the smallest of the three per-axis ratios, so the whole
    /// device workspace stays reachable inside the application workspace and
    /// aspect is preserved. Workspace centers map onto each other.
    pub fn fit_uniform(device: &WorkspaceExtents, app: &WorkspaceExtents) -> Self {
        let device_size = device.size();
        let app_size = app.size();

        let sx = app_size.x / device_size.x;
        let sy = app_size.y / device_size.y;
        let sz = app_size.z / device_size.z;
        let scale = sx.min(sy).min(sz);

        Self::from_scale_and_centers(Vec3::new(scale, scale, scale), device, app)
    }

    /// Fit with independent per-axis scales (fills the application workspace
    /// exactly, distorting aspect).
    pub fn fit_per_axis(device: &WorkspaceExtents, app: &WorkspaceExtents) -> Self {
        let device_size = device.size();
        let app_size = app.size();
        let scale = Vec3::new(
            app_size.x / device_size.x,
            app_size.y / device_size.y,
            app_size.z / device_size.z,
        );
        Self::from_scale_and_centers(scale, device, app)
    }

    fn from_scale_and_centers(
        scale: Vec3,
        device: &WorkspaceExtents,
        app: &WorkspaceExtents,
    ) -> Self {
        let device_center = device.center();
        let app_center = app.center();

        let mut m = [0.0; 16];
        m[0] = scale.x;
        m[5] = scale.y;
        m[10] = scale.z;
        m[12] = app_center.x - scale.x * device_center.x;
        m[13] = app_center.y - scale.y * device_center.y;
        m[14] = app_center.z - scale.z * device_center.z;
        m[15] = 1.0;
        Self { m }
    }

    /// Apply the affine transform to a position.
    pub fn apply(&self, v: Vec3) -> Vec3 {
        let m = &self.m;
        Vec3::new(
            m[0] * v.x + m[4] * v.y + m[8] * v.z + m[12],
            m[1] * v.x + m[5] * v.y + m[9] * v.z + m[13],
            m[2] * v.x + m[6] * v.y + m[10] * v.z + m[14],
        )
    }

    /// The raw column-major matrix.
    pub fn as_array(&self) -> &[f64; 16] {
        &self.m
    }
}
