use thiserror::Error;

/// Failures while turning the 2D outline into a mesh.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("outline needs at least 3 distinct points, got {0}")]
    DegenerateOutline(usize),
    #[error("ear clipping stalled with {remaining} vertices left")]
    Triangulation { remaining: usize },
    #[error("extrusion produced no triangles")]
    EmptyMesh,
}

#[derive(Debug, Error, PartialEq)]
pub enum SceneError {
    #[error("scene is already initialized")]
    AlreadyInitialized,
    #[error("environment image {width}x{height} expects {expected} bytes, got {actual}")]
    EnvironmentSize {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
    #[error("heart geometry: {0}")]
    Geometry(#[from] GeometryError),
}
