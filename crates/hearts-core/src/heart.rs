use crate::constants::*;
use crate::error::GeometryError;
use crate::extrude::{extrude, ExtrudeSettings, MeshData};
use crate::shape::heart_outline;

pub fn heart_extrude_settings() -> ExtrudeSettings {
    ExtrudeSettings {
        depth: HEART_DEPTH,
        steps: HEART_STEPS,
        bevel_enabled: true,
        bevel_thickness: HEART_BEVEL_THICKNESS,
        bevel_size: HEART_BEVEL_SIZE,
        bevel_offset: 0.0,
        bevel_segments: HEART_BEVEL_SEGMENTS,
    }
}

/// Build the shared heart mesh: sampled outline, beveled extrusion, centered
/// on its bounding box and scaled down uniformly. Deterministic.
pub fn build_heart_geometry() -> Result<MeshData, GeometryError> {
    let contour = heart_outline().clockwise_contour(HEART_CURVE_SEGMENTS)?;
    let mut mesh = extrude(&contour, &heart_extrude_settings())?;
    mesh.center().scale(HEART_SCALE);
    log::debug!(
        "[heart] contour={} triangles={}",
        contour.len(),
        mesh.triangle_count()
    );
    Ok(mesh)
}
