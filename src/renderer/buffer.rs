//! Per-topology vertex accumulation and the lazily created GL buffers.

use web_sys::{WebGl2RenderingContext, WebGlBuffer};

use crate::color::RGBColor;
use crate::error::RenderError;
use crate::render_mode::{RenderMode, RENDER_MODES};
use crate::shape::{Point3d, Shape, FLOATS_PER_DYNAMIC_VERTEX, FLOATS_PER_POINT_VERTEX};

/// Growable vertex storage for one topology
#[derive(Clone, Debug)]
pub struct VertexBucket {
    render_mode: RenderMode,
    vertices: Vec<f32>,
}

impl VertexBucket {
    fn new(render_mode: RenderMode) -> VertexBucket {
        VertexBucket {
            render_mode,
            vertices: Vec::new(),
        }
    }

    pub fn render_mode(&self) -> RenderMode {
        self.render_mode
    }

    /// Floats per vertex in this bucket: 7 for points, 6 for everything else
    pub fn vertex_stride(&self) -> usize {
        match self.render_mode {
            RenderMode::Points => FLOATS_PER_POINT_VERTEX,
            _ => FLOATS_PER_DYNAMIC_VERTEX,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / self.vertex_stride()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertices(&self) -> &[f32] {
        &self.vertices
    }
}

/// One bucket per topology. Shapes and ad-hoc vertices all accumulate here;
/// no GL handles are involved until the buckets are drawn.
#[derive(Clone, Debug)]
pub struct SceneBuckets {
    buckets: [VertexBucket; RENDER_MODES.len()],
}

impl SceneBuckets {
    pub fn new() -> SceneBuckets {
        SceneBuckets {
            buckets: std::array::from_fn(|i| VertexBucket::new(RENDER_MODES[i])),
        }
    }

    pub fn add_shape(&mut self, shape: &Shape) {
        self.bucket_mut(shape.render_mode())
            .vertices
            .extend_from_slice(shape.vertices());
    }

    pub fn add_point(&mut self, point: &Point3d) {
        self.bucket_mut(RenderMode::Points)
            .vertices
            .extend_from_slice(point.vertices());
    }

    /// Appends a single colored vertex to the bucket for `render_mode`. The
    /// point size only lands in the data when that bucket is the points one.
    pub fn add_vertex(
        &mut self,
        render_mode: RenderMode,
        x: f32,
        y: f32,
        z: f32,
        color: RGBColor,
        point_size: f32,
    ) {
        let bucket = self.bucket_mut(render_mode);
        bucket
            .vertices
            .extend_from_slice(&[x, y, z, color.red, color.green, color.blue]);
        if render_mode == RenderMode::Points {
            bucket.vertices.push(point_size);
        }
    }

    /// Bulk append of `[x, y, z, r, g, b]` vertices. Point-bucket vertices
    /// get `point_size` appended to each one.
    pub fn add_packed_vertices(
        &mut self,
        render_mode: RenderMode,
        floats: &[f32],
        point_size: f32,
    ) -> Result<(), RenderError> {
        if floats.len() % FLOATS_PER_DYNAMIC_VERTEX != 0 {
            return Err(RenderError::MalformedVertexData {
                length: floats.len(),
                stride: FLOATS_PER_DYNAMIC_VERTEX,
            });
        }

        let bucket = self.bucket_mut(render_mode);
        if render_mode == RenderMode::Points {
            for vertex in floats.chunks(FLOATS_PER_DYNAMIC_VERTEX) {
                bucket.vertices.extend_from_slice(vertex);
                bucket.vertices.push(point_size);
            }
        } else {
            bucket.vertices.extend_from_slice(floats);
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.vertices.clear();
        }
    }

    pub fn bucket(&self, render_mode: RenderMode) -> &VertexBucket {
        &self.buckets[render_mode as usize]
    }

    fn bucket_mut(&mut self, render_mode: RenderMode) -> &mut VertexBucket {
        &mut self.buckets[render_mode as usize]
    }

    /// The non-empty buckets, one draw call each
    pub fn batches(&self) -> impl Iterator<Item = &VertexBucket> {
        self.buckets.iter().filter(|bucket| !bucket.is_empty())
    }
}

impl Default for SceneBuckets {
    fn default() -> SceneBuckets {
        SceneBuckets::new()
    }
}

/// GL buffer per topology, created on first use and reused across frames
pub struct GlBuffers {
    buffers: [Option<WebGlBuffer>; RENDER_MODES.len()],
}

impl GlBuffers {
    pub fn new() -> GlBuffers {
        GlBuffers {
            buffers: Default::default(),
        }
    }

    pub fn get_or_create(
        &mut self,
        gl: &WebGl2RenderingContext,
        render_mode: RenderMode,
    ) -> Result<&WebGlBuffer, RenderError> {
        let slot = &mut self.buffers[render_mode as usize];
        match slot {
            Some(buffer) => Ok(buffer),
            None => {
                let buffer = gl
                    .create_buffer()
                    .ok_or(RenderError::ResourceAllocationFailed("vertex buffer"))?;
                Ok(slot.insert(buffer))
            }
        }
    }
}

impl Default for GlBuffers {
    fn default() -> GlBuffers {
        GlBuffers::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point2d;
    use crate::shape::{ShapeFactory3d, ShapeMode};

    fn white() -> RGBColor {
        RGBColor::new(1.0, 1.0, 1.0)
    }

    #[test]
    fn test_new_scene_has_no_batches() {
        let buckets = SceneBuckets::new();
        assert_eq!(buckets.batches().count(), 0);
    }

    #[test]
    fn test_shapes_land_in_the_bucket_for_their_topology() {
        let factory = ShapeFactory3d::new();
        let mut buckets = SceneBuckets::new();

        let point1 = Point2d::new(0.0, 0.0);
        let point2 = Point2d::new(1.0, 1.0);
        for mode in [ShapeMode::Triangles, ShapeMode::Rectangles, ShapeMode::Box] {
            match factory.create_shape(point1, point2, mode, white()) {
                Ok(shape) => buckets.add_shape(&shape),
                Err(e) => panic!("Expected {} to build, got {}", mode.name(), e),
            }
        }
        let mut line = factory.create_line(point1, white());
        line.add_vertex(point2);
        buckets.add_shape(&Shape::Line(line));

        // Triangle + rectangle + box share one bucket, the line has its own
        assert_eq!(buckets.batches().count(), 2);
        assert_eq!(buckets.bucket(RenderMode::Triangles).vertex_count(), 45);
        assert_eq!(buckets.bucket(RenderMode::LineStrip).vertex_count(), 2);
    }

    #[test]
    fn test_a_point_vertex_is_seven_floats() {
        let factory = ShapeFactory3d::new();
        let mut buckets = SceneBuckets::new();
        buckets.add_point(&factory.create_point(1.0, 2.0, 3.0, None, None));

        let bucket = buckets.bucket(RenderMode::Points);
        assert_eq!(bucket.vertex_stride(), FLOATS_PER_POINT_VERTEX);
        assert_eq!(bucket.vertex_count(), 1);
        assert_eq!(bucket.vertices(), &[1.0, 2.0, 3.0, 0.0, 0.0, 0.0, 10.0]);
    }

    #[test]
    fn test_repeated_picks_grow_a_single_points_batch() {
        let mut buckets = SceneBuckets::new();
        for (x, y) in [(10.0, 20.0), (30.0, 40.0), (50.0, 60.0)] {
            buckets.add_vertex(RenderMode::Points, x, y, 0.0, white(), 10.0);
        }

        let batches: Vec<_> = buckets.batches().collect();
        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0].render_mode(), RenderMode::Points);
        assert_eq!(batches[0].vertex_count(), 3);
    }

    #[test]
    fn test_ad_hoc_vertices_respect_the_bucket_stride() {
        let mut buckets = SceneBuckets::new();
        buckets.add_vertex(RenderMode::Points, 1.0, 2.0, 0.0, white(), 10.0);
        buckets.add_vertex(RenderMode::Triangles, 1.0, 2.0, 0.0, white(), 10.0);

        assert_eq!(buckets.bucket(RenderMode::Points).vertices().len(), 7);
        assert_eq!(buckets.bucket(RenderMode::Triangles).vertices().len(), 6);
        assert_eq!(buckets.bucket(RenderMode::Points).vertex_count(), 1);
        assert_eq!(buckets.bucket(RenderMode::Triangles).vertex_count(), 1);
    }

    #[test]
    fn test_packed_vertices_append_in_bulk() {
        let mut buckets = SceneBuckets::new();
        let floats = [
            0.0, 0.0, 0.0, 1.0, 0.0, 0.0, //
            1.0, 1.0, 0.0, 1.0, 0.0, 0.0,
        ];
        match buckets.add_packed_vertices(RenderMode::Lines, &floats, 10.0) {
            Ok(()) => {}
            Err(e) => panic!("Expected the packed vertices to append, got {}", e),
        }
        assert_eq!(buckets.bucket(RenderMode::Lines).vertex_count(), 2);
        assert_eq!(buckets.bucket(RenderMode::Lines).vertices(), &floats);
    }

    #[test]
    fn test_packed_vertices_into_the_points_bucket_gain_a_size() {
        let mut buckets = SceneBuckets::new();
        let floats = [3.0, 4.0, 0.0, 0.0, 1.0, 0.0];
        match buckets.add_packed_vertices(RenderMode::Points, &floats, 12.0) {
            Ok(()) => {}
            Err(e) => panic!("Expected the packed vertices to append, got {}", e),
        }
        assert_eq!(
            buckets.bucket(RenderMode::Points).vertices(),
            &[3.0, 4.0, 0.0, 0.0, 1.0, 0.0, 12.0]
        );
    }

    #[test]
    fn test_packed_vertices_reject_partial_vertices() {
        let mut buckets = SceneBuckets::new();
        match buckets.add_packed_vertices(RenderMode::Lines, &[1.0, 2.0, 3.0, 4.0], 10.0) {
            Err(e) => assert_eq!(
                e.to_string(),
                "vertex data of length 4 is not a multiple of the vertex stride 6"
            ),
            Ok(()) => panic!("Expected the partial vertex to be rejected"),
        }
        assert_eq!(buckets.batches().count(), 0);
    }

    #[test]
    fn test_clear_empties_every_bucket() {
        let factory = ShapeFactory3d::new();
        let mut buckets = SceneBuckets::new();
        buckets.add_point(&factory.create_point(0.0, 0.0, 0.0, None, None));
        buckets.add_vertex(RenderMode::Triangles, 1.0, 1.0, 0.0, white(), 10.0);
        assert_eq!(buckets.batches().count(), 2);

        buckets.clear();
        assert_eq!(buckets.batches().count(), 0);
        assert!(buckets.bucket(RenderMode::Points).is_empty());
        assert!(buckets.bucket(RenderMode::Triangles).is_empty());
    }
}
