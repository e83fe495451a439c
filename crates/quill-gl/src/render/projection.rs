use crate::coords::Vec2;

/// Orthographic projection mapping the display rectangle to clip space.
///
/// `display_pos` maps to (-1, 1) and `display_pos + display_size` to
/// (1, -1), so display-space Y grows downward. Column-major, ready for
/// `uniform_matrix_4_f32`.
pub fn ortho_projection(display_pos: Vec2, display_size: Vec2) -> [f32; 16] {
    let l = display_pos.x;
    let r = display_pos.x + display_size.x;
    let t = display_pos.y;
    let b = display_pos.y + display_size.y;

    let columns: [[f32; 4]; 4] = [
        [2.0 / (r - l), 0.0, 0.0, 0.0],
        [0.0, 2.0 / (t - b), 0.0, 0.0],
        [0.0, 0.0, -1.0, 0.0],
        [(r + l) / (l - r), (t + b) / (b - t), 0.0, 1.0],
    ];
    bytemuck::cast(columns)
}
