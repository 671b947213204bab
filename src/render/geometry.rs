//! Static vertex data, three floats (x, y, z) per vertex.

#[rustfmt::skip]
pub const TWO_TRIANGLES: [f32; 18] = [
    // first triangle
    -0.9, -0.5, 0.0, // left
    -0.1, -0.5, 0.0, // right
    -0.5,  0.5, 0.0, // top
    // second triangle
     0.1, -0.5, 0.0, // left
     0.9, -0.5, 0.0, // right
     0.5,  0.5, 0.0, // top
];

#[rustfmt::skip]
pub const FIRST_TRIANGLE: [f32; 9] = [
    -0.9,  -0.5, 0.0, // left
     0.0,  -0.5, 0.0, // right
    -0.45,  0.5, 0.0, // top
];

#[rustfmt::skip]
pub const SECOND_TRIANGLE: [f32; 9] = [
    0.0,  -0.5, 0.0, // left
    0.9,  -0.5, 0.0, // right
    0.45,  0.5, 0.0, // top
];
