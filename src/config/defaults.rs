//! Default value functions for serde deserialization.

pub fn cell_size() -> f32 {
    32.0
}

pub fn enabled() -> bool {
    true
}

pub fn character_radius() -> f32 {
    0.0
}

pub fn diagonal_cost() -> f32 {
    std::f32::consts::SQRT_2
}

pub fn orthogonal_cost() -> f32 {
    1.0
}

pub fn max_search_nodes() -> usize {
    100_000
}
