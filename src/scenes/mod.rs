mod cube;
mod stairs;
mod triangle;

pub use cube::{generate_cube, CONNECTOR_COUNT, CONNECTOR_FLIP, CUBE_ELEMENT_COUNT, EDGES_PER_FRAME};
pub use stairs::{generate_stairs, Side};
pub use triangle::generate_triangle;
