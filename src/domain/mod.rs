//! Game objects placed on the tile grid and the scene bundles that
//! describe them.

pub mod object;
pub mod scene;
