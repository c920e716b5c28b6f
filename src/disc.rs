pub mod basis;
pub mod geometric;
pub mod level_set;
pub mod mesh;
pub mod power;
pub mod reference_nodes;
