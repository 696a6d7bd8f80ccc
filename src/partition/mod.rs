mod grid;


pub use grid::{CELL_STRIDE, CellIndex, ClusteredPartition, Grid, Partition, id_offset};
