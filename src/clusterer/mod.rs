mod dbscan;
mod neighbours;
mod params;

#[cfg(test)]
mod tests;

pub use dbscan::cluster;
pub use neighbours::find_neighbours;
pub use params::ClusterParams;
