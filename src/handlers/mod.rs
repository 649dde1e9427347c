pub mod charts;
pub mod combined;
pub mod seed;
pub mod statistics;
