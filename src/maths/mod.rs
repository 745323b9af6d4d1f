pub mod seriescos;
