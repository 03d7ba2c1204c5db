pub mod beers;
pub mod extract;
