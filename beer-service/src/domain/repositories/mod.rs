pub mod beer_repository;
pub mod memory_beer_repository;
pub mod mysql_beer_repository;

pub use beer_repository::{BeerRepository, RepositoryError};
pub use memory_beer_repository::InMemoryBeerRepository;
pub use mysql_beer_repository::MySqlBeerRepository;
