pub mod beer_service;
