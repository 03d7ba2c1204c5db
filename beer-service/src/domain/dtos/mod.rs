pub mod beer_dto;
