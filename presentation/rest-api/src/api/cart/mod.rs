pub mod dto;
pub mod outcome_mapper;
pub mod routes;
