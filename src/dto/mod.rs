pub mod message_dto;
