//! Ports module for the Community Directory

pub mod inbound;
pub mod outbound;

pub use inbound::CommunityDirectoryApi;
pub use outbound::DirectoryRepository;
