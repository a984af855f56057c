// src/integrations/portal/mod.rs

pub mod client;
pub mod gateway;

pub use client::{PortalClient, PortalConfig};
pub use gateway::{PortalGateway, RegisterRequest, TokenResponse};

#[cfg(test)]
pub use gateway::MockPortalGateway;
