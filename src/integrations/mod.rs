// src/integrations/mod.rs

pub mod portal;

pub use portal::{PortalClient, PortalConfig, PortalGateway, RegisterRequest, TokenResponse};
