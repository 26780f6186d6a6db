// Domain layer: the service and the ports it depends on. No concrete clients here.

pub mod ports;
pub mod service;
