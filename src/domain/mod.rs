// Domain layer: schema descriptors and the ports (traits) the marshaller works through.

pub mod ports;
pub mod schema;
