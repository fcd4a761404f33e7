// Plain structs describing *where* a tablet lives on the USB topology. Nothing in here talks to
// the bus, the prober is responsible for turning a location into an open device.
use std::fmt;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct TabletDevice {
    pub bus_number: u8,
    pub address: u8,
}

impl TabletDevice {
    pub fn new(bus_number: u8, address: u8) -> Self {
        Self {
            bus_number,
            address,
        }
    }
}

impl fmt::Display for TabletDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bus {:03}, address {:03}", self.bus_number, self.address)
    }
}
