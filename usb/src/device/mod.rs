pub mod base;

// libusb is the only backend, the traits in base exist so the probe sequence can be driven
// without real hardware attached.
mod libusb;
