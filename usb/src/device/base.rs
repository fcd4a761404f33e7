use std::ops::{Deref, DerefMut};
use std::time::Duration;

use log::{debug, warn};

// These traits are the slice of a USB stack the prober actually needs. Each of the three
// resources (context, device list, device handle) releases itself when dropped, so an
// implementation must do its teardown in Drop rather than in an explicit close call.

/// A live USB subsystem context, torn down on drop.
pub trait UsbStack {
    type Device: Located;
    type List: DeviceList<Device = Self::Device>;
    type Handle: TabletHandle;

    fn device_list(&self) -> Result<Self::List, rusb::Error>;
    fn open(&self, device: &Self::Device) -> Result<Self::Handle, rusb::Error>;
}

/// A snapshot of attached devices, freed on drop.
pub trait DeviceList {
    type Device: Located;

    fn devices(&self) -> Vec<Self::Device>;
}

pub trait Located {
    fn bus_number(&self) -> u8;
    fn address(&self) -> u8;
}

/// An open device, closed on drop.
pub trait TabletHandle {
    fn set_auto_detach_kernel_driver(&mut self, auto_detach: bool) -> Result<(), rusb::Error>;
    fn claim_interface(&mut self, interface: u8) -> Result<(), rusb::Error>;
    fn release_interface(&mut self, interface: u8) -> Result<(), rusb::Error>;
    fn detach_kernel_driver(&mut self, interface: u8) -> Result<(), rusb::Error>;

    fn write_control(
        &mut self,
        request_type: u8,
        request: u8,
        value: u16,
        index: u16,
        data: &[u8],
        timeout: Duration,
    ) -> Result<usize, rusb::Error>;
}

/// An interface we hold a claim on. The claim is released when this goes out of scope, which
/// always happens before the handle it borrows is closed.
pub struct ClaimedInterface<'a, H: TabletHandle> {
    handle: &'a mut H,
    interface: u8,
}

impl<'a, H: TabletHandle> ClaimedInterface<'a, H> {
    pub fn claim(handle: &'a mut H, interface: u8) -> Result<Self, rusb::Error> {
        handle.claim_interface(interface)?;
        debug!("Claimed interface {}", interface);
        Ok(Self { handle, interface })
    }

    pub fn interface(&self) -> u8 {
        self.interface
    }
}

impl<H: TabletHandle> Deref for ClaimedInterface<'_, H> {
    type Target = H;

    fn deref(&self) -> &Self::Target {
        self.handle
    }
}

impl<H: TabletHandle> DerefMut for ClaimedInterface<'_, H> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.handle
    }
}

impl<H: TabletHandle> Drop for ClaimedInterface<'_, H> {
    fn drop(&mut self) {
        // Nothing useful can be done with a failed release at this point, the handle is about
        // to be closed anyway.
        match self.handle.release_interface(self.interface) {
            Ok(()) => debug!("Released interface {}", self.interface),
            Err(e) => warn!("Unable to release interface {}: {}", self.interface, e),
        }
    }
}
