use std::time::Duration;

use rusb::{Context, Device, DeviceHandle, UsbContext};

use crate::device::base::{DeviceList, Located, TabletHandle, UsbStack};

// Everything here is a thin pass-through, rusb already ties libusb_exit, libusb_free_device_list
// and libusb_close to Drop on Context, DeviceList and DeviceHandle respectively.

impl UsbStack for Context {
    type Device = Device<Context>;
    type List = rusb::DeviceList<Context>;
    type Handle = DeviceHandle<Context>;

    fn device_list(&self) -> Result<Self::List, rusb::Error> {
        self.devices()
    }

    fn open(&self, device: &Self::Device) -> Result<Self::Handle, rusb::Error> {
        device.open()
    }
}

impl<T: UsbContext> DeviceList for rusb::DeviceList<T> {
    type Device = Device<T>;

    fn devices(&self) -> Vec<Self::Device> {
        self.iter().collect()
    }
}

impl<T: UsbContext> Located for Device<T> {
    fn bus_number(&self) -> u8 {
        Device::bus_number(self)
    }

    fn address(&self) -> u8 {
        Device::address(self)
    }
}

impl<T: UsbContext> TabletHandle for DeviceHandle<T> {
    fn set_auto_detach_kernel_driver(&mut self, auto_detach: bool) -> Result<(), rusb::Error> {
        DeviceHandle::set_auto_detach_kernel_driver(self, auto_detach)
    }

    fn claim_interface(&mut self, interface: u8) -> Result<(), rusb::Error> {
        DeviceHandle::claim_interface(self, interface)
    }

    fn release_interface(&mut self, interface: u8) -> Result<(), rusb::Error> {
        DeviceHandle::release_interface(self, interface)
    }

    fn detach_kernel_driver(&mut self, interface: u8) -> Result<(), rusb::Error> {
        DeviceHandle::detach_kernel_driver(self, interface)
    }

    fn write_control(
        &mut self,
        request_type: u8,
        request: u8,
        value: u16,
        index: u16,
        data: &[u8],
        timeout: Duration,
    ) -> Result<usize, rusb::Error> {
        DeviceHandle::write_control(self, request_type, request, value, index, data, timeout)
    }
}
