use log::{debug, info};
use rusb::{Context, LogLevel, UsbContext};

use crate::device::base::{ClaimedInterface, DeviceList, Located, TabletHandle, UsbStack};
use crate::devices::TabletDevice;
use crate::error::ProbeError;
use crate::reports::{
    ENABLE_SEQUENCE, HID_SET_REPORT, REPORT_TIMEOUT, SET_REPORT_REQUEST_TYPE, TABLET_INTERFACE,
};

/// Switches the tablet at `target` into full reporting mode using a fresh libusb context.
pub fn enable_tablet(target: TabletDevice) -> Result<(), ProbeError> {
    probe(Context::new, target)
}

/// As [`enable_tablet`], but with libusb's own logging raised to `level` before enumeration.
pub fn enable_tablet_with_log_level(
    target: TabletDevice,
    level: LogLevel,
) -> Result<(), ProbeError> {
    probe(
        || {
            let mut context = Context::new()?;
            context.set_log_level(level);
            Ok(context)
        },
        target,
    )
}

/// Locates `target`, claims the tablet interface and sends the enable sequence.
///
/// Every resource acquired along the way is a local, so whichever step fails, the claim is
/// released, the handle closed, the device list freed and the context torn down, in that order
/// and only for what was actually acquired.
pub fn probe<S, F>(init: F, target: TabletDevice) -> Result<(), ProbeError>
where
    S: UsbStack,
    F: FnOnce() -> Result<S, rusb::Error>,
{
    let stack = init().map_err(ProbeError::Init)?;

    let list = stack.device_list().map_err(ProbeError::DeviceList)?;
    let devices = list.devices();
    debug!("Enumerated {} USB devices", devices.len());

    let device = devices
        .into_iter()
        .find(|device| {
            device.bus_number() == target.bus_number && device.address() == target.address
        })
        .ok_or(ProbeError::DeviceNotFound)?;

    let mut handle = stack.open(&device).map_err(ProbeError::Open)?;
    drop(device);
    drop(list);
    debug!("Opened device at {}", target);

    handle
        .set_auto_detach_kernel_driver(true)
        .map_err(ProbeError::AutoDetach)?;

    let mut claimed =
        ClaimedInterface::claim(&mut handle, TABLET_INTERFACE).map_err(ProbeError::Claim)?;

    // With auto-detach on, claiming has normally already kicked the driver off, in which case
    // libusb reports there is nothing left to detach.
    match claimed.detach_kernel_driver(TABLET_INTERFACE) {
        Ok(()) => debug!("Detached kernel driver from interface {}", TABLET_INTERFACE),
        Err(rusb::Error::NotFound) => {
            debug!("No kernel driver bound to interface {}", TABLET_INTERFACE)
        }
        Err(e) => return Err(ProbeError::DetachKernelDriver(e)),
    }

    let interface = u16::from(claimed.interface());
    for (index, report) in ENABLE_SEQUENCE.iter().enumerate() {
        let written = claimed
            .write_control(
                SET_REPORT_REQUEST_TYPE,
                HID_SET_REPORT,
                report.value,
                interface,
                &report.data,
                REPORT_TIMEOUT,
            )
            .map_err(|source| ProbeError::SetReport { index, source })?;
        debug!("Set report #{} ({} bytes): {:02x?}", index, written, report.data);
    }

    info!("Tablet at {} is now in full reporting mode", target);
    Ok(())
}
