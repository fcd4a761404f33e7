/// Coarse classification of a probe failure, independent of which step failed.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ErrorKind {
    /// libusb could not be brought up, or the bus could not be enumerated.
    SubsystemInit,

    /// Nothing is attached at the requested bus / address.
    NotFound,

    /// The device was there, but talking to it failed.
    Transfer,
}

#[derive(thiserror::Error, Debug)]
pub enum ProbeError {
    #[error("Failed to initialize libusb: {0}")]
    Init(#[source] rusb::Error),

    #[error("Failed to get device list: {0}")]
    DeviceList(#[source] rusb::Error),

    #[error("Device not found")]
    DeviceNotFound,

    #[error("Failed to open device: {0}")]
    Open(#[source] rusb::Error),

    #[error("Failed to enable interface auto-detaching: {0}")]
    AutoDetach(#[source] rusb::Error),

    #[error("Failed to claim interface: {0}")]
    Claim(#[source] rusb::Error),

    #[error("Failed to detach kernel driver: {0}")]
    DetachKernelDriver(#[source] rusb::Error),

    #[error("Failed to set report #{index}: {source}")]
    SetReport {
        index: usize,
        #[source]
        source: rusb::Error,
    },
}

impl ProbeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ProbeError::Init(_) | ProbeError::DeviceList(_) => ErrorKind::SubsystemInit,
            ProbeError::DeviceNotFound => ErrorKind::NotFound,
            ProbeError::Open(_)
            | ProbeError::AutoDetach(_)
            | ProbeError::Claim(_)
            | ProbeError::DetachKernelDriver(_)
            | ProbeError::SetReport { .. } => ErrorKind::Transfer,
        }
    }

    /// The underlying libusb error, if this failure came from the USB layer.
    pub fn usb_error(&self) -> Option<rusb::Error> {
        match self {
            ProbeError::DeviceNotFound => None,
            ProbeError::Init(e)
            | ProbeError::DeviceList(e)
            | ProbeError::Open(e)
            | ProbeError::AutoDetach(e)
            | ProbeError::Claim(e)
            | ProbeError::DetachKernelDriver(e)
            | ProbeError::SetReport { source: e, .. } => Some(*e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usb_failures_name_the_action_and_reason() {
        let error = ProbeError::Claim(rusb::Error::Busy);
        assert_eq!(
            error.to_string(),
            format!("Failed to claim interface: {}", rusb::Error::Busy)
        );
        assert_eq!(error.kind(), ErrorKind::Transfer);
    }

    #[test]
    fn set_report_carries_its_index() {
        let error = ProbeError::SetReport {
            index: 2,
            source: rusb::Error::Timeout,
        };
        assert_eq!(
            error.to_string(),
            format!("Failed to set report #2: {}", rusb::Error::Timeout)
        );
        assert_eq!(error.usb_error(), Some(rusb::Error::Timeout));
    }

    #[test]
    fn not_found_is_a_bare_message() {
        let error = ProbeError::DeviceNotFound;
        assert_eq!(error.to_string(), "Device not found");
        assert_eq!(error.kind(), ErrorKind::NotFound);
        assert_eq!(error.usb_error(), None);
    }

    #[test]
    fn init_and_enumeration_are_subsystem_failures() {
        assert_eq!(
            ProbeError::Init(rusb::Error::NoMem).kind(),
            ErrorKind::SubsystemInit
        );
        assert_eq!(
            ProbeError::DeviceList(rusb::Error::Io).kind(),
            ErrorKind::SubsystemInit
        );
    }
}
