use std::time::Duration;

use rusb::{Direction, Recipient, RequestType};

/// The vendor interface the tablet listens for mode switches on.
pub const TABLET_INTERFACE: u8 = 2;

/// HID class request SET_REPORT.
pub const HID_SET_REPORT: u8 = 0x09;

/// Host to device, class request, addressed to an interface.
pub const SET_REPORT_REQUEST_TYPE: u8 =
    rusb::request_type(Direction::Out, RequestType::Class, Recipient::Interface);

pub const REPORT_TIMEOUT: Duration = Duration::from_millis(250);

/// Feature report 8 (report type 3 in the high byte).
const FEATURE_REPORT_8: u16 = 0x0308;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Report {
    pub value: u16,
    pub data: [u8; 8],
}

// Captured from the vendor driver. The device only starts sending full pen reports once it has
// seen all four of these, in this order, so treat them as opaque.
pub const ENABLE_SEQUENCE: [Report; 4] = [
    Report {
        value: FEATURE_REPORT_8,
        data: [0x08, 0x04, 0x1d, 0x01, 0xff, 0xff, 0x06, 0x2e],
    },
    Report {
        value: FEATURE_REPORT_8,
        data: [0x08, 0x03, 0x00, 0xff, 0xf0, 0x00, 0xff, 0xf0],
    },
    Report {
        value: FEATURE_REPORT_8,
        data: [0x08, 0x06, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00],
    },
    Report {
        value: FEATURE_REPORT_8,
        data: [0x08, 0x03, 0x00, 0xff, 0xf0, 0x00, 0xff, 0xf0],
    },
];
