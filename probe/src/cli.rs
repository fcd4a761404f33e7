use clap::{Parser, ValueEnum};

/// Probe a 10moons tablet.
#[derive(Parser, Debug)]
#[clap(about, version, author)]
pub struct Cli {
    /// Bus number.
    #[clap(value_name = "BUS_NUM", allow_hyphen_values = true)]
    pub bus_num: String,

    /// Device address.
    #[clap(value_name = "DEV_ADDR", allow_hyphen_values = true)]
    pub dev_addr: String,

    /// Minimum log level to print out
    #[clap(long, value_enum, default_value = "warn")]
    pub log_level: LevelFilter,
}

impl Cli {
    pub fn bus_number(&self) -> u8 {
        parse_byte(&self.bus_num)
    }

    pub fn device_address(&self) -> u8 {
        parse_byte(&self.dev_addr)
    }
}

/// Reads a number the way C's `atoi` does, then truncates it to a byte. Garbage becomes 0 and
/// out of range values wrap, nothing here is ever rejected.
pub fn parse_byte(text: &str) -> u8 {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let value = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |value, digit| {
            value.wrapping_mul(10).wrapping_add(i64::from(digit - b'0'))
        });

    let value = if negative { value.wrapping_neg() } else { value };
    value as u8
}

#[derive(ValueEnum, Copy, Clone, Eq, PartialEq, Debug)]
pub enum LevelFilter {
    /// Print nothing but the final diagnostic
    Off,
    Error,
    /// Release failures during teardown
    Warn,
    /// A line once the tablet has been switched
    Info,
    /// Every USB step, and each report as it is sent
    Debug,
    /// As debug, plus libusb's own debug output
    Trace,
}

impl From<LevelFilter> for log::LevelFilter {
    fn from(level: LevelFilter) -> Self {
        match level {
            LevelFilter::Off => log::LevelFilter::Off,
            LevelFilter::Error => log::LevelFilter::Error,
            LevelFilter::Warn => log::LevelFilter::Warn,
            LevelFilter::Info => log::LevelFilter::Info,
            LevelFilter::Debug => log::LevelFilter::Debug,
            LevelFilter::Trace => log::LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn plain_decimal() {
        assert_eq!(parse_byte("3"), 3);
        assert_eq!(parse_byte("255"), 255);
        assert_eq!(parse_byte("007"), 7);
    }

    #[test]
    fn garbage_is_zero() {
        assert_eq!(parse_byte(""), 0);
        assert_eq!(parse_byte("bus"), 0);
        assert_eq!(parse_byte("-"), 0);
        assert_eq!(parse_byte("0x10"), 0);
    }

    #[test]
    fn stops_at_the_first_non_digit() {
        assert_eq!(parse_byte("  12abc"), 12);
        assert_eq!(parse_byte("+4 "), 4);
        assert_eq!(parse_byte("1.5"), 1);
    }

    #[test]
    fn out_of_range_wraps() {
        assert_eq!(parse_byte("256"), 0);
        assert_eq!(parse_byte("300"), 44);
        assert_eq!(parse_byte("-1"), 255);
    }

    #[test]
    fn two_positionals_parse() {
        let cli = Cli::try_parse_from(["tenmoons-probe", "1", "14"]).unwrap();
        assert_eq!(cli.bus_number(), 1);
        assert_eq!(cli.device_address(), 14);
        assert_eq!(cli.log_level, LevelFilter::Warn);
    }

    #[test]
    fn negative_positionals_are_not_flags() {
        let cli = Cli::try_parse_from(["tenmoons-probe", "-1", "2"]).unwrap();
        assert_eq!(cli.bus_number(), 255);
    }

    #[test]
    fn dash_prefixed_words_are_positionals() {
        let cli = Cli::try_parse_from(["tenmoons-probe", "-1a", "3"]).unwrap();
        assert_eq!(cli.bus_number(), 255);
        assert_eq!(cli.device_address(), 3);

        let cli = Cli::try_parse_from(["tenmoons-probe", "-x", "3"]).unwrap();
        assert_eq!(cli.bus_number(), 0);

        let cli = Cli::try_parse_from(["tenmoons-probe", "4", "-x"]).unwrap();
        assert_eq!(cli.bus_number(), 4);
        assert_eq!(cli.device_address(), 0);
    }

    #[test]
    fn every_level_maps_onto_log() {
        let levels = [
            (LevelFilter::Off, log::LevelFilter::Off),
            (LevelFilter::Error, log::LevelFilter::Error),
            (LevelFilter::Warn, log::LevelFilter::Warn),
            (LevelFilter::Info, log::LevelFilter::Info),
            (LevelFilter::Debug, log::LevelFilter::Debug),
            (LevelFilter::Trace, log::LevelFilter::Trace),
        ];
        for (level, expected) in levels {
            assert_eq!(log::LevelFilter::from(level), expected);
        }
    }

    #[test]
    fn non_numeric_positionals_are_accepted() {
        let cli = Cli::try_parse_from(["tenmoons-probe", "usb", "2"]).unwrap();
        assert_eq!(cli.bus_number(), 0);
    }

    #[test]
    fn log_level_option() {
        let cli =
            Cli::try_parse_from(["tenmoons-probe", "--log-level", "trace", "1", "2"]).unwrap();
        assert_eq!(cli.log_level, LevelFilter::Trace);
        assert_eq!(log::LevelFilter::from(cli.log_level), log::LevelFilter::Trace);
    }

    #[test]
    fn too_few_arguments() {
        for args in [vec!["tenmoons-probe"], vec!["tenmoons-probe", "1"]] {
            let error = Cli::try_parse_from(args).unwrap_err();
            assert_eq!(error.kind(), ErrorKind::MissingRequiredArgument);
        }
    }

    #[test]
    fn too_many_arguments() {
        let error = Cli::try_parse_from(["tenmoons-probe", "1", "2", "3"]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::UnknownArgument);
    }
}
