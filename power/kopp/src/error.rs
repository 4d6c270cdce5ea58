// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Error codes for OPP table construction and registration.
//!
//! None of these errors are fatal at boot: the registrar logs them and moves
//! on to the next table entry, leaving the system with fewer performance
//! states rather than no system at all.

use core::fmt;

use strum::EnumCount;

use crate::domain::HwModule;

/// The error kind of an OPP operation.
#[repr(i32)]
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, EnumCount)]
pub enum OppErrorKind {
    /// The named device does not exist on this chip variant.
    DeviceNotFound = 1,
    /// The authority refused a frequency/voltage pair.
    RegistrationRejected,
    /// A dependency-table query found no satisfying entry.
    LookupMiss,
    /// No operating point exists at the requested frequency.
    NotFound,
    /// Malformed or empty table.
    InvalidInput,
}

impl OppErrorKind {
    /// Returns the error description.
    pub fn as_str(&self) -> &'static str {
        use OppErrorKind::*;
        match *self {
            DeviceNotFound => "No such device",
            RegistrationRejected => "Operating point rejected",
            LookupMiss => "No dependency entry for voltage",
            NotFound => "Operating point not found",
            InvalidInput => "Invalid OPP table",
        }
    }

    /// Returns the error code value in `i32`.
    pub const fn code(self) -> i32 {
        self as i32
    }
}

impl TryFrom<i32> for OppErrorKind {
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        use OppErrorKind::*;
        Ok(match value {
            1 => DeviceNotFound,
            2 => RegistrationRejected,
            3 => LookupMiss,
            4 => NotFound,
            5 => InvalidInput,
            _ => return Err(value),
        })
    }
}

impl fmt::Display for OppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An OPP error together with the entry that caused it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct OppError {
    kind: OppErrorKind,
    hwmod: Option<HwModule>,
    freq_hz: Option<u64>,
    uv: Option<u32>,
}

impl OppError {
    /// Creates an error of the given kind without context.
    pub const fn new(kind: OppErrorKind) -> Self {
        Self {
            kind,
            hwmod: None,
            freq_hz: None,
            uv: None,
        }
    }

    /// Attaches the offending device.
    pub const fn with_hwmod(mut self, hwmod: HwModule) -> Self {
        self.hwmod = Some(hwmod);
        self
    }

    /// Attaches the offending frequency.
    pub const fn with_freq(mut self, freq_hz: u64) -> Self {
        self.freq_hz = Some(freq_hz);
        self
    }

    /// Attaches the offending voltage.
    pub const fn with_uv(mut self, uv: u32) -> Self {
        self.uv = Some(uv);
        self
    }

    pub const fn kind(&self) -> OppErrorKind {
        self.kind
    }

    pub const fn hwmod(&self) -> Option<HwModule> {
        self.hwmod
    }

    pub const fn freq_hz(&self) -> Option<u64> {
        self.freq_hz
    }

    pub const fn uv(&self) -> Option<u32> {
        self.uv
    }

    /// Returns the error code value in `i32`.
    pub const fn code(&self) -> i32 {
        self.kind.code()
    }
}

impl From<OppErrorKind> for OppError {
    fn from(kind: OppErrorKind) -> Self {
        Self::new(kind)
    }
}

impl PartialEq<OppErrorKind> for OppError {
    fn eq(&self, other: &OppErrorKind) -> bool {
        self.kind == *other
    }
}

impl fmt::Display for OppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(hwmod) = self.hwmod {
            write!(f, " hwmod={}", hwmod.name())?;
        }
        if let Some(freq) = self.freq_hz {
            write!(f, " f={freq}")?;
        }
        if let Some(uv) = self.uv {
            write!(f, " uv={uv}")?;
        }
        Ok(())
    }
}

/// A specialized [`Result`] type with [`OppError`] as the error type.
pub type OppResult<T = ()> = Result<T, OppError>;

/// Constructs an [`OppError`] while printing a warning message.
///
/// # Examples
///
/// ```
/// # use kopp::{opp_err_type, OppErrorKind};
/// let err = opp_err_type!(LookupMiss, "uv=1400000 above table");
/// assert_eq!(err.kind(), OppErrorKind::LookupMiss);
/// ```
#[macro_export]
macro_rules! opp_err_type {
    ($err:ident) => {{
        let err = $crate::OppError::new($crate::OppErrorKind::$err);
        $crate::__priv::warn!("[{:?}]", err.kind());
        err
    }};
    ($err:ident, $msg:expr) => {{
        let err = $crate::OppError::new($crate::OppErrorKind::$err);
        $crate::__priv::warn!("[{:?}] {}", err.kind(), $msg);
        err
    }};
}

/// Constructs an [`Err(OppError)`] while printing a warning message.
///
/// [`Err(OppError)`]: Err
#[macro_export]
macro_rules! opp_err {
    ($err:ident) => {
        Err($crate::opp_err_type!($err))
    };
    ($err:ident, $msg:expr) => {
        Err($crate::opp_err_type!($err, $msg))
    };
}

/// Ensures a condition holds, otherwise returns the given error.
#[macro_export]
macro_rules! ensure {
    ($predicate:expr, $context_selector:expr $(,)?) => {
        if !$predicate {
            return $context_selector;
        }
    };
}

#[cfg(test)]
mod tests {
    use strum::EnumCount;

    use super::*;

    #[test]
    fn test_try_from() {
        let max_code = OppErrorKind::COUNT as i32;
        assert_eq!(max_code, 5);
        assert_eq!(OppErrorKind::InvalidInput.code(), max_code);
        assert_eq!(Ok(OppErrorKind::DeviceNotFound), OppErrorKind::try_from(1));
        assert_eq!(Ok(OppErrorKind::LookupMiss), OppErrorKind::try_from(3));
        assert_eq!(Err(0), OppErrorKind::try_from(0));
        assert_eq!(Err(max_code + 1), OppErrorKind::try_from(max_code + 1));
    }

    #[test]
    fn test_display_carries_context() {
        let err = OppError::new(OppErrorKind::DeviceNotFound)
            .with_hwmod(HwModule::Fdif)
            .with_freq(32_000_000);
        let text = format!("{err}");
        assert!(text.starts_with("No such device"));
        assert!(text.contains("hwmod=fdif"));
        assert!(text.contains("f=32000000"));
        assert_eq!(err, OppErrorKind::DeviceNotFound);
    }

    #[test]
    fn test_macros() {
        let r: OppResult = opp_err!(InvalidInput, "empty table");
        assert_eq!(r.unwrap_err().kind(), OppErrorKind::InvalidInput);

        fn check(v: u32) -> OppResult<u32> {
            ensure!(v != 0, opp_err!(RegistrationRejected));
            Ok(v)
        }
        assert_eq!(check(5), Ok(5));
        assert_eq!(check(0).unwrap_err(), OppErrorKind::RegistrationRejected);
    }
}
