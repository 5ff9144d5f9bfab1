//! rfsoc-json contains the JSON schemas used by rfsoc-sdr: the region map that
//! describes where the memory of each DAC and ADC lives, and the format in which
//! ADC captures are reported.

#![warn(missing_docs)]

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Region map JSON schema.
///
/// The region map assigns each DAC and ADC channel to the memory that backs it
/// and to the register block of its playback or capture controller. Channels
/// are keyed by their two-digit name, formed by the tile index followed by the
/// block index inside the tile (for instance `"12"` is block 2 of tile 1).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct RegionMap {
    /// DAC channels.
    pub dacs: BTreeMap<String, Region>,
    /// ADC channels.
    pub adcs: BTreeMap<String, Region>,
}

/// Memory region JSON schema.
///
/// Describes the sample memory of a single DAC or ADC channel.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Region {
    /// Memory technology used by the channel.
    pub technology: Technology,
    /// Physical base address of the sample memory.
    pub base: u64,
    /// Size of the sample memory address space in bytes.
    pub size: u64,
    /// Register block of the controller associated with the memory.
    pub controller: Controller,
}

/// Controller register block JSON schema.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Controller {
    /// Physical base address of the register block.
    pub base: u64,
    /// Size of the register block in bytes.
    #[serde(default = "default_controller_size")]
    pub size: u64,
}

fn default_controller_size() -> u64 {
    0x1000
}

/// Memory technology.
///
/// This enum lists the memories that can back a DAC or ADC channel.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Technology {
    /// Block RAM.
    #[serde(rename = "BRAM")]
    Bram,
    /// Ultra RAM, accessed through a BRAM controller.
    #[serde(rename = "URAM")]
    Uram,
    /// DDR4 memory.
    #[serde(rename = "DDR4")]
    Ddr4,
}

macro_rules! impl_str_conv {
    ($ty:ty, $($s:expr => $v:ident),*) => {
        impl std::str::FromStr for $ty {
            type Err = ();

            fn from_str(s: &str) -> Result<Self, ()> {
                Ok(match s {
                    $(
                        $s => <$ty>::$v,
                    )*
                        _ => return Err(()),
                })
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
                write!(f, "{}", match self {
                    $(
                        <$ty>::$v => $s,
                    )*
                })
            }
        }
    }
}

impl_str_conv!(Technology,
               "BRAM" => Bram,
               "URAM" => Uram,
               "DDR4" => Ddr4);

/// ADC capture mode.
///
/// The capture mode follows the mode in which the ADC tile has been configured.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CaptureMode {
    /// Complex (I/Q) samples.
    IQ,
    /// Real samples.
    Real,
}

impl_str_conv!(CaptureMode,
               "iq" => IQ,
               "real" => Real);

/// ADC capture JSON schema.
///
/// This is the format in which the samples read back from the ADC capture
/// memory are reported.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "mode")]
pub enum Capture {
    /// Complex capture.
    IQ {
        /// In-phase samples.
        i: Vec<i16>,
        /// Quadrature samples.
        q: Vec<i16>,
    },
    /// Real capture.
    Real {
        /// Real samples.
        samples: Vec<i16>,
    },
}

impl Capture {
    /// Returns the number of samples in the capture.
    ///
    /// For complex captures, each I/Q pair counts as a single sample.
    pub fn len(&self) -> usize {
        match self {
            Capture::IQ { i, .. } => i.len(),
            Capture::Real { samples } => samples.len(),
        }
    }

    /// Returns `true` if the capture does not contain any samples.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_region_map() {
        let json = r#"{
            "dacs": {
                "00": {
                    "technology": "BRAM",
                    "base": 2684354560,
                    "size": 1048576,
                    "controller": { "base": 2687500288 }
                }
            },
            "adcs": {}
        }"#;
        let map: RegionMap = serde_json::from_str(json).unwrap();
        let dac = &map.dacs["00"];
        assert_eq!(dac.technology, Technology::Bram);
        assert_eq!(dac.base, 0xA000_0000);
        assert_eq!(dac.controller.size, 0x1000);
        assert!(map.adcs.is_empty());
    }

    #[test]
    fn capture_is_tagged_by_mode() {
        let capture = Capture::IQ {
            i: vec![1, -1],
            q: vec![2, -2],
        };
        assert_eq!(
            serde_json::to_string(&capture).unwrap(),
            r#"{"mode":"IQ","i":[1,-1],"q":[2,-2]}"#
        );
        assert_eq!(capture.len(), 2);
    }

    #[test]
    fn str_conv() {
        assert_eq!("DDR4".parse::<Technology>(), Ok(Technology::Ddr4));
        assert_eq!("iq".parse::<CaptureMode>(), Ok(CaptureMode::IQ));
        assert!("complex".parse::<CaptureMode>().is_err());
        assert_eq!(Technology::Uram.to_string(), "URAM");
    }
}
