use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// Raised when a selection string names no known option.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown selection: {0}")]
pub struct UnknownSelection(pub String);

// Accessory Package - dealer-installed accessory bundles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessoryPackage {
  #[default]
  None,
  StereoSystem,
  LeatherInterior,
  StereoAndLeather,
  ComputerNavigation,
  StereoAndNavigation,
  LeatherAndNavigation,
  All,
}

impl AccessoryPackage {
  /// Fixed list price of the bundle.
  ///
  /// StereoAndLeather and ComputerNavigation share a list price.
  pub fn cost(&self) -> Decimal {
    match self {
      AccessoryPackage::None => Decimal::ZERO,
      AccessoryPackage::StereoSystem => dec!(505.05),
      AccessoryPackage::LeatherInterior => dec!(1010.10),
      AccessoryPackage::StereoAndLeather => dec!(1515.15),
      AccessoryPackage::ComputerNavigation => dec!(1515.15),
      AccessoryPackage::StereoAndNavigation => dec!(2020.20),
      AccessoryPackage::LeatherAndNavigation => dec!(2525.25),
      AccessoryPackage::All => dec!(3030.30),
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      AccessoryPackage::None => "none",
      AccessoryPackage::StereoSystem => "stereo_system",
      AccessoryPackage::LeatherInterior => "leather_interior",
      AccessoryPackage::StereoAndLeather => "stereo_and_leather",
      AccessoryPackage::ComputerNavigation => "computer_navigation",
      AccessoryPackage::StereoAndNavigation => "stereo_and_navigation",
      AccessoryPackage::LeatherAndNavigation => "leather_and_navigation",
      AccessoryPackage::All => "all",
    }
  }
}

impl fmt::Display for AccessoryPackage {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      AccessoryPackage::None => write!(f, "None"),
      AccessoryPackage::StereoSystem => write!(f, "Stereo System"),
      AccessoryPackage::LeatherInterior => write!(f, "Leather Interior"),
      AccessoryPackage::StereoAndLeather => write!(f, "Stereo and Leather"),
      AccessoryPackage::ComputerNavigation => write!(f, "Computer Navigation"),
      AccessoryPackage::StereoAndNavigation => write!(f, "Stereo and Navigation"),
      AccessoryPackage::LeatherAndNavigation => write!(f, "Leather and Navigation"),
      AccessoryPackage::All => write!(f, "All"),
    }
  }
}

impl FromStr for AccessoryPackage {
  type Err = UnknownSelection;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "none" => Ok(AccessoryPackage::None),
      "stereo_system" => Ok(AccessoryPackage::StereoSystem),
      "leather_interior" => Ok(AccessoryPackage::LeatherInterior),
      "stereo_and_leather" => Ok(AccessoryPackage::StereoAndLeather),
      "computer_navigation" => Ok(AccessoryPackage::ComputerNavigation),
      "stereo_and_navigation" => Ok(AccessoryPackage::StereoAndNavigation),
      "leather_and_navigation" => Ok(AccessoryPackage::LeatherAndNavigation),
      "all" => Ok(AccessoryPackage::All),
      _ => Err(UnknownSelection(s.to_string())),
    }
  }
}

// Exterior Finish - paint finish upgrades
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExteriorFinish {
  #[default]
  None,
  Standard,
  Pearlized,
  Custom,
}

impl ExteriorFinish {
  /// Fixed list price of the finish.
  pub fn cost(&self) -> Decimal {
    match self {
      ExteriorFinish::None => Decimal::ZERO,
      ExteriorFinish::Standard => dec!(202.02),
      ExteriorFinish::Pearlized => dec!(404.04),
      ExteriorFinish::Custom => dec!(606.06),
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      ExteriorFinish::None => "none",
      ExteriorFinish::Standard => "standard",
      ExteriorFinish::Pearlized => "pearlized",
      ExteriorFinish::Custom => "custom",
    }
  }
}

impl fmt::Display for ExteriorFinish {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ExteriorFinish::None => write!(f, "None"),
      ExteriorFinish::Standard => write!(f, "Standard"),
      ExteriorFinish::Pearlized => write!(f, "Pearlized"),
      ExteriorFinish::Custom => write!(f, "Custom"),
    }
  }
}

impl FromStr for ExteriorFinish {
  type Err = UnknownSelection;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "none" => Ok(ExteriorFinish::None),
      "standard" => Ok(ExteriorFinish::Standard),
      "pearlized" => Ok(ExteriorFinish::Pearlized),
      "custom" => Ok(ExteriorFinish::Custom),
      _ => Err(UnknownSelection(s.to_string())),
    }
  }
}
