//! Closed set of supported OLX country sites and their base hosts.

// std
use std::str::FromStr;
// self
use crate::{_prelude::*, error::ConfigError};

/// Supported OLX country sites.
///
/// Each variant maps 1:1 to a base host; all API calls are issued relative to
/// `<host>/api/`. Unknown country codes are rejected at construction via [`FromStr`],
/// never at call time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Country {
	/// Poland (`olx.pl`).
	Pl,
	/// Bulgaria (`olx.bg`).
	Bg,
	/// Romania (`olx.ro`).
	Ro,
	/// Portugal (`olx.pt`).
	Pt,
	/// Ukraine (`olx.ua`).
	Ua,
	/// Kazakhstan (`olx.kz`).
	Kz,
	/// Uzbekistan (`olx.uz`).
	Uz,
}
impl Country {
	/// Every supported country, in declaration order.
	pub const ALL: [Self; 7] =
		[Self::Pl, Self::Bg, Self::Ro, Self::Pt, Self::Ua, Self::Kz, Self::Uz];

	/// Returns the lowercase ISO-style country code.
	pub const fn code(self) -> &'static str {
		match self {
			Self::Pl => "pl",
			Self::Bg => "bg",
			Self::Ro => "ro",
			Self::Pt => "pt",
			Self::Ua => "ua",
			Self::Kz => "kz",
			Self::Uz => "uz",
		}
	}

	/// Returns the base host serving this country's marketplace.
	pub const fn host(self) -> &'static str {
		match self {
			Self::Pl => "https://www.olx.pl",
			Self::Bg => "https://www.olx.bg",
			Self::Ro => "https://www.olx.ro",
			Self::Pt => "https://www.olx.pt",
			Self::Ua => "https://www.olx.ua",
			Self::Kz => "https://www.olx.kz",
			Self::Uz => "https://www.olx.uz",
		}
	}
}
impl FromStr for Country {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|country| country.code() == s)
			.ok_or_else(|| ConfigError::UnsupportedCountry(s.into()))
	}
}
impl Display for Country {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.code())
	}
}
