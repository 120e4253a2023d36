//! Runtime lookup of identifier kinds.
//!
//! Every identifier module is reachable through [`IdentifierKind`], which
//! carries the module's dotted name (`"br.cnpj"`), its country and the four
//! contract functions. Kinds whose region feature is disabled do not exist
//! as variants.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::error::Result;

/// Returned when parsing an unknown identifier kind name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown identifier kind: {0}")]
pub struct UnknownKind(pub String);

macro_rules! identifier_kinds {
    ($(
        $(#[$cfg:meta])*
        $variant:ident => $name:tt, $country:expr, $($module:ident)::+;
    )*) => {
        /// One variant per supported identifier kind.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum IdentifierKind {
            $(
                $(#[$cfg])*
                #[serde(rename = $name)]
                $variant,
            )*
        }

        impl IdentifierKind {
            /// Every kind compiled into this build, ordered by name.
            pub const ALL: &'static [IdentifierKind] = &[
                $( $(#[$cfg])* IdentifierKind::$variant, )*
            ];

            /// Dotted module name, e.g. `"br.cnpj"`.
            pub fn name(&self) -> &'static str {
                match self {
                    $( $(#[$cfg])* IdentifierKind::$variant => $name, )*
                }
            }

            /// ISO 3166-1 alpha-2 code of the issuing country, `"EU"` for
            /// kinds issued EU-wide and `None` for global ones.
            pub fn country(&self) -> Option<&'static str> {
                match self {
                    $( $(#[$cfg])* IdentifierKind::$variant => $country, )*
                }
            }

            fn dispatch_compact(&self, number: &str) -> String {
                match self {
                    $( $(#[$cfg])* IdentifierKind::$variant => crate::$($module)::+::compact(number), )*
                }
            }

            fn dispatch_validate(&self, number: &str) -> Result<String> {
                match self {
                    $( $(#[$cfg])* IdentifierKind::$variant => crate::$($module)::+::validate(number), )*
                }
            }

            fn dispatch_format(&self, number: &str) -> String {
                match self {
                    $( $(#[$cfg])* IdentifierKind::$variant => crate::$($module)::+::format(number), )*
                }
            }
        }
    };
}

identifier_kinds! {
    #[cfg(feature = "europe")]
    AdNrt => "ad.nrt", Some("AD"), ad::nrt;
    #[cfg(feature = "europe")]
    AlNipt => "al.nipt", Some("AL"), al::nipt;
    #[cfg(feature = "americas")]
    ArCuit => "ar.cuit", Some("AR"), ar::cuit;
    #[cfg(feature = "americas")]
    BrCnpj => "br.cnpj", Some("BR"), br::cnpj;
    #[cfg(feature = "americas")]
    BrCpf => "br.cpf", Some("BR"), br::cpf;
    #[cfg(feature = "americas")]
    ClRut => "cl.rut", Some("CL"), cl::rut;
    #[cfg(feature = "americas")]
    CoNit => "co.nit", Some("CO"), co::nit;
    #[cfg(feature = "europe")]
    EuEic => "eu.eic", Some("EU"), eu::eic;
    #[cfg(feature = "europe")]
    FiAssociationId => "fi.associationid", Some("FI"), fi::associationid;
    Figi => "figi", None, figi;
    #[cfg(feature = "europe")]
    GbNhs => "gb.nhs", Some("GB"), gb::nhs;
    #[cfg(feature = "asia")]
    IdNpwp => "id.npwp", Some("ID"), id::npwp;
    #[cfg(feature = "asia")]
    InEpic => "in.epic", Some("IN"), in_::epic;
    #[cfg(feature = "africa")]
    MuNid => "mu.nid", Some("MU"), mu::nid;
    #[cfg(feature = "europe")]
    NlBsn => "nl.bsn", Some("NL"), nl::bsn;
    #[cfg(feature = "americas")]
    PeCui => "pe.cui", Some("PE"), pe::cui;
    #[cfg(feature = "americas")]
    PeRuc => "pe.ruc", Some("PE"), pe::ruc;
    #[cfg(feature = "europe")]
    PtCc => "pt.cc", Some("PT"), pt::cc;
    #[cfg(feature = "americas")]
    PyRuc => "py.ruc", Some("PY"), py::ruc;
    #[cfg(feature = "europe")]
    RoCui => "ro.cui", Some("RO"), ro::cui;
    #[cfg(feature = "asia")]
    ThMoa => "th.moa", Some("TH"), th::moa;
    #[cfg(feature = "asia")]
    ThPin => "th.pin", Some("TH"), th::pin;
    #[cfg(feature = "asia")]
    ThTin => "th.tin", Some("TH"), th::tin;
    #[cfg(feature = "asia")]
    TwUbn => "tw.ubn", Some("TW"), tw::ubn;
    #[cfg(feature = "americas")]
    UsAtin => "us.atin", Some("US"), us::atin;
    #[cfg(feature = "americas")]
    UsEin => "us.ein", Some("US"), us::ein;
    #[cfg(feature = "americas")]
    UsItin => "us.itin", Some("US"), us::itin;
    #[cfg(feature = "americas")]
    UsPtin => "us.ptin", Some("US"), us::ptin;
    #[cfg(feature = "americas")]
    UsSsn => "us.ssn", Some("US"), us::ssn;
    #[cfg(feature = "americas")]
    UsTin => "us.tin", Some("US"), us::tin;
    #[cfg(feature = "americas")]
    VeRif => "ve.rif", Some("VE"), ve::rif;
}

impl IdentifierKind {
    /// Convert the number to the minimal representation of this kind.
    pub fn compact(&self, number: &str) -> String {
        self.dispatch_compact(number)
    }

    /// Validate the number as this kind, returning its compact form.
    pub fn validate(&self, number: &str) -> Result<String> {
        let result = self.dispatch_validate(number);
        match &result {
            Ok(_) => tracing::trace!(kind = %self, "number accepted"),
            Err(error) => tracing::trace!(kind = %self, ?error, "number rejected"),
        }
        result
    }

    /// Check if the number is valid for this kind.
    pub fn is_valid(&self, number: &str) -> bool {
        self.validate(number).is_ok()
    }

    /// Reformat the number to this kind's presentation format.
    pub fn format(&self, number: &str) -> String {
        self.dispatch_format(number)
    }

    /// All kinds registered for `country` (case-insensitive).
    pub fn for_country(country: &str) -> impl Iterator<Item = IdentifierKind> + '_ {
        Self::ALL.iter().copied().filter(move |kind| {
            kind.country()
                .is_some_and(|c| c.eq_ignore_ascii_case(country))
        })
    }
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for IdentifierKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}

/// Every kind that accepts `number`, in [`IdentifierKind::ALL`] order.
///
/// With `country` set, only kinds of that country are tried; kinds without
/// a country are then skipped.
pub fn guess_kinds(number: &str, country: Option<&str>) -> Vec<IdentifierKind> {
    let matches: Vec<IdentifierKind> = IdentifierKind::ALL
        .iter()
        .copied()
        .filter(|kind| match country {
            Some(country) => kind
                .country()
                .is_some_and(|c| c.eq_ignore_ascii_case(country)),
            None => true,
        })
        .filter(|kind| kind.is_valid(number))
        .collect();
    tracing::debug!(?country, candidates = matches.len(), "guessed identifier kinds");
    matches
}
