#![allow(dead_code)]

use std::fmt;

use serde::{Serialize, Serializer};

/// US state and territory codes recognized by the state map, plus an explicit
/// `Unknown` entry standing in for postings without a usable location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateCode {
    Al,
    Ak,
    Az,
    Ar,
    Ca,
    Co,
    Ct,
    De,
    Dc,
    Fl,
    Ga,
    Hi,
    Id,
    Il,
    In,
    Ia,
    Ks,
    Ky,
    La,
    Me,
    Md,
    Ma,
    Mi,
    Mn,
    Ms,
    Mo,
    Mt,
    Ne,
    Nv,
    Nh,
    Nj,
    Nm,
    Ny,
    Nc,
    Nd,
    Oh,
    Ok,
    Or,
    Pa,
    Ri,
    Sc,
    Sd,
    Tn,
    Tx,
    Ut,
    Vt,
    Va,
    Wa,
    Wv,
    Wi,
    Wy,
    Unknown,
}

/// Every entry of the state map, in output order. `Unknown` sits where the
/// dataset's null state first showed up when this ordering was fixed.
pub const ALL_STATES: [StateCode; 52] = [
    StateCode::Ca,
    StateCode::Mi,
    StateCode::Ut,
    StateCode::Nj,
    StateCode::Ny,
    StateCode::Unknown,
    StateCode::Tn,
    StateCode::Ne,
    StateCode::In,
    StateCode::Ct,
    StateCode::Il,
    StateCode::Pa,
    StateCode::Fl,
    StateCode::Va,
    StateCode::Wi,
    StateCode::Az,
    StateCode::Wa,
    StateCode::Md,
    StateCode::Nc,
    StateCode::Oh,
    StateCode::Nm,
    StateCode::Tx,
    StateCode::Nh,
    StateCode::Mt,
    StateCode::Or,
    StateCode::Ma,
    StateCode::La,
    StateCode::Sc,
    StateCode::Ga,
    StateCode::Ia,
    StateCode::Mn,
    StateCode::Ak,
    StateCode::Ky,
    StateCode::Co,
    StateCode::Al,
    StateCode::Wv,
    StateCode::Dc,
    StateCode::Ar,
    StateCode::Nv,
    StateCode::De,
    StateCode::Ri,
    StateCode::Sd,
    StateCode::Ok,
    StateCode::Mo,
    StateCode::Ks,
    StateCode::Ms,
    StateCode::Hi,
    StateCode::Id,
    StateCode::Vt,
    StateCode::Me,
    StateCode::Nd,
    StateCode::Wy,
];

impl StateCode {
    /// Two-letter postal abbreviation. `None` for `Unknown`.
    pub fn code(self) -> Option<&'static str> {
        use StateCode::*;
        let code = match self {
            Al => "AL",
            Ak => "AK",
            Az => "AZ",
            Ar => "AR",
            Ca => "CA",
            Co => "CO",
            Ct => "CT",
            De => "DE",
            Dc => "DC",
            Fl => "FL",
            Ga => "GA",
            Hi => "HI",
            Id => "ID",
            Il => "IL",
            In => "IN",
            Ia => "IA",
            Ks => "KS",
            Ky => "KY",
            La => "LA",
            Me => "ME",
            Md => "MD",
            Ma => "MA",
            Mi => "MI",
            Mn => "MN",
            Ms => "MS",
            Mo => "MO",
            Mt => "MT",
            Ne => "NE",
            Nv => "NV",
            Nh => "NH",
            Nj => "NJ",
            Nm => "NM",
            Ny => "NY",
            Nc => "NC",
            Nd => "ND",
            Oh => "OH",
            Ok => "OK",
            Or => "OR",
            Pa => "PA",
            Ri => "RI",
            Sc => "SC",
            Sd => "SD",
            Tn => "TN",
            Tx => "TX",
            Ut => "UT",
            Vt => "VT",
            Va => "VA",
            Wa => "WA",
            Wv => "WV",
            Wi => "WI",
            Wy => "WY",
            Unknown => return None,
        };
        Some(code)
    }

    /// Looks up a postal abbreviation (exact, upper-case match).
    pub fn from_code(code: &str) -> Option<Self> {
        ALL_STATES
            .iter()
            .copied()
            .find(|s| s.code() == Some(code))
    }
}

impl fmt::Display for StateCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code().unwrap_or("unknown"))
    }
}

/// Serializes as the postal code, or `null` for `Unknown`.
impl Serialize for StateCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.code() {
            Some(code) => serializer.serialize_str(code),
            None => serializer.serialize_none(),
        }
    }
}
