use serde::{Deserialize, Serialize};
use std::fmt;

/// Jurisdictions retained in the summary dataset: the 50 US states plus
/// DC, PR and VI. Station files resolving to anything else (GU, AS,
/// foreign stations) are excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UsState {
    AK,
    AL,
    AR,
    AZ,
    CA,
    CO,
    CT,
    DC,
    DE,
    FL,
    GA,
    HI,
    IA,
    ID,
    IL,
    IN,
    KS,
    KY,
    LA,
    MA,
    MD,
    ME,
    MI,
    MN,
    MO,
    MS,
    MT,
    NC,
    ND,
    NE,
    NH,
    NJ,
    NM,
    NV,
    NY,
    OH,
    OK,
    OR,
    PA,
    PR,
    RI,
    SC,
    SD,
    TN,
    TX,
    UT,
    VA,
    VI,
    VT,
    WA,
    WI,
    WV,
    WY,
}

impl UsState {
    /// Every recognized code, in the order used throughout the crate.
    pub const ALL: [UsState; 53] = [
        UsState::AK,
        UsState::AL,
        UsState::AR,
        UsState::AZ,
        UsState::CA,
        UsState::CO,
        UsState::CT,
        UsState::DC,
        UsState::DE,
        UsState::FL,
        UsState::GA,
        UsState::HI,
        UsState::IA,
        UsState::ID,
        UsState::IL,
        UsState::IN,
        UsState::KS,
        UsState::KY,
        UsState::LA,
        UsState::MA,
        UsState::MD,
        UsState::ME,
        UsState::MI,
        UsState::MN,
        UsState::MO,
        UsState::MS,
        UsState::MT,
        UsState::NC,
        UsState::ND,
        UsState::NE,
        UsState::NH,
        UsState::NJ,
        UsState::NM,
        UsState::NV,
        UsState::NY,
        UsState::OH,
        UsState::OK,
        UsState::OR,
        UsState::PA,
        UsState::PR,
        UsState::RI,
        UsState::SC,
        UsState::SD,
        UsState::TN,
        UsState::TX,
        UsState::UT,
        UsState::VA,
        UsState::VI,
        UsState::VT,
        UsState::WA,
        UsState::WI,
        UsState::WV,
        UsState::WY,
    ];

    /// Parse an exact two-letter code. Case-sensitive; anything not in
    /// the recognized list returns `None`.
    pub fn parse(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|state| state.as_str() == code)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UsState::AK => "AK",
            UsState::AL => "AL",
            UsState::AR => "AR",
            UsState::AZ => "AZ",
            UsState::CA => "CA",
            UsState::CO => "CO",
            UsState::CT => "CT",
            UsState::DC => "DC",
            UsState::DE => "DE",
            UsState::FL => "FL",
            UsState::GA => "GA",
            UsState::HI => "HI",
            UsState::IA => "IA",
            UsState::ID => "ID",
            UsState::IL => "IL",
            UsState::IN => "IN",
            UsState::KS => "KS",
            UsState::KY => "KY",
            UsState::LA => "LA",
            UsState::MA => "MA",
            UsState::MD => "MD",
            UsState::ME => "ME",
            UsState::MI => "MI",
            UsState::MN => "MN",
            UsState::MO => "MO",
            UsState::MS => "MS",
            UsState::MT => "MT",
            UsState::NC => "NC",
            UsState::ND => "ND",
            UsState::NE => "NE",
            UsState::NH => "NH",
            UsState::NJ => "NJ",
            UsState::NM => "NM",
            UsState::NV => "NV",
            UsState::NY => "NY",
            UsState::OH => "OH",
            UsState::OK => "OK",
            UsState::OR => "OR",
            UsState::PA => "PA",
            UsState::PR => "PR",
            UsState::RI => "RI",
            UsState::SC => "SC",
            UsState::SD => "SD",
            UsState::TN => "TN",
            UsState::TX => "TX",
            UsState::UT => "UT",
            UsState::VA => "VA",
            UsState::VI => "VI",
            UsState::VT => "VT",
            UsState::WA => "WA",
            UsState::WI => "WI",
            UsState::WV => "WV",
            UsState::WY => "WY",
        }
    }
}

impl fmt::Display for UsState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_all_53_codes() {
        assert_eq!(UsState::ALL.len(), 53);
        for state in UsState::ALL {
            assert_eq!(UsState::parse(state.as_str()), Some(state));
        }
    }

    #[test]
    fn parses_states_and_district() {
        assert_eq!(UsState::parse("CA"), Some(UsState::CA));
        assert_eq!(UsState::parse("DC"), Some(UsState::DC));
        assert_eq!(UsState::parse("PR"), Some(UsState::PR));
        assert_eq!(UsState::parse("VI"), Some(UsState::VI));
    }

    #[test]
    fn rejects_excluded_jurisdictions() {
        assert_eq!(UsState::parse("GU"), None);
        assert_eq!(UsState::parse("AS"), None);
        assert_eq!(UsState::parse("MP"), None);
        assert_eq!(UsState::parse(""), None);
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert_eq!(UsState::parse("ca"), None);
        assert_eq!(UsState::parse("Ca"), None);
    }

    #[test]
    fn displays_as_code() {
        assert_eq!(UsState::TX.to_string(), "TX");
        assert_eq!(format!("{}", UsState::WY), "WY");
    }
}
