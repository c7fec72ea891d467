use serde::{Deserialize, Serialize};

use crate::models::UsState;

/// One output row of the summary dataset: column-wise means of the
/// selected observation columns over every cleaned row a state
/// contributed in one year. Field order matches the output header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct SummaryRecord {
    pub year: u16,
    pub state: UsState,
    pub elevation: f64,
    pub temp: f64,
    pub temp_attributes: f64,
    pub dewp: f64,
    pub dewp_attributes: f64,
    pub slp: f64,
    pub slp_attributes: f64,
    pub stp: f64,
    pub stp_attributes: f64,
    pub visib: f64,
    pub visib_attributes: f64,
    pub wdsp: f64,
    pub wdsp_attributes: f64,
    pub mxspd: f64,
    pub gust: f64,
    pub max: f64,
    pub sndp: f64,
}

impl SummaryRecord {
    /// Output header, in column order.
    pub const HEADER: [&'static str; 19] = [
        "YEAR",
        "STATE",
        "ELEVATION",
        "TEMP",
        "TEMP_ATTRIBUTES",
        "DEWP",
        "DEWP_ATTRIBUTES",
        "SLP",
        "SLP_ATTRIBUTES",
        "STP",
        "STP_ATTRIBUTES",
        "VISIB",
        "VISIB_ATTRIBUTES",
        "WDSP",
        "WDSP_ATTRIBUTES",
        "MXSPD",
        "GUST",
        "MAX",
        "SNDP",
    ];

    /// Names of the averaged metrics, in column order.
    pub const METRIC_NAMES: [&'static str; 17] = [
        "ELEVATION",
        "TEMP",
        "TEMP_ATTRIBUTES",
        "DEWP",
        "DEWP_ATTRIBUTES",
        "SLP",
        "SLP_ATTRIBUTES",
        "STP",
        "STP_ATTRIBUTES",
        "VISIB",
        "VISIB_ATTRIBUTES",
        "WDSP",
        "WDSP_ATTRIBUTES",
        "MXSPD",
        "GUST",
        "MAX",
        "SNDP",
    ];

    /// Build a record from the means of the selected columns, given in
    /// the same order as [`SummaryRecord::METRIC_NAMES`].
    pub fn from_means(year: u16, state: UsState, means: [f64; 17]) -> Self {
        Self {
            year,
            state,
            elevation: means[0],
            temp: means[1],
            temp_attributes: means[2],
            dewp: means[3],
            dewp_attributes: means[4],
            slp: means[5],
            slp_attributes: means[6],
            stp: means[7],
            stp_attributes: means[8],
            visib: means[9],
            visib_attributes: means[10],
            wdsp: means[11],
            wdsp_attributes: means[12],
            mxspd: means[13],
            gust: means[14],
            max: means[15],
            sndp: means[16],
        }
    }

    /// The averaged metric values, in the same order as
    /// [`SummaryRecord::METRIC_NAMES`].
    pub fn means(&self) -> [f64; 17] {
        [
            self.elevation,
            self.temp,
            self.temp_attributes,
            self.dewp,
            self.dewp_attributes,
            self.slp,
            self.slp_attributes,
            self.stp,
            self.stp_attributes,
            self.visib,
            self.visib_attributes,
            self.wdsp,
            self.wdsp_attributes,
            self.mxspd,
            self.gust,
            self.max,
            self.sndp,
        ]
    }
}
