//! Derived meteorological quantities
//!
//! Every formula works internally in Celsius and percent; Fahrenheit entry
//! points convert on the way in and out. Formulas with a limited validity
//! domain also expose a checked variant returning [`Validated`], which carries
//! a best-effort value together with an optional [`WxError::InputOutOfRange`].
//!
//! [`Validated`]: crate::error::Validated
//! [`WxError::InputOutOfRange`]: crate::error::WxError::InputOutOfRange

pub mod dew_point;
pub mod heat_index;
pub mod humidity;
pub mod wet_bulb;
pub mod wind_chill;

pub use dew_point::{dew_point_c, dew_point_f};
pub use heat_index::{
    heat_index_c, heat_index_c_checked, heat_index_f, heat_index_f_checked, heat_index_warning_c,
    heat_index_warning_f, HeatIndexWarning,
};
pub use humidity::{
    absolute_humidity_c, absolute_humidity_f, indoor_humidity_recommendation_c,
    indoor_humidity_recommendation_f, relative_humidity_c, relative_humidity_f,
    saturation_vapor_pressure,
};
pub use wet_bulb::{wet_bulb_c, wet_bulb_f};
pub use wind_chill::{wind_chill_c, wind_chill_c_checked, wind_chill_f, wind_chill_f_checked};
