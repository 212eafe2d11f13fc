pub mod apply;
pub mod design;
pub mod response;

pub use apply::{apply_bandpass, lfilter};
pub use design::{BandpassCoefficients, FilterSpec, design_bandpass};
pub use response::{DEFAULT_RESPONSE_POINTS, FrequencyResponse, frequency_response};
