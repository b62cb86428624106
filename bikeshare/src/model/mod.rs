pub mod bikeshare_error;
pub mod city;
pub mod selection;
pub mod stats;
pub mod table;
pub mod trip;

pub use bikeshare_error::BikeshareError;
pub use city::City;
pub use selection::{DateFilter, FilterSelection};
pub use table::TripTable;
pub use trip::{RawTripRow, Trip};
