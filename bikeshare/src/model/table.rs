use std::io::Read;
use std::path::Path;

use kdam::tqdm;

use crate::model::{BikeshareError, City, DateFilter, RawTripRow, Trip};

/// the in-memory filtered trip dataset for the session. immutable once
/// loaded; a new load replaces the whole table.
#[derive(Debug)]
pub struct TripTable {
    pub city: City,
    pub trips: Vec<Trip>,
}

impl TripTable {
    /// reads the city's dataset file from `data_dir` and applies the month
    /// and day filters. a missing file surfaces as [`BikeshareError::CsvReadError`].
    pub fn load(
        city: City,
        months: &DateFilter,
        days: &DateFilter,
        data_dir: &Path,
    ) -> Result<TripTable, BikeshareError> {
        let path = data_dir.join(city.filename());
        log::info!("loading {}", path.to_string_lossy());
        let reader = csv::Reader::from_path(path.as_path())?;
        Self::from_reader(city, months, days, reader)
    }

    /// reads trips from an open CSV reader, deriving the month, weekday and
    /// route columns and retaining only rows matching the filters.
    pub fn from_reader<R: Read>(
        city: City,
        months: &DateFilter,
        days: &DateFilter,
        reader: csv::Reader<R>,
    ) -> Result<TripTable, BikeshareError> {
        let row_iter = tqdm!(
            reader.into_deserialize::<RawTripRow>(),
            desc = format!("reading {}", city.filename())
        );
        let mut trips = Vec::new();
        for row in row_iter {
            let trip = Trip::new(row?)?;
            if months.accepts(&trip.month) && days.accepts(&trip.day_of_week) {
                trips.push(trip);
            }
        }
        Ok(TripTable { city, trips })
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }
}
