
pub use fakes::{FailingGeoRangeRepository, RecordingGeoRangeRepository};
pub use fixtures::{SAMPLE_DATASET, resolve, sample_repository, sample_service};
