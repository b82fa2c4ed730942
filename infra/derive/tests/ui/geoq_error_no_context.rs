use geoq_derive::geoq_error;

#[geoq_error]
pub enum DistanceError {
    #[error("Invalid distance: {source}")]
    Parse {
        source: std::num::ParseFloatError,
    },
}

fn main() {}
