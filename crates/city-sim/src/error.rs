use city_core::CityError;
use city_grid::EditError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] CityError),

    #[error("grid is {got_w}x{got_h} but configuration expects {expected_w}x{expected_h}")]
    GridMismatch {
        expected_w: usize,
        expected_h: usize,
        got_w:      usize,
        got_h:      usize,
    },

    #[error("edit rejected: {0}")]
    Edit(#[from] EditError),
}

pub type SimResult<T> = Result<T, SimError>;
