#[derive(Debug)]
pub enum WeightError {
    Empty,
    ZeroWeight { index: usize },
    BadTotal { total: u64 },
}

impl std::fmt::Display for WeightError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WeightError::Empty => write!(f, "weights slice is empty"),
            WeightError::ZeroWeight { index } => {
                write!(f, "weights contain a zero value at index {index}")
            }
            WeightError::BadTotal { total } => {
                write!(f, "weights sum to {total}, expected 100")
            }
        }
    }
}

impl std::error::Error for WeightError {}
