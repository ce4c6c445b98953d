mod acute;

pub use acute::{AnalyzeAngles, AngleStats};
