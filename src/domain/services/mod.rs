pub mod dates;
pub mod membership;
pub mod stats;
pub mod status;
